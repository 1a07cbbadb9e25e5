//! # Unavailable Codec

use crate::{WBResult, WordbankError, external::ExternalCodec, types::TokenId};

/// An [`ExternalCodec`] which is never available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnavailableCodec;

impl UnavailableCodec {
    fn error(&self) -> WordbankError {
        WordbankError::External(format!("{} codec is not available", self.name()))
    }
}

impl ExternalCodec for UnavailableCodec {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn try_encode(
        &self,
        _text: &str,
    ) -> WBResult<Vec<TokenId>> {
        Err(self.error())
    }

    fn try_decode(
        &self,
        _ids: &[TokenId],
    ) -> WBResult<String> {
        Err(self.error())
    }
}
