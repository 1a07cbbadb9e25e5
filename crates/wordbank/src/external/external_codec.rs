//! # External Codec Trait

use core::fmt::Debug;

use crate::{WBResult, types::TokenId};

/// A delegate encoder/decoder.
///
/// Every failure is reported as [`WordbankError::External`](crate::WordbankError::External).
pub trait ExternalCodec: Debug + Send + Sync {
    /// A short, human-readable codec name; used in logs.
    fn name(&self) -> &str;

    /// Can this codec currently encode and decode?
    ///
    /// May perform a one-time lazy load.
    fn is_available(&self) -> bool;

    /// Encode text into the codec's ids.
    fn try_encode(
        &self,
        text: &str,
    ) -> WBResult<Vec<TokenId>>;

    /// Decode the codec's ids into text.
    fn try_decode(
        &self,
        ids: &[TokenId],
    ) -> WBResult<String>;
}
