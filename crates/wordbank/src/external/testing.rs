//! # External Codec Test Utilities

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{WBResult, WordbankError, external::ExternalCodec, types::TokenId};

/// Scripted behavior for a [`StubCodec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubBehavior {
    /// Report unavailable; every call errors.
    Unavailable,

    /// Report available, but every call errors.
    Failing,

    /// Report available, and return fixed outputs.
    Fixed {
        /// Returned by every encode.
        encoded: Vec<TokenId>,

        /// Returned by every decode.
        decoded: String,
    },
}

/// A deterministic [`ExternalCodec`] for tests.
///
/// Counts the encode and decode calls it receives.
#[derive(Debug)]
pub struct StubCodec {
    behavior: StubBehavior,
    encode_calls: AtomicUsize,
    decode_calls: AtomicUsize,
}

impl StubCodec {
    /// Create a new stub.
    pub fn new(behavior: StubBehavior) -> Self {
        Self {
            behavior,
            encode_calls: AtomicUsize::new(0),
            decode_calls: AtomicUsize::new(0),
        }
    }

    /// A stub which is never available.
    pub fn unavailable() -> Self {
        Self::new(StubBehavior::Unavailable)
    }

    /// A stub which is available, but always fails.
    pub fn failing() -> Self {
        Self::new(StubBehavior::Failing)
    }

    /// A stub which always returns the given outputs.
    pub fn fixed(
        encoded: Vec<TokenId>,
        decoded: impl Into<String>,
    ) -> Self {
        Self::new(StubBehavior::Fixed {
            encoded,
            decoded: decoded.into(),
        })
    }

    /// Number of `try_encode` calls so far.
    pub fn encode_calls(&self) -> usize {
        self.encode_calls.load(Ordering::Relaxed)
    }

    /// Number of `try_decode` calls so far.
    pub fn decode_calls(&self) -> usize {
        self.decode_calls.load(Ordering::Relaxed)
    }

    fn error(&self) -> WordbankError {
        WordbankError::External(format!("stub codec: {:?}", self.behavior))
    }
}

impl ExternalCodec for StubCodec {
    fn name(&self) -> &str {
        "stub"
    }

    fn is_available(&self) -> bool {
        self.behavior != StubBehavior::Unavailable
    }

    fn try_encode(
        &self,
        _text: &str,
    ) -> WBResult<Vec<TokenId>> {
        self.encode_calls.fetch_add(1, Ordering::Relaxed);
        match &self.behavior {
            StubBehavior::Fixed { encoded, .. } => Ok(encoded.clone()),
            _ => Err(self.error()),
        }
    }

    fn try_decode(
        &self,
        _ids: &[TokenId],
    ) -> WBResult<String> {
        self.decode_calls.fetch_add(1, Ordering::Relaxed);
        match &self.behavior {
            StubBehavior::Fixed { decoded, .. } => Ok(decoded.clone()),
            _ => Err(self.error()),
        }
    }
}
