//! # Error Types

/// Errors from wordbank operations.
///
/// Unknown words during encode, unknown ids during decode, and external
/// codec failures are *not* errors; they degrade to `<UNK>`, are skipped,
/// or fall back to the vocabulary codec respectively.
#[derive(Debug, thiserror::Error)]
pub enum WordbankError {
    /// Caller input rejected at a transport boundary.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A special token must be a non-empty string.
    #[error("special token must be a non-empty string")]
    InvalidToken,

    /// Explicit token ids must be non-negative and fit the token id type.
    #[error("invalid token id: {id}")]
    InvalidId {
        /// The rejected id.
        id: i64,
    },

    /// Every token id is in use; nothing more can be allocated.
    #[error("vocabulary is full: no token ids left to allocate")]
    VocabularyFull,

    /// Vocabulary data is inconsistent or could not be parsed.
    #[error("malformed vocabulary: {0}")]
    MalformedVocabulary(String),

    /// Error from an external codec.
    #[error("external codec: {0}")]
    External(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for wordbank operations.
pub type WBResult<T> = core::result::Result<T, WordbankError>;
