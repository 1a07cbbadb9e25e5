//! Tokenizer Options
//!
//! Options for building a [`VocabTokenizer`].

use std::sync::Arc;

use crate::{
    encoders::DEFAULT_MAX_SUBWORD_LEN,
    external::{ExternalCodec, ExternalCodecSelector},
    tokenizer::VocabTokenizer,
};

/// Options for configuring a [`VocabTokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// The longest subword piece, in chars.
    max_subword_len: usize,

    /// The minimum word count used when a caller does not supply one.
    default_min_frequency: usize,

    /// The external delegate to build.
    external_codec: ExternalCodecSelector,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            max_subword_len: DEFAULT_MAX_SUBWORD_LEN,
            default_min_frequency: 1,
            external_codec: ExternalCodecSelector::default(),
        }
    }
}

impl TokenizerOptions {
    /// Get the longest subword piece, in chars.
    pub fn max_subword_len(&self) -> usize {
        self.max_subword_len
    }

    /// Set the longest subword piece, in chars; values < 1 are treated as 1.
    pub fn set_max_subword_len(
        &mut self,
        max_subword_len: usize,
    ) {
        self.max_subword_len = max_subword_len.max(1);
    }

    /// Set the longest subword piece and return the builder.
    pub fn with_max_subword_len(
        mut self,
        max_subword_len: usize,
    ) -> Self {
        self.set_max_subword_len(max_subword_len);
        self
    }

    /// Get the default minimum word count.
    pub fn default_min_frequency(&self) -> usize {
        self.default_min_frequency
    }

    /// Set the default minimum word count; values < 1 are treated as 1.
    pub fn set_default_min_frequency(
        &mut self,
        min_frequency: usize,
    ) {
        self.default_min_frequency = min_frequency.max(1);
    }

    /// Set the default minimum word count and return the builder.
    pub fn with_default_min_frequency(
        mut self,
        min_frequency: usize,
    ) -> Self {
        self.set_default_min_frequency(min_frequency);
        self
    }

    /// Get the configured [`ExternalCodecSelector`].
    pub fn external_codec(&self) -> ExternalCodecSelector {
        self.external_codec
    }

    /// Set the configured [`ExternalCodecSelector`].
    pub fn set_external_codec(
        &mut self,
        external_codec: ExternalCodecSelector,
    ) {
        self.external_codec = external_codec;
    }

    /// Set the configured [`ExternalCodecSelector`] and return the builder.
    pub fn with_external_codec(
        mut self,
        external_codec: ExternalCodecSelector,
    ) -> Self {
        self.set_external_codec(external_codec);
        self
    }

    /// Build a [`VocabTokenizer`] with a fresh vocabulary.
    pub fn build(&self) -> VocabTokenizer {
        self.build_with_external(self.external_codec.build())
    }

    /// Build a [`VocabTokenizer`] with an explicit external delegate.
    ///
    /// The `external_codec` selector is ignored.
    pub fn build_with_external(
        &self,
        external: Arc<dyn ExternalCodec>,
    ) -> VocabTokenizer {
        VocabTokenizer::new(*self, external)
    }
}
