//! # Token Encoder Trait

use crate::{
    spanning::normalize,
    types::TokenId,
    vocab::{SpecialToken, Vocabulary},
};

/// A trait for token encoders.
///
/// Implementors supply the per-word step; the trait owns normalization
/// and boundary tokens.
pub trait TokenEncoder {
    /// Return the attached vocabulary.
    fn vocab(&self) -> &Vocabulary;

    /// Encode one normalized word, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `word` - A normalized word.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_word(
        &self,
        word: &str,
        tokens: &mut Vec<TokenId>,
    );

    /// Normalize text and encode every word, appending to a target buffer.
    ///
    /// No boundary tokens are added.
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<TokenId>,
    ) {
        for word in normalize(text) {
            self.encode_append_word(&word, tokens);
        }
    }

    /// Encode text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    /// * `add_boundary_tokens` - Bracket the output with `<BOS>` and `<EOS>`.
    ///
    /// ## Returns
    /// A vector of tokens; never fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    fn encode(
        &self,
        text: &str,
        add_boundary_tokens: bool,
    ) -> Vec<TokenId> {
        let mut tokens = Vec::with_capacity(text.len() / 4 + 2);

        if add_boundary_tokens {
            tokens.push(SpecialToken::Bos.id());
        }
        self.encode_append(text, &mut tokens);
        if add_boundary_tokens {
            tokens.push(SpecialToken::Eos.id());
        }

        tokens
    }

    /// Encode a batch of text into tokens.
    ///
    /// ## Arguments
    /// * `batch` - A slice of strings to encode.
    /// * `add_boundary_tokens` - Bracket each output with `<BOS>` and `<EOS>`.
    ///
    /// ## Returns
    /// A vector of token vectors.
    fn encode_batch<S: AsRef<str>>(
        &self,
        batch: &[S],
        add_boundary_tokens: bool,
    ) -> Vec<Vec<TokenId>> {
        batch
            .iter()
            .map(|s| self.encode(s.as_ref(), add_boundary_tokens))
            .collect()
    }
}
