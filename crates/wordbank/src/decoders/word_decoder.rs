//! # Word Decoder

use crate::{
    types::TokenId,
    vocab::{SpecialToken, Vocabulary},
};

/// Word-level decoder.
///
/// Ids with no mapping are skipped; decoding never fails.
#[derive(Debug, Clone, Copy)]
pub struct WordDecoder<'a> {
    vocab: &'a Vocabulary,
}

impl<'a> WordDecoder<'a> {
    /// Create a new word decoder.
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Self { vocab }
    }

    /// Decode ids to their token strings, in input order.
    ///
    /// ## Arguments
    /// * `ids` - The ids to decode.
    /// * `remove_special_tokens` - Drop the reserved special tokens.
    ///
    /// ## Returns
    /// The surviving tokens.
    pub fn decode_to_tokens(
        &self,
        ids: &[TokenId],
        remove_special_tokens: bool,
    ) -> Vec<&'a str> {
        let vocab = self.vocab;
        ids.iter()
            .filter_map(|&id| vocab.lookup_token(id))
            .filter(|token| {
                !(remove_special_tokens && SpecialToken::from_token(token).is_some())
            })
            .collect()
    }

    /// Decode ids to text; surviving tokens are joined by a single space.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, ids)))]
    pub fn decode(
        &self,
        ids: &[TokenId],
        remove_special_tokens: bool,
    ) -> String {
        self.decode_to_tokens(ids, remove_special_tokens)
            .join(" ")
    }

    /// Decode a batch of id sequences.
    pub fn decode_batch<V: AsRef<[TokenId]>>(
        &self,
        batch: &[V],
        remove_special_tokens: bool,
    ) -> Vec<String> {
        batch
            .iter()
            .map(|ids| self.decode(ids.as_ref(), remove_special_tokens))
            .collect()
    }
}
