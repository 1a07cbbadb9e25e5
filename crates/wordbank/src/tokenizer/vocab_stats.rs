//! # Vocabulary Stats

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{types::TokenId, vocab::Vocabulary};

/// A snapshot of a vocabulary.
///
/// Serializes as `{ vocabSize, specialTokensCount, vocabulary, specialTokens }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabStats {
    /// Total token count, specials included.
    pub vocab_size: usize,

    /// Number of reserved special tokens present.
    pub special_tokens_count: usize,

    /// The full ``{ token -> id }`` mapping.
    pub vocabulary: BTreeMap<String, TokenId>,

    /// The reserved special tokens present, and their ids.
    pub special_tokens: BTreeMap<String, TokenId>,
}

impl VocabStats {
    /// Snapshot a vocabulary.
    pub fn from_vocabulary(vocab: &Vocabulary) -> Self {
        let special_tokens = vocab.special_tokens();
        Self {
            vocab_size: vocab.len(),
            special_tokens_count: special_tokens.len(),
            vocabulary: vocab.to_ordered_map(),
            special_tokens,
        }
    }
}
