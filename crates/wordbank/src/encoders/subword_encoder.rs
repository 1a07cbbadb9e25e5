//! # Subword Encoder
//!
//! Greedy longest-match segmentation of out-of-vocabulary words.
//!
//! A word that is itself in the vocabulary encodes to its own id.
//! Otherwise the word is partitioned left to right: at each position the
//! longest vocabulary entry starting there (up to `max_len` chars) is
//! consumed; a char covered by no entry becomes a single `<UNK>` piece.

use crate::{
    encoders::TokenEncoder,
    types::TokenId,
    vocab::{SpecialToken, Vocabulary},
};

/// The default maximum subword length, in chars.
pub const DEFAULT_MAX_SUBWORD_LEN: usize = 8;

/// One piece of a segmented word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubwordPiece<'w> {
    /// The piece text; a slice of the word.
    pub text: &'w str,

    /// The piece id; `None` for a char covered by no vocabulary entry.
    pub id: Option<TokenId>,
}

/// Subword encoder.
#[derive(Debug, Clone, Copy)]
pub struct SubwordEncoder<'a> {
    vocab: &'a Vocabulary,
    max_len: usize,
}

impl<'a> SubwordEncoder<'a> {
    /// Create a new subword encoder with [`DEFAULT_MAX_SUBWORD_LEN`].
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Self::with_max_len(vocab, DEFAULT_MAX_SUBWORD_LEN)
    }

    /// Create a new subword encoder.
    ///
    /// ## Arguments
    /// * `vocab` - The vocabulary.
    /// * `max_len` - The longest candidate piece, in chars; values < 1 are treated as 1.
    pub fn with_max_len(
        vocab: &'a Vocabulary,
        max_len: usize,
    ) -> Self {
        Self {
            vocab,
            max_len: max_len.max(1),
        }
    }

    /// The longest candidate piece, in chars.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Segment a word into pieces.
    ///
    /// The pieces are non-overlapping and concatenate back to `word`.
    pub fn segment<'w>(
        &self,
        word: &'w str,
    ) -> Vec<SubwordPiece<'w>> {
        if word.is_empty() {
            return Vec::new();
        }
        if let Some(id) = self.vocab.lookup_id(word) {
            return vec![SubwordPiece { text: word, id: Some(id) }];
        }

        let bounds: Vec<usize> = word
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(std::iter::once(word.len()))
            .collect();
        let char_count = bounds.len() - 1;

        let mut pieces = Vec::with_capacity(char_count);
        let mut start = 0;
        while start < char_count {
            let longest = (start + self.max_len).min(char_count);

            let matched = (start + 1..=longest).rev().find_map(|end| {
                let text = &word[bounds[start]..bounds[end]];
                self.vocab
                    .lookup_id(text)
                    .map(|id| (end, SubwordPiece { text, id: Some(id) }))
            });

            match matched {
                Some((end, piece)) => {
                    pieces.push(piece);
                    start = end;
                }
                None => {
                    pieces.push(SubwordPiece {
                        text: &word[bounds[start]..bounds[start + 1]],
                        id: None,
                    });
                    start += 1;
                }
            }
        }

        pieces
    }
}

impl TokenEncoder for SubwordEncoder<'_> {
    fn vocab(&self) -> &Vocabulary {
        self.vocab
    }

    fn encode_append_word(
        &self,
        word: &str,
        tokens: &mut Vec<TokenId>,
    ) {
        let unk = SpecialToken::Unk.id();
        tokens.extend(
            self.segment(word)
                .into_iter()
                .map(|piece| piece.id.unwrap_or(unk)),
        );
    }
}
