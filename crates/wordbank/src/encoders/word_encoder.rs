//! # Word Encoder

use crate::{
    encoders::TokenEncoder,
    types::TokenId,
    vocab::{SpecialToken, Vocabulary},
};

/// Word-level encoder: one token per normalized word, `<UNK>` when unknown.
#[derive(Debug, Clone, Copy)]
pub struct WordEncoder<'a> {
    vocab: &'a Vocabulary,
}

impl<'a> WordEncoder<'a> {
    /// Create a new word encoder.
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Self { vocab }
    }
}

impl TokenEncoder for WordEncoder<'_> {
    fn vocab(&self) -> &Vocabulary {
        self.vocab
    }

    fn encode_append_word(
        &self,
        word: &str,
        tokens: &mut Vec<TokenId>,
    ) {
        tokens.push(
            self.vocab
                .lookup_id(word)
                .unwrap_or(SpecialToken::Unk.id()),
        );
    }
}
