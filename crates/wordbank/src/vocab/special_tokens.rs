//! # Special Tokens

use strum::IntoEnumIterator;

use crate::types::TokenId;

/// The reserved special tokens.
///
/// These occupy the lowest ids of every [`Vocabulary`](crate::vocab::Vocabulary),
/// and are present from construction (and after every reset).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
    strum::Display,
    strum::IntoStaticStr,
)]
#[repr(u32)]
pub enum SpecialToken {
    /// Padding.
    #[strum(serialize = "<PAD>")]
    Pad = 0,

    /// Unknown word.
    #[strum(serialize = "<UNK>")]
    Unk = 1,

    /// Beginning of sequence.
    #[strum(serialize = "<BOS>")]
    Bos = 2,

    /// End of sequence.
    #[strum(serialize = "<EOS>")]
    Eos = 3,

    /// Separator.
    #[strum(serialize = "<SEP>")]
    Sep = 4,
}

impl SpecialToken {
    /// The fixed id of this special token.
    pub const fn id(self) -> TokenId {
        self as TokenId
    }

    /// The token text, e.g. `"<PAD>"`.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Identify a token string as one of the reserved special tokens.
    ///
    /// Matching is exact; `"<pad>"` is not a special token.
    pub fn from_token(token: &str) -> Option<Self> {
        token.parse().ok()
    }

    /// The `(token, id)` pairs for all reserved special tokens, in id order.
    pub fn pairs() -> impl Iterator<Item = (&'static str, TokenId)> {
        Self::iter().map(|s| (s.as_str(), s.id()))
    }
}
