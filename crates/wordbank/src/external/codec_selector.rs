//! # External Codec Selector

use std::sync::Arc;

use crate::external::{ExternalCodec, UnavailableCodec};

/// Policy enum for selecting an [`ExternalCodec`].
///
/// Parses from, and displays as, the encoding name (e.g. `"cl100k_base"`).
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
    strum::IntoStaticStr,
)]
#[non_exhaustive]
pub enum ExternalCodecSelector {
    /// No delegate; builds an [`UnavailableCodec`].
    #[strum(serialize = "disabled")]
    Disabled,

    /// The `cl100k_base` encoding (`gpt-3.5-turbo`, `gpt-4`).
    #[default]
    #[strum(serialize = "cl100k_base")]
    Cl100kBase,

    /// The `o200k_base` encoding (`gpt-4o`).
    #[strum(serialize = "o200k_base")]
    O200kBase,

    /// The `p50k_base` encoding (`text-davinci-003`).
    #[strum(serialize = "p50k_base")]
    P50kBase,

    /// The `r50k_base` encoding (`gpt2`, `davinci`).
    #[strum(serialize = "r50k_base")]
    R50kBase,
}

impl ExternalCodecSelector {
    /// The encoding name.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Select the encoding used by a model, e.g. `"gpt-3.5-turbo"`.
    ///
    /// Returns `None` for unknown models.
    #[cfg(feature = "tiktoken")]
    pub fn for_model(model: &str) -> Option<Self> {
        use tiktoken_rs::tokenizer::{Tokenizer, get_tokenizer};

        match get_tokenizer(model)? {
            Tokenizer::Cl100kBase => Some(Self::Cl100kBase),
            Tokenizer::O200kBase => Some(Self::O200kBase),
            Tokenizer::P50kBase => Some(Self::P50kBase),
            Tokenizer::R50kBase | Tokenizer::Gpt2 => Some(Self::R50kBase),
            _ => None,
        }
    }

    /// Select the encoding used by a model.
    ///
    /// Model tables come from `tiktoken-rs`; without the `tiktoken`
    /// feature no model is known.
    #[cfg(not(feature = "tiktoken"))]
    pub fn for_model(_model: &str) -> Option<Self> {
        None
    }

    /// Build the configured [`ExternalCodec`].
    ///
    /// Loading is deferred until the codec is first used.
    pub fn build(self) -> Arc<dyn ExternalCodec> {
        match self {
            Self::Disabled => Arc::new(UnavailableCodec),
            #[cfg(feature = "tiktoken")]
            _ => Arc::new(crate::external::TiktokenCodec::new(self)),
            #[cfg(not(feature = "tiktoken"))]
            _ => {
                log::debug!("{self} requested without the tiktoken feature");
                Arc::new(UnavailableCodec)
            }
        }
    }
}
