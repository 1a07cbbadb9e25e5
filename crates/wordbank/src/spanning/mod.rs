//! # Text Spanning
//!
//! This module factors out splitting raw text into vocabulary words.
//!
//! Every learner and encoder in the crate sees text only through
//! [`normalize`]; so "what is a word" is decided in exactly one place.

mod word_normalizer;

#[doc(inline)]
pub use word_normalizer::*;
