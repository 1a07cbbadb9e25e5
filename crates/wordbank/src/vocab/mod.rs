//! # Vocabulary
//!
//! This module provides the vocabulary and related io mechanisms.
//!
//! ## Vocabulary Store
//!
//! [`Vocabulary`] is the only mutable state in the crate: a bidirectional
//! ``{ String <-> TokenId }`` mapping plus the next-id allocation counter.
//!
//! ## Special Tokens
//!
//! The five reserved tokens are the variants of [`SpecialToken`],
//! which pins each to its fixed low id.
//!
//! ## Persistence
//!
//! [`io::VocabRecord`] is the stable, serde-backed persisted shape.
pub mod io;
pub mod special_tokens;
pub mod vocabulary;

#[doc(inline)]
pub use io::VocabRecord;
#[doc(inline)]
pub use special_tokens::SpecialToken;
#[doc(inline)]
pub use vocabulary::Vocabulary;
