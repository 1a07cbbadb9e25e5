//! # Concurrency Utilities
//!
//! [`VocabTokenizer`](crate::VocabTokenizer) is a plain single-owner value.
//! [`SharedTokenizer`] wraps one for use from many threads: reads run
//! concurrently, and every mutation holds the one write lock.

mod shared_tokenizer;

#[doc(inline)]
pub use shared_tokenizer::*;
