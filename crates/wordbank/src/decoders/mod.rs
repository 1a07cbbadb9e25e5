//! # Token Decoders
//!
//! ## Example
//!
//! ```rust
//! use wordbank::{decoders::WordDecoder, vocab::Vocabulary};
//!
//! let mut vocab = Vocabulary::new();
//! let hello = vocab.insert("hello").unwrap();
//!
//! let decoder = WordDecoder::new(&vocab);
//! assert_eq!(decoder.decode(&[2, hello, 99, 3], true), "hello");
//! assert_eq!(decoder.decode(&[2, hello, 99, 3], false), "<BOS> hello <EOS>");
//! ```

mod word_decoder;

#[doc(inline)]
pub use word_decoder::*;
