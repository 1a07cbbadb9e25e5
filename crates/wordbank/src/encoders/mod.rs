//! # Token Encoders
//!
//! Both encoders borrow a [`Vocabulary`](crate::vocab::Vocabulary) and never mutate it;
//! unknown material degrades to the `<UNK>` id rather than failing.
//!
//! * [`WordEncoder`] - one id per normalized word.
//! * [`SubwordEncoder`] - splits unknown words into known pieces.
//!
//! ## Example
//!
//! ```rust
//! use wordbank::{
//!     TokenEncoder,
//!     encoders::{SubwordEncoder, WordEncoder},
//!     vocab::Vocabulary,
//! };
//!
//! let mut vocab = Vocabulary::new();
//! for word in ["the", "cat", "play", "ing"] {
//!     vocab.insert(word).unwrap();
//! }
//!
//! let words = WordEncoder::new(&vocab);
//! assert_eq!(words.encode("The dog", false), vec![5, 1]);
//!
//! let pieces = SubwordEncoder::new(&vocab);
//! assert_eq!(pieces.encode("playing", true), vec![2, 7, 8, 3]);
//! ```

mod subword_encoder;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
mod token_encoder;
mod word_encoder;

#[doc(inline)]
pub use subword_encoder::*;
#[doc(inline)]
pub use token_encoder::*;
#[doc(inline)]
pub use word_encoder::*;
