//! # Vocabulary Tokenizer
//!
//! [`VocabTokenizer`] is the function surface of the crate; it owns one
//! [`Vocabulary`](crate::vocab::Vocabulary) and an optional external delegate.
//!
//! ## Example
//!
//! ```rust
//! use wordbank::{TokenizerOptions, external::ExternalCodecSelector};
//!
//! let mut tokenizer = TokenizerOptions::default()
//!     .with_external_codec(ExternalCodecSelector::Disabled)
//!     .build();
//!
//! assert_eq!(tokenizer.learn("the cat sat on the mat", 1), 10);
//!
//! let ids = tokenizer.encode("the dog sat", false, false);
//! assert_eq!(ids, vec![5, 1, 7]);
//! assert_eq!(tokenizer.decode(&ids, true, false), "the sat");
//! assert_eq!(tokenizer.decode(&ids, false, false), "the <UNK> sat");
//! ```

mod tokenizer_options;
mod vocab_stats;
mod vocab_tokenizer;

#[doc(inline)]
pub use tokenizer_options::*;
#[doc(inline)]
pub use vocab_stats::*;
#[doc(inline)]
pub use vocab_tokenizer::*;
