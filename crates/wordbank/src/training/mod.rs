//! # Vocabulary Learning
//!
//! Support for growing a [`Vocabulary`](crate::vocab::Vocabulary) from raw text.
//!
//! Learning is a two-stage process:
//! * [`WordCounter`] - counts normalized words, remembering first-seen order.
//! * [`VocabLearner`] - inserts every unknown word whose count meets
//!   [`LearnOptions::min_frequency`], in first-seen order.
//!
//! ## Learning Example
//!
//! ```rust
//! use wordbank::{
//!     training::{LearnOptions, VocabLearner},
//!     vocab::Vocabulary,
//! };
//!
//! let mut vocab = Vocabulary::new();
//! let learner = VocabLearner::new(LearnOptions::default().with_min_frequency(2));
//!
//! let report = learner.learn_samples(&mut vocab, ["the cat sat", "the dog sat"]);
//! assert_eq!(report.new_tokens, 2);
//! assert_eq!(report.vocab_size, 7);
//! assert_eq!(vocab.lookup_id("the"), Some(5));
//! assert_eq!(vocab.lookup_id("sat"), Some(6));
//! ```

mod vocab_learner;
mod word_counter;

#[doc(inline)]
pub use vocab_learner::*;
#[doc(inline)]
pub use word_counter::*;
