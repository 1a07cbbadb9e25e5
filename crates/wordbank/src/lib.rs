//! # `wordbank` Vocabulary Tokenizer
//!
//! A word-level tokenizer whose vocabulary is learned, extended, and
//! persisted at runtime.
//!
//! See:
//! * [`VocabTokenizer`] for the full function surface.
//! * [`vocab`] for the vocabulary store, special tokens, and persistence.
//! * [`training`] to learn words from text.
//! * [`encoders`] and [`decoders`] for the word and subword codecs.
//! * [`external`] for delegating to a pretrained BPE codec.
//! * [`concurrency`] for sharing a tokenizer between threads.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``tiktoken``
//!
//! #### feature: ``ahash``
//!
//! This swaps all `HashMap` implementations for ``ahash``.
//!
//! This is done by the ``types::WBHashMap`` type alias machinery.
//!
//! #### feature: ``tiktoken``
//!
//! This enables the ``tiktoken-rs`` backed [`external::TiktokenCodec`].
//! Without it, every [`external::ExternalCodecSelector`] builds an
//! unavailable codec, and delegation always falls back.
//!
//! #### feature: ``tracing``
//!
//! This enables ``tracing`` instrumentation points on learn / encode / decode.
//!
//! #### feature: ``testing``
//!
//! This exports test utilities, such as [`external::testing::StubCodec`].
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
//! tokenizer.learn("Hello, world! Hello again.", 1);
//! let cls = tokenizer.add_special_token("<CLS>", None).unwrap();
//!
//! let ids = tokenizer.encode("hello world", true, false);
//! assert_eq!(ids, vec![2, 5, 6, 3]);
//! assert_eq!(cls, 8);
//!
//! let record = tokenizer.save();
//! tokenizer.reset();
//! tokenizer.load(&record).unwrap();
//! assert_eq!(tokenizer.decode(&ids, true, false), "hello world");
//! ```
#![warn(missing_docs, unused)]

pub mod concurrency;
pub mod decoders;
pub mod encoders;
pub mod external;
pub mod spanning;
pub mod tokenizer;
pub mod training;
pub mod types;
pub mod vocab;

mod errors;

#[doc(inline)]
pub use concurrency::SharedTokenizer;
#[doc(inline)]
pub use encoders::TokenEncoder;
#[doc(inline)]
pub use errors::*;
#[doc(inline)]
pub use external::{ExternalCodec, ExternalCodecSelector};
#[doc(inline)]
pub use tokenizer::{TokenizerOptions, VocabStats, VocabTokenizer};
#[doc(inline)]
pub use types::TokenId;
#[doc(inline)]
pub use vocab::{SpecialToken, VocabRecord, Vocabulary};
