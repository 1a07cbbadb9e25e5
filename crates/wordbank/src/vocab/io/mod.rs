//! # Vocabulary IO
//!
//! The persisted shape of a [`Vocabulary`](crate::vocab::Vocabulary) is a
//! [`VocabRecord`]; a JSON object of the form:
//!
//! ```json
//! {
//!   "vocab": { "<PAD>": 0, "<UNK>": 1, "<BOS>": 2, "<EOS>": 3, "<SEP>": 4, "hello": 5 },
//!   "specialTokens": { "<PAD>": 0, "<UNK>": 1, "<BOS>": 2, "<EOS>": 3, "<SEP>": 4 },
//!   "nextTokenId": 6
//! }
//! ```
//!
//! ## Saving and Loading
//!
//! ```rust
//! use wordbank::{WBResult, vocab::{Vocabulary, VocabRecord}};
//!
//! fn example() -> WBResult<()> {
//!     let mut vocab = Vocabulary::new();
//!     vocab.insert("hello")?;
//!
//!     let json = VocabRecord::from_vocabulary(&vocab).to_json_string_pretty()?;
//!
//!     let restored = VocabRecord::from_json_str(&json)?.to_vocabulary()?;
//!     assert_eq!(restored, vocab);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

mod vocab_record;

#[doc(inline)]
pub use vocab_record::*;
