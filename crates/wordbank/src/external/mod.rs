//! # External Codecs
//!
//! An [`ExternalCodec`] is a delegate encoder/decoder (e.g. a pretrained BPE
//! vocabulary) the tokenizer may hand text to instead of its own codec.
//!
//! Delegation is always optional: a codec may be unavailable, or fail, and
//! callers fall back to the word-level codec.
//!
//! * [`ExternalCodecSelector`] - picks and builds a codec.
//! * `TiktokenCodec` - the `tiktoken-rs` backed codec (feature `tiktoken`).
//! * [`UnavailableCodec`] - the no-op codec.
//!
//! ## Example
//!
//! ```rust
//! use wordbank::external::ExternalCodecSelector;
//!
//! let codec = ExternalCodecSelector::Disabled.build();
//! assert!(!codec.is_available());
//! assert!(codec.try_encode("hello").is_err());
//! ```

mod codec_selector;
mod external_codec;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
#[cfg(feature = "tiktoken")]
mod tiktoken_codec;
mod unavailable_codec;

#[doc(inline)]
pub use codec_selector::*;
#[doc(inline)]
pub use external_codec::*;
#[cfg(feature = "tiktoken")]
#[doc(inline)]
pub use tiktoken_codec::*;
#[doc(inline)]
pub use unavailable_codec::*;
