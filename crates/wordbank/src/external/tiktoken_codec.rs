//! # Tiktoken Codec

use std::{
    panic::{AssertUnwindSafe, catch_unwind},
    sync::OnceLock,
};

use tiktoken_rs::CoreBPE;

use crate::{
    WBResult,
    WordbankError,
    external::{ExternalCodec, ExternalCodecSelector},
    types::TokenId,
};

/// An [`ExternalCodec`] backed by a `tiktoken-rs` BPE encoding.
///
/// The BPE tables are loaded on first use; the outcome (success or failure)
/// is cached. A failed load is logged once and leaves the codec unavailable.
pub struct TiktokenCodec {
    encoding: ExternalCodecSelector,
    name: String,
    bpe: OnceLock<Option<CoreBPE>>,
}

impl core::fmt::Debug for TiktokenCodec {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("TiktokenCodec")
            .field("encoding", &self.encoding)
            .field("loaded", &self.bpe.get().map(Option::is_some))
            .finish()
    }
}

impl TiktokenCodec {
    /// Create a new, not yet loaded, codec for an encoding.
    pub fn new(encoding: ExternalCodecSelector) -> Self {
        Self {
            encoding,
            name: format!("tiktoken-rs::{encoding}"),
            bpe: OnceLock::new(),
        }
    }

    /// The selected encoding.
    pub fn encoding(&self) -> ExternalCodecSelector {
        self.encoding
    }

    fn load_bpe(encoding: ExternalCodecSelector) -> Result<CoreBPE, String> {
        let loaded = match encoding {
            ExternalCodecSelector::Cl100kBase => tiktoken_rs::cl100k_base(),
            ExternalCodecSelector::O200kBase => tiktoken_rs::o200k_base(),
            ExternalCodecSelector::P50kBase => tiktoken_rs::p50k_base(),
            ExternalCodecSelector::R50kBase => tiktoken_rs::r50k_base(),
            ExternalCodecSelector::Disabled => return Err("no encoding selected".to_string()),
        };
        loaded.map_err(|err| err.to_string())
    }

    fn bpe(&self) -> Option<&CoreBPE> {
        self.bpe
            .get_or_init(|| {
                let encoding = self.encoding;
                let loaded = catch_unwind(|| Self::load_bpe(encoding))
                    .unwrap_or_else(|_| Err("loader panicked".to_string()));
                match loaded {
                    Ok(bpe) => {
                        log::debug!("loaded {}", self.name);
                        Some(bpe)
                    }
                    Err(err) => {
                        log::warn!("failed to load {}: {err}", self.name);
                        None
                    }
                }
            })
            .as_ref()
    }

    fn require_bpe(&self) -> WBResult<&CoreBPE> {
        self.bpe()
            .ok_or_else(|| WordbankError::External(format!("{} is not available", self.name)))
    }
}

impl ExternalCodec for TiktokenCodec {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        self.bpe().is_some()
    }

    fn try_encode(
        &self,
        text: &str,
    ) -> WBResult<Vec<TokenId>> {
        let bpe = self.require_bpe()?;
        catch_unwind(AssertUnwindSafe(|| bpe.encode_with_special_tokens(text)))
            .map_err(|_| WordbankError::External(format!("{} panicked while encoding", self.name)))
    }

    fn try_decode(
        &self,
        ids: &[TokenId],
    ) -> WBResult<String> {
        let bpe = self.require_bpe()?;
        catch_unwind(AssertUnwindSafe(|| bpe.decode(ids.to_vec())))
            .map_err(|_| WordbankError::External(format!("{} panicked while decoding", self.name)))?
            .map_err(|err| WordbankError::External(format!("{}: {err}", self.name)))
    }
}
