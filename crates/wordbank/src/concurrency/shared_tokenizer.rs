//! # Shared Tokenizer

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::{
    WBResult,
    tokenizer::{VocabStats, VocabTokenizer},
    types::TokenId,
    vocab::VocabRecord,
};

/// Interior-mutable, thread-shared [`VocabTokenizer`].
///
/// `learn`, `add_special_token`, `load` and `reset` take the write lock;
/// everything else takes the read lock. Clones share the same tokenizer.
#[derive(Debug, Clone, Default)]
pub struct SharedTokenizer {
    inner: Arc<RwLock<VocabTokenizer>>,
}

impl From<VocabTokenizer> for SharedTokenizer {
    fn from(tokenizer: VocabTokenizer) -> Self {
        Self::new(tokenizer)
    }
}

impl SharedTokenizer {
    /// Wrap a tokenizer.
    pub fn new(tokenizer: VocabTokenizer) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tokenizer)),
        }
    }

    /// Hold the read lock for a sequence of reads.
    pub fn read(&self) -> RwLockReadGuard<'_, VocabTokenizer> {
        self.inner.read()
    }

    /// See [`VocabTokenizer::learn`].
    pub fn learn(
        &self,
        text: &str,
        min_frequency: usize,
    ) -> usize {
        self.inner.write().learn(text, min_frequency)
    }

    /// See [`VocabTokenizer::learn_samples`].
    pub fn learn_samples<I>(
        &self,
        samples: I,
        min_frequency: usize,
    ) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.inner
            .write()
            .learn_samples(samples, min_frequency)
    }

    /// See [`VocabTokenizer::add_special_token`].
    pub fn add_special_token(
        &self,
        token: &str,
        explicit_id: Option<i64>,
    ) -> WBResult<TokenId> {
        self.inner
            .write()
            .add_special_token(token, explicit_id)
    }

    /// See [`VocabTokenizer::load`].
    pub fn load(
        &self,
        record: &VocabRecord,
    ) -> WBResult<()> {
        self.inner.write().load(record)
    }

    /// See [`VocabTokenizer::reset`].
    pub fn reset(&self) {
        self.inner.write().reset();
    }

    /// See [`VocabTokenizer::encode`].
    pub fn encode(
        &self,
        text: &str,
        add_boundary_tokens: bool,
        delegate_to_external: bool,
    ) -> Vec<TokenId> {
        self.inner
            .read()
            .encode(text, add_boundary_tokens, delegate_to_external)
    }

    /// See [`VocabTokenizer::encode_subword`].
    pub fn encode_subword(
        &self,
        text: &str,
        add_boundary_tokens: bool,
    ) -> Vec<TokenId> {
        self.inner
            .read()
            .encode_subword(text, add_boundary_tokens)
    }

    /// See [`VocabTokenizer::decode`].
    pub fn decode(
        &self,
        ids: &[TokenId],
        remove_special_tokens: bool,
        delegate_to_external: bool,
    ) -> String {
        self.inner
            .read()
            .decode(ids, remove_special_tokens, delegate_to_external)
    }

    /// See [`VocabTokenizer::stats`].
    pub fn stats(&self) -> VocabStats {
        self.inner.read().stats()
    }

    /// See [`VocabTokenizer::save`].
    pub fn save(&self) -> VocabRecord {
        self.inner.read().save()
    }

    /// The current vocabulary size.
    pub fn vocab_size(&self) -> usize {
        self.inner.read().vocab().len()
    }
}
