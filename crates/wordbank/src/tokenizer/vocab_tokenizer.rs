//! # Vocab Tokenizer

use std::sync::Arc;

use crate::{
    WBResult,
    WordbankError,
    decoders::WordDecoder,
    encoders::{SubwordEncoder, TokenEncoder, WordEncoder},
    external::ExternalCodec,
    tokenizer::{TokenizerOptions, VocabStats},
    training::{LearnOptions, LearnReport, VocabLearner},
    types::TokenId,
    vocab::{VocabRecord, Vocabulary},
};

/// Mutable vocabulary tokenizer.
///
/// Combines:
///  * a [`Vocabulary`],
///  * the word and subword codecs, and
///  * an [`ExternalCodec`] delegate.
///
/// Failed operations leave the vocabulary unchanged.
#[derive(Debug, Clone)]
pub struct VocabTokenizer {
    vocab: Vocabulary,
    external: Arc<dyn ExternalCodec>,
    options: TokenizerOptions,
}

impl Default for VocabTokenizer {
    fn default() -> Self {
        TokenizerOptions::default().build()
    }
}

impl VocabTokenizer {
    /// Create a new tokenizer holding only the reserved special tokens.
    pub fn new(
        options: TokenizerOptions,
        external: Arc<dyn ExternalCodec>,
    ) -> Self {
        Self {
            vocab: Vocabulary::new(),
            external,
            options,
        }
    }

    /// Get the options.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Get the underlying vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Get the external delegate.
    pub fn external(&self) -> &Arc<dyn ExternalCodec> {
        &self.external
    }

    /// Replace the external delegate.
    pub fn set_external(
        &mut self,
        external: Arc<dyn ExternalCodec>,
    ) {
        self.external = external;
    }

    /// Learn every word of `text` occurring at least `min_frequency` times.
    ///
    /// Never fails; once no ids are left, the remaining words are skipped.
    ///
    /// ## Returns
    /// The new vocabulary size.
    pub fn learn(
        &mut self,
        text: &str,
        min_frequency: usize,
    ) -> usize {
        self.learn_samples([text], min_frequency)
    }

    /// Learn from a batch of samples; counts are aggregated across samples.
    ///
    /// ## Returns
    /// The new vocabulary size.
    pub fn learn_samples<I>(
        &mut self,
        samples: I,
        min_frequency: usize,
    ) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.learn_report(samples, min_frequency).vocab_size
    }

    /// Learn from a batch of samples, reporting the new token count as well.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, samples)))]
    pub fn learn_report<I>(
        &mut self,
        samples: I,
        min_frequency: usize,
    ) -> LearnReport
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        VocabLearner::new(LearnOptions::new(min_frequency)).learn_samples(&mut self.vocab, samples)
    }

    /// Encode text.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    /// * `add_boundary_tokens` - Bracket the output with `<BOS>` and `<EOS>`.
    /// * `delegate_to_external` - Try the external delegate first; its ids are
    ///   returned unchanged. On any delegate failure the word codec is used.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn encode(
        &self,
        text: &str,
        add_boundary_tokens: bool,
        delegate_to_external: bool,
    ) -> Vec<TokenId> {
        if delegate_to_external && let Some(ids) = self.external_encode(text) {
            return ids;
        }
        WordEncoder::new(&self.vocab).encode(text, add_boundary_tokens)
    }

    /// Encode text, splitting unknown words into known subword pieces.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn encode_subword(
        &self,
        text: &str,
        add_boundary_tokens: bool,
    ) -> Vec<TokenId> {
        SubwordEncoder::with_max_len(&self.vocab, self.options.max_subword_len())
            .encode(text, add_boundary_tokens)
    }

    /// Decode ids.
    ///
    /// ## Arguments
    /// * `ids` - The ids to decode; unmapped ids are skipped.
    /// * `remove_special_tokens` - Drop the reserved special tokens.
    /// * `delegate_to_external` - Try the external delegate first.
    ///   On failure, or an empty result, the word codec is used.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, ids)))]
    pub fn decode(
        &self,
        ids: &[TokenId],
        remove_special_tokens: bool,
        delegate_to_external: bool,
    ) -> String {
        if delegate_to_external && let Some(text) = self.external_decode(ids) {
            return text;
        }
        WordDecoder::new(&self.vocab).decode(ids, remove_special_tokens)
    }

    fn external_encode(
        &self,
        text: &str,
    ) -> Option<Vec<TokenId>> {
        let external = &self.external;
        if !external.is_available() {
            log::debug!("{} unavailable; encoding locally", external.name());
            return None;
        }
        match external.try_encode(text) {
            Ok(ids) => Some(ids),
            Err(err) => {
                log::warn!("{} encode failed; encoding locally: {err}", external.name());
                None
            }
        }
    }

    fn external_decode(
        &self,
        ids: &[TokenId],
    ) -> Option<String> {
        let external = &self.external;
        if !external.is_available() {
            log::debug!("{} unavailable; decoding locally", external.name());
            return None;
        }
        match external.try_decode(ids) {
            Ok(text) if text.is_empty() => {
                log::debug!("{} decoded nothing; decoding locally", external.name());
                None
            }
            Ok(text) => Some(text),
            Err(err) => {
                log::warn!("{} decode failed; decoding locally: {err}", external.name());
                None
            }
        }
    }

    /// Register a token.
    ///
    /// With `explicit_id`, the token is bound to that id, overriding any
    /// existing binding of the token or the id. Without, an already-present
    /// token keeps its id and a new token takes the next free id.
    ///
    /// ## Errors
    /// * [`WordbankError::InvalidToken`] if `token` is empty.
    /// * [`WordbankError::InvalidId`] if `explicit_id` is negative or out of range.
    /// * [`WordbankError::VocabularyFull`] if a new token needs an id and none is left.
    pub fn add_special_token(
        &mut self,
        token: &str,
        explicit_id: Option<i64>,
    ) -> WBResult<TokenId> {
        if token.is_empty() {
            return Err(WordbankError::InvalidToken);
        }
        let id = match explicit_id {
            Some(id) => self.vocab.insert_with_id(token, id)?,
            None => self.vocab.insert(token)?,
        };
        log::debug!("registered token {token:?} at id {id}");
        Ok(id)
    }

    /// Snapshot the vocabulary.
    pub fn stats(&self) -> VocabStats {
        VocabStats::from_vocabulary(&self.vocab)
    }

    /// Capture the vocabulary as a persistable record.
    pub fn save(&self) -> VocabRecord {
        VocabRecord::from_vocabulary(&self.vocab)
    }

    /// Replace the vocabulary with one rebuilt from a record.
    ///
    /// ## Errors
    /// [`WordbankError::MalformedVocabulary`] if the record is invalid;
    /// the current vocabulary is kept.
    pub fn load(
        &mut self,
        record: &VocabRecord,
    ) -> WBResult<()> {
        let vocab = record.to_vocabulary()?;
        log::debug!("loaded vocabulary of {} tokens", vocab.len());
        self.vocab = vocab;
        Ok(())
    }

    /// Restore the special-tokens-only vocabulary.
    pub fn reset(&mut self) {
        self.vocab = Vocabulary::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        external::{ExternalCodecSelector, testing::StubCodec},
        vocab::SpecialToken,
    };

    fn local_tokenizer() -> VocabTokenizer {
        TokenizerOptions::default()
            .with_external_codec(ExternalCodecSelector::Disabled)
            .build()
    }

    fn stub_tokenizer(stub: StubCodec) -> (VocabTokenizer, Arc<StubCodec>) {
        let stub = Arc::new(stub);
        let tokenizer = TokenizerOptions::default().build_with_external(stub.clone());
        (tokenizer, stub)
    }

    #[test]
    fn test_send_sync() {
        fn check<T: Send + Sync>() {}
        check::<VocabTokenizer>();
    }

    #[test]
    fn test_learn_encode_decode() {
        let mut tokenizer = local_tokenizer();
        assert_eq!(tokenizer.learn("the cat sat on the mat", 1), 10);

        let the = tokenizer.vocab().lookup_id("the").unwrap();
        let sat = tokenizer.vocab().lookup_id("sat").unwrap();
        assert_eq!(
            tokenizer.encode("the dog sat", false, false),
            vec![the, SpecialToken::Unk.id(), sat]
        );
        assert_eq!(
            tokenizer.encode("", true, false),
            vec![SpecialToken::Bos.id(), SpecialToken::Eos.id()]
        );
        assert_eq!(
            tokenizer.decode(&tokenizer.encode("The MAT!", true, false), true, false),
            "the mat"
        );
    }

    #[test]
    fn test_learn_min_frequency() {
        let mut tokenizer = local_tokenizer();
        assert_eq!(tokenizer.learn("a a b", 2), 6);
        assert_eq!(tokenizer.learn("b", 0), 7);

        let report = tokenizer.learn_report(["c d", "c"], 2);
        assert_eq!(report.new_tokens, 1);
        assert_eq!(report.vocab_size, 8);
    }

    #[test]
    fn test_encode_subword() {
        let mut tokenizer = local_tokenizer();
        tokenizer.learn("play ing", 1);

        let play = tokenizer.vocab().lookup_id("play").unwrap();
        let ing = tokenizer.vocab().lookup_id("ing").unwrap();
        assert_eq!(
            tokenizer.encode_subword("playing", false),
            vec![play, ing]
        );
        assert_eq!(
            tokenizer.encode("playing", false, false),
            vec![SpecialToken::Unk.id()]
        );
    }

    #[test]
    fn test_add_special_token() {
        let mut tokenizer = local_tokenizer();

        assert_eq!(tokenizer.add_special_token("<CLS>", None).unwrap(), 5);
        assert_eq!(tokenizer.vocab().len(), 6);
        assert_eq!(tokenizer.add_special_token("<CLS>", None).unwrap(), 5);
        assert_eq!(tokenizer.vocab().len(), 6);

        assert_eq!(tokenizer.add_special_token("<MASK>", Some(100)).unwrap(), 100);
        assert_eq!(tokenizer.vocab().next_id(), 101);

        let before = tokenizer.vocab().clone();
        assert!(matches!(
            tokenizer.add_special_token("", None),
            Err(WordbankError::InvalidToken)
        ));
        assert!(matches!(
            tokenizer.add_special_token("<X>", Some(-3)),
            Err(WordbankError::InvalidId { id: -3 })
        ));
        assert_eq!(tokenizer.vocab(), &before);
    }

    #[test]
    fn test_save_load_reset() {
        let mut tokenizer = local_tokenizer();
        tokenizer.learn("alpha beta gamma", 1);
        tokenizer.add_special_token("<CLS>", Some(42)).unwrap();

        let record = tokenizer.save();
        assert_eq!(record.next_token_id, 43);

        let mut other = local_tokenizer();
        other.load(&record).unwrap();
        assert_eq!(other.vocab(), tokenizer.vocab());

        tokenizer.reset();
        assert_eq!(tokenizer.vocab(), &Vocabulary::new());

        let mut bad = record.clone();
        bad.vocab.insert("dup".to_string(), 5);
        assert!(matches!(
            other.load(&bad),
            Err(WordbankError::MalformedVocabulary(_))
        ));
        assert_eq!(other.save(), record);
    }

    #[test]
    fn test_stats() {
        let mut tokenizer = local_tokenizer();
        tokenizer.learn("x y", 1);

        let stats = tokenizer.stats();
        assert_eq!(stats.vocab_size, 7);
        assert_eq!(stats.special_tokens_count, 5);
        assert_eq!(stats.vocabulary.len(), 7);
    }

    #[test]
    fn test_delegate_success() {
        let (mut tokenizer, stub) = stub_tokenizer(StubCodec::fixed(vec![9001, 9002], "external"));
        tokenizer.learn("hello", 1);

        // Delegated ids are returned unchanged; no boundary tokens.
        assert_eq!(tokenizer.encode("hello", true, true), vec![9001, 9002]);
        assert_eq!(tokenizer.decode(&[5], true, true), "external");
        assert_eq!(stub.encode_calls(), 1);
        assert_eq!(stub.decode_calls(), 1);

        // Not delegated unless asked.
        assert_eq!(tokenizer.encode("hello", false, false), vec![5]);
        assert_eq!(stub.encode_calls(), 1);
    }

    #[test]
    fn test_delegate_failure_falls_back() {
        let (mut tokenizer, stub) = stub_tokenizer(StubCodec::failing());
        tokenizer.learn("hello", 1);

        assert_eq!(
            tokenizer.encode("hello", true, true),
            tokenizer.encode("hello", true, false)
        );
        assert_eq!(tokenizer.decode(&[2, 5, 3], true, true), "hello");
        assert_eq!(stub.encode_calls(), 1);
        assert_eq!(stub.decode_calls(), 1);
    }

    #[test]
    fn test_delegate_unavailable_falls_back() {
        let (mut tokenizer, stub) = stub_tokenizer(StubCodec::unavailable());
        tokenizer.learn("hello", 1);

        assert_eq!(tokenizer.encode("hello", false, true), vec![5]);
        assert_eq!(tokenizer.decode(&[5], false, true), "hello");
        assert_eq!(stub.encode_calls(), 0);
        assert_eq!(stub.decode_calls(), 0);
    }

    #[test]
    fn test_delegate_empty_decode_falls_back() {
        let (mut tokenizer, _stub) = stub_tokenizer(StubCodec::fixed(vec![], ""));
        tokenizer.learn("hello", 1);

        assert_eq!(tokenizer.encode("hello", true, true), Vec::<TokenId>::new());
        assert_eq!(tokenizer.decode(&[5], true, true), "hello");
    }

    #[test]
    fn test_top_id_never_overflows() {
        let mut tokenizer = local_tokenizer();
        let last = TokenId::MAX - 1;
        assert_eq!(
            tokenizer.add_special_token("<BIG>", Some(last as i64)).unwrap(),
            last
        );
        assert_eq!(tokenizer.vocab().next_id(), TokenId::MAX);

        assert_eq!(tokenizer.learn("hello", 1), 6);
        assert!(!tokenizer.vocab().contains_token("hello"));

        let before = tokenizer.vocab().clone();
        assert!(matches!(
            tokenizer.add_special_token("<CLS>", None),
            Err(WordbankError::VocabularyFull)
        ));
        assert_eq!(tokenizer.add_special_token("<BIG>", None).unwrap(), last);
        assert_eq!(tokenizer.vocab(), &before);
        tokenizer.vocab().validate().unwrap();
    }
}
