//! # Vocab Learner

use crate::{training::WordCounter, vocab::Vocabulary};

/// Options for [`VocabLearner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearnOptions {
    /// The minimum count a word needs to be learned; always >= 1.
    min_frequency: usize,
}

impl Default for LearnOptions {
    fn default() -> Self {
        Self { min_frequency: 1 }
    }
}

impl LearnOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `min_frequency` - The minimum word count; values < 1 are treated as 1.
    pub fn new(min_frequency: usize) -> Self {
        Self::default().with_min_frequency(min_frequency)
    }

    /// Get the minimum word count.
    pub fn min_frequency(&self) -> usize {
        self.min_frequency
    }

    /// Sets the minimum word count; values < 1 are treated as 1.
    pub fn set_min_frequency(
        &mut self,
        min_frequency: usize,
    ) {
        self.min_frequency = min_frequency.max(1);
    }

    /// Sets the minimum word count; values < 1 are treated as 1.
    ///
    /// ## Returns
    /// The updated `LearnOptions` instance.
    pub fn with_min_frequency(
        mut self,
        min_frequency: usize,
    ) -> Self {
        self.set_min_frequency(min_frequency);
        self
    }
}

/// The outcome of a learning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearnReport {
    /// The number of tokens added.
    pub new_tokens: usize,

    /// The vocabulary size after learning.
    pub vocab_size: usize,
}

/// Grows a [`Vocabulary`] from text.
#[derive(Debug, Clone, Copy, Default)]
pub struct VocabLearner {
    options: LearnOptions,
}

impl VocabLearner {
    /// Create a new learner.
    pub fn new(options: LearnOptions) -> Self {
        Self { options }
    }

    /// Get the options.
    pub fn options(&self) -> &LearnOptions {
        &self.options
    }

    /// Learn from a single text.
    ///
    /// See [`learn_samples`](Self::learn_samples).
    pub fn learn_text(
        &self,
        vocab: &mut Vocabulary,
        text: &str,
    ) -> LearnReport {
        self.learn_samples(vocab, [text])
    }

    /// Learn from a batch of samples.
    ///
    /// Word counts are aggregated over every sample before the
    /// frequency threshold is applied.
    ///
    /// ## Arguments
    /// * `vocab` - The vocabulary to grow; existing ids are never reassigned.
    /// * `samples` - The text samples.
    ///
    /// ## Returns
    /// A [`LearnReport`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, vocab, samples)))]
    pub fn learn_samples<I>(
        &self,
        vocab: &mut Vocabulary,
        samples: I,
    ) -> LearnReport
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut counter = WordCounter::new();
        counter.update_from_samples(samples);
        self.learn_from_counts(vocab, &counter)
    }

    /// Learn from pre-computed word counts.
    ///
    /// Qualifying words are inserted in the counter's first-seen order.
    /// Learning stops early, keeping the words already added, once the
    /// vocabulary has no ids left.
    pub fn learn_from_counts(
        &self,
        vocab: &mut Vocabulary,
        counter: &WordCounter,
    ) -> LearnReport {
        let min_frequency = self.options.min_frequency as u64;

        let mut new_tokens = 0;
        for (word, count) in counter.iter_in_order() {
            if count < min_frequency || vocab.contains_token(word) {
                continue;
            }
            if let Err(err) = vocab.insert(word) {
                log::warn!("stopped learning at {word:?}: {err}");
                break;
            }
            new_tokens += 1;
        }

        log::debug!(
            "learned {new_tokens} new tokens from {} distinct words; vocab size {}",
            counter.len(),
            vocab.len()
        );

        LearnReport {
            new_tokens,
            vocab_size: vocab.len(),
        }
    }
}
