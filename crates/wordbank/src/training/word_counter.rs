//! # Word Counter

use crate::{
    spanning::normalize,
    types::{WBHashMap, hash_map_with_capacity},
};

/// Counts normalized words across text samples.
///
/// Distinct words are remembered in first-seen order, so iteration is
/// deterministic for identical input.
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    /// Map of ``{ word -> index into order }``.
    index: WBHashMap<String, usize>,

    /// The ``(word, count)`` pairs in first-seen order.
    order: Vec<(String, u64)>,
}

impl WordCounter {
    /// Create a new, empty word counter.
    pub fn new() -> Self {
        Self {
            index: hash_map_with_capacity(1024),
            order: Vec::with_capacity(1024),
        }
    }

    /// Number of distinct words seen.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Has no word been seen?
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The count for a word; zero if unseen.
    pub fn count(
        &self,
        word: &str,
    ) -> u64 {
        self.index
            .get(word)
            .map_or(0, |&idx| self.order[idx].1)
    }

    /// Update word counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        for word in normalize(text.as_ref()) {
            match self.index.get(&word) {
                Some(&idx) => self.order[idx].1 += 1,
                None => {
                    self.index.insert(word.clone(), self.order.len());
                    self.order.push((word, 1));
                }
            }
        }
    }

    /// Update word counts inplace from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Iterate over ``(word, count)`` pairs in first-seen order.
    pub fn iter_in_order(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
    }

    /// Release the word counts, in first-seen order.
    pub fn release(self) -> Vec<(String, u64)> {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_counter() {
        let mut wc = WordCounter::new();
        assert!(wc.is_empty());

        let samples = vec!["Hello world", "Foo world, bar WORLD!"];
        wc.update_from_samples(samples.iter());

        assert_eq!(wc.len(), 4);
        assert_eq!(wc.count("world"), 3);
        assert_eq!(wc.count("hello"), 1);
        assert_eq!(wc.count("Hello"), 0);

        let in_order: Vec<_> = wc.iter_in_order().collect();
        assert_eq!(
            in_order,
            vec![("hello", 1), ("world", 3), ("foo", 1), ("bar", 1)]
        );

        assert_eq!(
            wc.release(),
            vec![
                ("hello".to_string(), 1),
                ("world".to_string(), 3),
                ("foo".to_string(), 1),
                ("bar".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_empty_text() {
        let mut wc = WordCounter::new();
        wc.update_from_text("");
        wc.update_from_text(" ,.; ");
        assert!(wc.is_empty());
        assert!(wc.release().is_empty());
    }
}
