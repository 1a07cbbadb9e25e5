//! # Vocabulary Store ``{ String <-> TokenId }``

use std::collections::BTreeMap;

use crate::{
    WBResult,
    WordbankError,
    types::{TokenId, WBHashMap, hash_map_with_capacity, try_token_id},
    vocab::SpecialToken,
};

/// Bidirectional token vocabulary.
///
/// Invariants, holding after every operation:
/// * `forward` and `reverse` are mutual inverses; so ids are unique.
/// * `next_id` is one past the maximum id in use.
///
/// The reserved [`SpecialToken`]s are present at their fixed ids from construction;
/// only an explicit [`insert_with_id`](Self::insert_with_id) may override them.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    /// Map of ``{ token -> id }``.
    forward: WBHashMap<String, TokenId>,

    /// Map of ``{ id -> token }``; always the inverse of `forward`.
    reverse: WBHashMap<TokenId, String>,

    /// One past the maximum id in `forward`.
    next_id: TokenId,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl Vocabulary {
    /// Create a vocabulary holding exactly the reserved special tokens.
    ///
    /// `next_id` will be 5.
    pub fn new() -> Self {
        let mut vocab = Self {
            forward: hash_map_with_capacity(64),
            reverse: hash_map_with_capacity(64),
            next_id: 0,
        };
        for (token, id) in SpecialToken::pairs() {
            vocab.bind(token.to_string(), id);
        }
        vocab
    }

    /// Build a vocabulary from a ``{ token -> id }`` map.
    ///
    /// `next_id` is computed from the data.
    ///
    /// ## Errors
    /// [`WordbankError::MalformedVocabulary`] if two tokens share an id,
    /// or an id leaves no room for the allocation counter.
    pub fn from_forward<I>(pairs: I) -> WBResult<Self>
    where
        I: IntoIterator<Item = (String, TokenId)>,
    {
        let pairs = pairs.into_iter();
        let (lower, _) = pairs.size_hint();

        let mut vocab = Self {
            forward: hash_map_with_capacity(lower),
            reverse: hash_map_with_capacity(lower),
            next_id: 0,
        };

        for (token, id) in pairs {
            if id == TokenId::MAX {
                return Err(WordbankError::MalformedVocabulary(format!(
                    "token {token:?} has out-of-range id {id}"
                )));
            }
            if let Some(other) = vocab.reverse.get(&id) {
                return Err(WordbankError::MalformedVocabulary(format!(
                    "duplicate id {id} for tokens {other:?} and {token:?}"
                )));
            }
            if vocab.forward.contains_key(&token) {
                return Err(WordbankError::MalformedVocabulary(format!(
                    "duplicate token {token:?}"
                )));
            }
            vocab.bind(token, id);
        }

        Ok(vocab)
    }

    /// Add a `(token, id)` pair known to be free on both sides.
    ///
    /// `id` is always below `TokenId::MAX`.
    fn bind(
        &mut self,
        token: String,
        id: TokenId,
    ) {
        self.reverse.insert(id, token.clone());
        self.forward.insert(token, id);
        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }

    fn recompute_next_id(&mut self) {
        self.next_id = self.reverse.keys().max().map_or(0, |&max| max + 1);
    }

    /// Insert a token, allocating the next free id.
    ///
    /// An already-present token keeps its existing id.
    ///
    /// ## Returns
    /// The token's id.
    ///
    /// ## Errors
    /// [`WordbankError::VocabularyFull`] if a new token is needed and
    /// `next_id` has reached `TokenId::MAX`; the vocabulary is unchanged.
    pub fn insert(
        &mut self,
        token: &str,
    ) -> WBResult<TokenId> {
        if let Some(id) = self.lookup_id(token) {
            return Ok(id);
        }
        let id = self.next_id;
        if id == TokenId::MAX {
            return Err(WordbankError::VocabularyFull);
        }
        self.bind(token.to_string(), id);
        Ok(id)
    }

    /// Insert (or overwrite) `token` at a caller-chosen id.
    ///
    /// If `token` was present under another id, that id is released;
    /// if `id` belonged to another token, that token is evicted.
    /// `next_id` advances to `id + 1` when `id >= next_id`.
    ///
    /// ## Errors
    /// [`WordbankError::InvalidId`] if `id` is negative or out of range;
    /// the vocabulary is unchanged.
    pub fn insert_with_id(
        &mut self,
        token: &str,
        id: i64,
    ) -> WBResult<TokenId> {
        let id = try_token_id(id)?;

        if self.lookup_id(token) == Some(id) {
            return Ok(id);
        }

        let mut released = false;
        if let Some(old_id) = self.forward.remove(token) {
            self.reverse.remove(&old_id);
            released = true;
        }
        if let Some(evicted) = self.reverse.remove(&id) {
            log::debug!("token {evicted:?} evicted from id {id} by {token:?}");
            self.forward.remove(&evicted);
            released = true;
        }

        self.bind(token.to_string(), id);
        if released {
            self.recompute_next_id();
        }

        Ok(id)
    }

    /// Look up the id of a token.
    pub fn lookup_id(
        &self,
        token: &str,
    ) -> Option<TokenId> {
        self.forward.get(token).copied()
    }

    /// Look up the token for an id.
    pub fn lookup_token(
        &self,
        id: TokenId,
    ) -> Option<&str> {
        self.reverse.get(&id).map(String::as_str)
    }

    /// Is this token in the vocabulary?
    pub fn contains_token(
        &self,
        token: &str,
    ) -> bool {
        self.forward.contains_key(token)
    }

    /// The id currently bound to a special token, if it has not been evicted.
    pub fn special_id(
        &self,
        special: SpecialToken,
    ) -> Option<TokenId> {
        self.lookup_id(special.as_str())
    }

    /// Number of tokens, including specials.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Is the vocabulary empty?
    ///
    /// Only possible for a vocabulary built with [`from_forward`](Self::from_forward).
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// The next id [`insert`](Self::insert) will allocate.
    pub fn next_id(&self) -> TokenId {
        self.next_id
    }

    /// Iterate over ``(token, id)`` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenId)> {
        self.forward.iter().map(|(token, &id)| (token.as_str(), id))
    }

    /// The full ``{ token -> id }`` mapping, ordered by token.
    pub fn to_ordered_map(&self) -> BTreeMap<String, TokenId> {
        self.forward
            .iter()
            .map(|(token, &id)| (token.clone(), id))
            .collect()
    }

    /// The subset of the mapping whose tokens are reserved special tokens.
    pub fn special_tokens(&self) -> BTreeMap<String, TokenId> {
        SpecialToken::pairs()
            .filter_map(|(token, _)| {
                self.lookup_id(token)
                    .map(|id| (token.to_string(), id))
            })
            .collect()
    }

    /// Check every structural invariant.
    ///
    /// ## Errors
    /// [`WordbankError::MalformedVocabulary`] describing the first violation found.
    pub fn validate(&self) -> WBResult<()> {
        if self.forward.len() != self.reverse.len() {
            return Err(WordbankError::MalformedVocabulary(format!(
                "forward has {} entries, reverse has {}",
                self.forward.len(),
                self.reverse.len()
            )));
        }
        for (token, &id) in &self.forward {
            if self.reverse.get(&id) != Some(token) {
                return Err(WordbankError::MalformedVocabulary(format!(
                    "token {token:?} -> {id} has no matching reverse entry"
                )));
            }
        }
        let expected = self.reverse.keys().max().map_or(0, |&max| max + 1);
        if self.next_id != expected {
            return Err(WordbankError::MalformedVocabulary(format!(
                "next id is {}, expected {expected}",
                self.next_id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let vocab = Vocabulary::new();
        assert_eq!(vocab.len(), 5);
        assert_eq!(vocab.next_id(), 5);
        assert!(!vocab.is_empty());

        for (token, id) in SpecialToken::pairs() {
            assert_eq!(vocab.lookup_id(token), Some(id));
            assert_eq!(vocab.lookup_token(id), Some(token));
        }
        assert_eq!(vocab.special_tokens().len(), 5);
        vocab.validate().unwrap();

        assert_eq!(Vocabulary::default(), vocab);
    }

    #[test]
    fn test_insert() {
        let mut vocab = Vocabulary::new();

        assert_eq!(vocab.insert("hello").unwrap(), 5);
        assert_eq!(vocab.insert("world").unwrap(), 6);
        assert_eq!(vocab.insert("hello").unwrap(), 5);

        assert_eq!(vocab.len(), 7);
        assert_eq!(vocab.next_id(), 7);
        assert_eq!(vocab.lookup_token(6), Some("world"));
        assert!(vocab.contains_token("hello"));
        assert!(!vocab.contains_token("nope"));
        vocab.validate().unwrap();
    }

    #[test]
    fn test_insert_with_id_advances_next_id() {
        let mut vocab = Vocabulary::new();

        assert_eq!(vocab.insert_with_id("<CLS>", 100).unwrap(), 100);
        assert_eq!(vocab.next_id(), 101);
        assert_eq!(vocab.insert("after").unwrap(), 101);

        assert_eq!(vocab.insert_with_id("<MASK>", 50).unwrap(), 50);
        assert_eq!(vocab.next_id(), 102);
        vocab.validate().unwrap();
    }

    #[test]
    fn test_insert_with_id_moves_token() {
        let mut vocab = Vocabulary::new();
        vocab.insert("a").unwrap();
        vocab.insert("b").unwrap();
        assert_eq!(vocab.next_id(), 7);

        // "b" held the max id; moving it releases 6.
        vocab.insert_with_id("b", 2).unwrap();
        assert_eq!(vocab.lookup_id("b"), Some(2));
        assert_eq!(vocab.lookup_token(6), None);
        assert_eq!(vocab.special_id(SpecialToken::Bos), None);
        assert_eq!(vocab.next_id(), 6);
        assert_eq!(vocab.len(), 6);
        vocab.validate().unwrap();
    }

    #[test]
    fn test_insert_with_id_same_binding_is_noop() {
        let mut vocab = Vocabulary::new();
        let before = vocab.clone();
        assert_eq!(vocab.insert_with_id("<UNK>", 1).unwrap(), 1);
        assert_eq!(vocab, before);
    }

    #[test]
    fn test_insert_with_id_rejects_bad_ids() {
        let mut vocab = Vocabulary::new();
        vocab.insert("x").unwrap();
        let before = vocab.clone();

        assert!(matches!(
            vocab.insert_with_id("y", -1),
            Err(WordbankError::InvalidId { id: -1 })
        ));
        assert!(matches!(
            vocab.insert_with_id("y", TokenId::MAX as i64),
            Err(WordbankError::InvalidId { .. })
        ));
        assert_eq!(vocab, before);
    }

    #[test]
    fn test_from_forward() {
        let vocab = Vocabulary::from_forward([
            ("<PAD>".to_string(), 0),
            ("z".to_string(), 9),
            ("y".to_string(), 3),
        ])
        .unwrap();
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.next_id(), 10);
        assert_eq!(vocab.lookup_token(3), Some("y"));
        vocab.validate().unwrap();

        let empty = Vocabulary::from_forward(Vec::<(String, TokenId)>::new()).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.next_id(), 0);
    }

    #[test]
    fn test_from_forward_rejects_duplicate_ids() {
        let result = Vocabulary::from_forward([("a".to_string(), 7), ("b".to_string(), 7)]);
        assert!(matches!(
            result,
            Err(WordbankError::MalformedVocabulary(_))
        ));

        let result = Vocabulary::from_forward([("a".to_string(), TokenId::MAX)]);
        assert!(matches!(
            result,
            Err(WordbankError::MalformedVocabulary(_))
        ));
    }

    #[test]
    fn test_ordered_views() {
        let mut vocab = Vocabulary::new();
        vocab.insert("cat").unwrap();

        let map = vocab.to_ordered_map();
        assert_eq!(map.len(), 6);
        assert_eq!(map.get("cat"), Some(&5));

        let mut pairs: Vec<_> = vocab.iter().collect();
        pairs.sort_by_key(|&(_, id)| id);
        assert_eq!(pairs.last(), Some(&("cat", 5)));

        let specials = vocab.special_tokens();
        assert_eq!(specials.len(), 5);
        assert!(!specials.contains_key("cat"));
    }

    #[test]
    fn test_full_id_space() {
        let mut vocab = Vocabulary::new();
        let last = TokenId::MAX - 1;

        assert_eq!(vocab.insert_with_id("big", last as i64).unwrap(), last);
        assert_eq!(vocab.next_id(), TokenId::MAX);
        let before = vocab.clone();

        assert!(matches!(
            vocab.insert("next"),
            Err(WordbankError::VocabularyFull)
        ));
        assert_eq!(vocab, before);

        // Present tokens still resolve.
        assert_eq!(vocab.insert("big").unwrap(), last);
        assert_eq!(vocab.insert("<PAD>").unwrap(), 0);

        // Freeing the top id makes room again.
        vocab.insert_with_id("big", 9).unwrap();
        assert_eq!(vocab.insert("next").unwrap(), 10);
        vocab.validate().unwrap();
    }
}
