//! # Common Types

/// Integer id assigned to a token.
pub type TokenId = u32;

/// Convert a caller-supplied id into a [`TokenId`].
///
/// Rejects negative ids, and ids which leave no room for `id + 1`
/// in the allocation counter.
pub fn try_token_id(id: i64) -> crate::WBResult<TokenId> {
    match TokenId::try_from(id) {
        Ok(token) if token < TokenId::MAX => Ok(token),
        _ => Err(crate::WordbankError::InvalidId { id }),
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type WBHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> WBHashMap<K, V> {
            WBHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WBHashMap<K, V> {
            WBHashMap::with_capacity(capacity)
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type WBHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> WBHashMap<K, V> {
            WBHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WBHashMap<K, V> {
            WBHashMap::with_capacity(capacity)
        }
    }
}
