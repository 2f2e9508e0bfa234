//! Owned key/value snapshots returned by tree queries.

use std::fmt;

/// A copy of one entry of a [`BoundedTree`](super::BoundedTree).
///
/// The pair owns its key and value. Changing it never changes the tree it
/// was read from.
///
/// # Examples
///
/// ```rust
/// use bounded_tree::prelude::*;
///
/// let mut tree = BoundedTree::with_natural_order(4).unwrap();
/// tree.insert(1, "one".to_string()).unwrap();
///
/// let mut pair = tree.find(&1).unwrap();
/// pair.value_mut().push_str("!!!");
///
/// assert_eq!(pair.value(), "one!!!");
/// assert_eq!(tree.get(&1), Some(&"one".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyValuePair<K, V> {
    key: K,
    value: V,
}

impl<K, V> KeyValuePair<K, V> {
    /// Creates a pair.
    #[inline]
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// The key.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// The value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Mutable access to the value of this snapshot.
    #[inline]
    pub const fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Splits the pair into its key and value.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for KeyValuePair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K, V> From<KeyValuePair<K, V>> for (K, V) {
    fn from(pair: KeyValuePair<K, V>) -> Self {
        pair.into_parts()
    }
}

/// Formats the pair as `{key:value}`, the unit the tree's own `Display` is
/// built from.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for KeyValuePair<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{{}:{}}}", self.key, self.value)
    }
}
