//! Construction-time configuration of a bounded tree.
//!
//! A [`TreeConfig`] carries the maximum number of entries and the
//! [`CapacityPolicy`] that decides what a full tree does with an insert.
//! Both are fixed for the lifetime of the tree.

use std::num::NonZeroUsize;

use super::TreeError;

/// What a full tree does with an insert.
///
/// # Examples
///
/// ```rust
/// use bounded_tree::prelude::*;
///
/// let config = TreeConfig::new(1).unwrap().with_policy(CapacityPolicy::AllowOverwrite);
/// let mut tree = BoundedTree::with_config(NaturalOrder, config);
/// tree.insert(1, "one").unwrap();
///
/// // Full, but the key already exists
/// assert_eq!(tree.insert(1, "ONE"), Ok(Some("one")));
/// assert!(tree.insert(2, "two").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CapacityPolicy {
    /// A full tree rejects every insert, including overwrites of keys it
    /// already holds.
    #[default]
    Strict,
    /// A full tree still overwrites values of keys it already holds; only
    /// inserts that would add a node are rejected.
    AllowOverwrite,
}

/// Capacity and full-tree behaviour of a [`BoundedTree`](super::BoundedTree).
///
/// # Examples
///
/// ```rust
/// use bounded_tree::tree::{CapacityPolicy, TreeConfig, TreeError};
///
/// let config = TreeConfig::new(10).unwrap();
/// assert_eq!(config.capacity(), 10);
/// assert_eq!(config.policy(), CapacityPolicy::Strict);
///
/// assert!(matches!(TreeConfig::new(0), Err(TreeError::InvalidArgument { .. })));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeConfig {
    capacity: NonZeroUsize,
    #[cfg_attr(feature = "serde", serde(default))]
    policy: CapacityPolicy,
}

impl TreeConfig {
    /// Creates a configuration with the given capacity and the
    /// [`Strict`](CapacityPolicy::Strict) policy.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidArgument`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, TreeError> {
        NonZeroUsize::new(capacity)
            .map(Self::from_capacity)
            .ok_or_else(|| TreeError::invalid_argument("capacity must be at least 1"))
    }

    /// Creates a configuration from a capacity that is known to be non-zero.
    #[must_use]
    pub const fn from_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            capacity,
            policy: CapacityPolicy::Strict,
        }
    }

    /// Returns this configuration with a different policy.
    #[must_use]
    pub const fn with_policy(self, policy: CapacityPolicy) -> Self {
        Self { policy, ..self }
    }

    /// The maximum number of entries.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// The full-tree policy.
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> CapacityPolicy {
        self.policy
    }
}
