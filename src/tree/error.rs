//! Error types for the bounded tree.
//!
//! Every fallible tree operation reports one of the [`TreeError`] kinds. A
//! lookup miss is not an error: [`find`](super::BoundedTree::find) returns
//! `None` instead.

use thiserror::Error;

/// Represents errors that can occur when operating on a
/// [`BoundedTree`](super::BoundedTree).
///
/// A failed operation never leaves a partial mutation behind: the tree is
/// exactly as it was before the call.
///
/// # Examples
///
/// ```rust
/// use bounded_tree::tree::TreeError;
///
/// let error = TreeError::TreeFull { capacity: 6 };
/// assert_eq!(format!("{error}"), "tree is full (capacity 6)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TreeError {
    /// An argument was rejected before any work was done.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected.
        reason: &'static str,
    },
    /// The tree holds as many entries as its capacity allows.
    #[error("tree is full (capacity {capacity})")]
    TreeFull {
        /// The capacity fixed at construction.
        capacity: usize,
    },
    /// The operation needs at least one entry.
    #[error("tree is empty")]
    TreeEmpty,
}

impl TreeError {
    pub(crate) const fn invalid_argument(reason: &'static str) -> Self {
        Self::InvalidArgument { reason }
    }
}
