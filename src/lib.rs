//! # bounded-tree
//!
//! A capacity-bounded, ordered key-value container backed by an unbalanced
//! binary search tree.
//!
//! ## Overview
//!
//! The container keeps its entries ordered by an injected comparator rather
//! than by the key type's own `Ord`, and refuses to grow beyond a capacity
//! fixed at construction. It includes:
//!
//! - **Comparators**: the [`Comparator`](comparator::Comparator) capability,
//!   implemented for closures, [`NaturalOrder`](comparator::NaturalOrder) and
//!   [`ReverseOrder`](comparator::ReverseOrder)
//! - **Bounded Tree**: insertion, lookup, minimum/maximum, deletion, ordered
//!   traversal, inclusive range extraction and leaf collection
//! - **Configuration**: capacity and the behaviour of a full tree
//!
//! The tree does not rebalance. Operations cost O(height), which degrades to
//! O(n) when keys arrive in sorted order.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` for trees, (de)serialization for pairs and
//!   configuration
//!
//! ## Example
//!
//! ```rust
//! use bounded_tree::prelude::*;
//!
//! let mut tree = BoundedTree::with_natural_order(10).unwrap();
//! tree.insert(5, "five").unwrap();
//! tree.insert(3, "three").unwrap();
//! tree.insert(7, "seven").unwrap();
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.minimum_key_value().unwrap().key(), &3);
//! assert_eq!(tree.to_string(), "{3:three}{5:five}{7:seven}");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the comparator capability and the tree types.
///
/// # Usage
///
/// ```rust
/// use bounded_tree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparator::*;
    pub use crate::tree::*;
}

pub mod comparator;
pub mod tree;
