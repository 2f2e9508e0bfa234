//! Capacity-bounded ordered tree.
//!
//! This module provides the container and the types that travel with it:
//!
//! - [`BoundedTree`]: ordered key-value map on an unbalanced binary search tree
//! - [`TreeConfig`] / [`CapacityPolicy`]: capacity and full-tree behaviour
//! - [`KeyValuePair`]: owned snapshot of one entry
//! - [`TreeError`]: everything a tree operation can fail with
//!
//! # Examples
//!
//! ## Insertion, lookup and deletion
//!
//! ```rust
//! use bounded_tree::tree::{BoundedTree, KeyValuePair};
//!
//! let mut tree = BoundedTree::with_natural_order(10).unwrap();
//! for key in [5, 3, 7, 2, 4, 6, 8, 9, 1] {
//!     tree.insert(key, "a").unwrap();
//! }
//!
//! tree.remove(&2).unwrap();
//! assert_eq!(tree.to_string(), "{1:a}{3:a}{4:a}{5:a}{6:a}{7:a}{8:a}{9:a}");
//!
//! tree.remove(&5).unwrap();
//! assert_eq!(tree.find(&6), Some(KeyValuePair::new(6, "a")));
//! assert_eq!(tree.find(&5), None);
//! ```
//!
//! ## Capacity
//!
//! ```rust
//! use bounded_tree::tree::{BoundedTree, TreeError};
//!
//! let mut tree = BoundedTree::with_natural_order(6).unwrap();
//! tree.insert_all([5, 3, 7, 2, 4, 6].map(|key| (key, "a"))).unwrap();
//!
//! assert_eq!(tree.insert(8, "a"), Err(TreeError::TreeFull { capacity: 6 }));
//! assert_eq!(tree.len(), 6);
//! ```
//!
//! ## Custom ordering
//!
//! ```rust
//! use bounded_tree::tree::BoundedTree;
//!
//! let by_length = |left: &String, right: &String| left.len().cmp(&right.len());
//! let mut tree = BoundedTree::new(by_length, 4).unwrap();
//! tree.insert("ccc".to_string(), 3).unwrap();
//! tree.insert("a".to_string(), 1).unwrap();
//!
//! // "zzz" has the same length as "ccc", so it is the same key
//! tree.insert("zzz".to_string(), 30).unwrap();
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.get(&"xyz".to_string()), Some(&30));
//! ```

mod bounded;
mod config;
mod error;
mod pair;

pub use bounded::BoundedTree;
pub use bounded::EMPTY_TREE;
pub use bounded::IntoIter;
pub use bounded::Iter;
pub use config::CapacityPolicy;
pub use config::TreeConfig;
pub use error::TreeError;
pub use pair::KeyValuePair;
