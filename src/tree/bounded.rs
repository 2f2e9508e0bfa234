//! Capacity-bounded ordered map based on an unbalanced binary search tree.
//!
//! This module provides [`BoundedTree`], a mutable ordered map whose key
//! order comes from an injected [`Comparator`] and whose size can never
//! exceed a capacity fixed at construction.
//!
//! # Overview
//!
//! - O(h) insert, find, remove, min/max where h is the tree height
//! - O(n) ordered traversal, leaf collection and range extraction
//! - O(1) len, `is_empty` and `is_full`
//!
//! The tree never rebalances. Inserting keys in sorted order produces a
//! list-shaped tree of height n.
//!
//! # Examples
//!
//! ```rust
//! use bounded_tree::prelude::*;
//!
//! let mut tree = BoundedTree::new(|left: &i32, right: &i32| left.cmp(right), 10).unwrap();
//! for key in [5, 3, 7, 2, 4, 6, 8] {
//!     tree.insert(key, "a").unwrap();
//! }
//!
//! let mut visited = Vec::new();
//! tree.process_inorder(|key, _| visited.push(*key));
//! assert_eq!(visited, vec![2, 3, 4, 5, 6, 7, 8]);
//!
//! let range = tree.sub_tree(&4, &6).unwrap();
//! assert_eq!(range.to_string(), "{4:a}{5:a}{6:a}");
//! ```
//!
//! # Internal Structure
//!
//! Every node exclusively owns its children through `Option<Box<_>>` links.
//! The tree maintains the following invariants:
//! 1. All keys in a node's left subtree compare `Less` than the node's key
//! 2. All keys in a node's right subtree compare `Greater` than the node's key
//! 3. `len()` equals the number of nodes and never exceeds `capacity()`

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::{CapacityPolicy, KeyValuePair, TreeConfig, TreeError};
use crate::comparator::{Comparator, NaturalOrder};

/// What [`BoundedTree`]'s `Display` writes for a tree without entries.
pub const EMPTY_TREE: &str = "EMPTY TREE";

/// Tree depth kept inline by [`Iter`] before its stack spills to the heap.
const INLINE_DEPTH: usize = 32;

// =============================================================================
// Node Definition
// =============================================================================

type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    const fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn to_pair(&self) -> KeyValuePair<K, V>
    where
        K: Clone,
        V: Clone,
    {
        KeyValuePair::new(self.key.clone(), self.value.clone())
    }

    fn into_pair(self: Box<Self>) -> KeyValuePair<K, V> {
        let Self { key, value, .. } = *self;
        KeyValuePair::new(key, value)
    }

    /// Overwrites this node's entry with `source`'s, returning the old entry.
    fn replace_entry(&mut self, source: Self) -> KeyValuePair<K, V> {
        let Self { key, value, .. } = source;
        KeyValuePair::new(
            mem::replace(&mut self.key, key),
            mem::replace(&mut self.value, value),
        )
    }

    /// Unlinks the leftmost node of this subtree.
    ///
    /// Returns the detached node (with no children) and what remains of the
    /// subtree. The leftmost node has no left child, so it is spliced out
    /// like any other node with at most one child.
    fn detach_minimum(mut self: Box<Self>) -> (Box<Self>, Link<K, V>) {
        match self.left.take() {
            None => {
                let rest = self.right.take();
                (self, rest)
            }
            Some(left) => {
                let (minimum, rest) = left.detach_minimum();
                self.left = rest;
                (minimum, Some(self))
            }
        }
    }
}

/// Releases a forest of nodes without recursing through `Box`'s drop.
fn release_nodes<K, V>(mut pending: Vec<Box<Node<K, V>>>) {
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}

/// The topological case a removal resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RemovalCase {
    Leaf,
    OneChild,
    TwoChildren,
}

impl RemovalCase {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Leaf => "leaf",
            Self::OneChild => "one-child",
            Self::TwoChildren => "two-children",
        }
    }
}

/// An insert reached an empty link but the tree may not grow.
struct GrowthRejected;

// =============================================================================
// BoundedTree Definition
// =============================================================================

/// A capacity-bounded ordered map backed by an unbalanced binary search tree.
///
/// Keys are ordered by the comparator `C`, not by the key type's own
/// ordering. Each key (under the comparator's equivalence) maps to exactly
/// one value; inserting an existing key overwrites its value.
///
/// # Time Complexity
///
/// | Operation                              | Complexity |
/// |----------------------------------------|------------|
/// | `new`                                  | O(1)       |
/// | `insert`                               | O(h)       |
/// | `find` / `get`                         | O(h)       |
/// | `remove`                               | O(h)       |
/// | `minimum_key_value`/`maximum_key_value`| O(h)       |
/// | `process_inorder` / `iter`             | O(n)       |
/// | `sub_tree`                             | O(n · h)   |
/// | `leaf_values`                          | O(n log n) |
/// | `len` / `is_empty` / `is_full`         | O(1)       |
///
/// where h is the height of the tree (n in the worst case).
///
/// # Examples
///
/// ```rust
/// use bounded_tree::prelude::*;
///
/// let mut tree = BoundedTree::with_natural_order(2).unwrap();
/// tree.insert("b", 2).unwrap();
/// tree.insert("a", 1).unwrap();
///
/// assert!(tree.is_full());
/// assert_eq!(tree.insert("c", 3), Err(TreeError::TreeFull { capacity: 2 }));
/// assert_eq!(tree.get(&"a"), Some(&1));
/// ```
#[derive(Clone)]
pub struct BoundedTree<K, V, C = NaturalOrder> {
    /// Root node of the tree
    root: Link<K, V>,
    /// Number of entries
    length: usize,
    config: TreeConfig,
    comparator: C,
}

static_assertions::assert_impl_all!(BoundedTree<i32, String>: Send, Sync);

impl<K, V, C: Comparator<K>> BoundedTree<K, V, C> {
    /// Creates an empty tree ordered by `comparator` that holds at most
    /// `capacity` entries, with the [`Strict`](CapacityPolicy::Strict)
    /// full-tree policy.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidArgument`] if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_tree::prelude::*;
    ///
    /// let tree: BoundedTree<i32, String, _> = BoundedTree::new(ReverseOrder, 10).unwrap();
    /// assert!(tree.is_empty());
    ///
    /// assert!(BoundedTree::<i32, String, _>::new(NaturalOrder, 0).is_err());
    /// ```
    pub fn new(comparator: C, capacity: usize) -> Result<Self, TreeError> {
        Ok(Self::with_config(comparator, TreeConfig::new(capacity)?))
    }

    /// Creates an empty tree from an already validated configuration.
    #[must_use]
    pub const fn with_config(comparator: C, config: TreeConfig) -> Self {
        Self {
            root: None,
            length: 0,
            config,
            comparator,
        }
    }

    /// Inserts a key-value pair into the tree.
    ///
    /// If the tree already holds the key, its value is replaced in place and
    /// the previous value is returned; the length does not change.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::TreeFull`] when the tree is full. Under
    /// [`CapacityPolicy::Strict`] this rejects every insert, including
    /// overwrites; under [`CapacityPolicy::AllowOverwrite`] only inserts of
    /// new keys are rejected. A rejected insert leaves the tree unchanged.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_tree::prelude::*;
    ///
    /// let mut tree = BoundedTree::with_natural_order(10).unwrap();
    /// assert_eq!(tree.insert(1, "one"), Ok(None));
    /// assert_eq!(tree.insert(1, "ONE"), Ok(Some("one")));
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[doc(alias = "add")]
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, TreeError> {
        let can_grow = self.length < self.config.capacity();
        if !can_grow && self.config.policy() == CapacityPolicy::Strict {
            debug!(capacity = self.capacity(), "insert rejected: tree is full");
            return Err(self.full_error());
        }

        match Self::insert_into_slot(&mut self.root, key, value, &self.comparator, can_grow) {
            Ok(None) => {
                self.length += 1;
                trace!(length = self.length, "node created");
                Ok(None)
            }
            Ok(Some(previous)) => {
                trace!(length = self.length, "value replaced");
                Ok(Some(previous))
            }
            Err(GrowthRejected) => {
                debug!(capacity = self.capacity(), "insert rejected: tree is full");
                Err(self.full_error())
            }
        }
    }

    /// Walks down from `slot` to the key's position and places the entry.
    fn insert_into_slot(
        mut slot: &mut Link<K, V>,
        key: K,
        value: V,
        comparator: &C,
        can_grow: bool,
    ) -> Result<Option<V>, GrowthRejected> {
        while let Some(node) = slot {
            match comparator.compare(&key, &node.key) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => return Ok(Some(mem::replace(&mut node.value, value))),
            }
        }
        if !can_grow {
            return Err(GrowthRejected);
        }
        *slot = Some(Box::new(Node::new(key, value)));
        Ok(None)
    }

    /// Inserts every pair of `entries` in order, stopping at the first error.
    ///
    /// Pairs inserted before the failing one stay in the tree.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by [`insert`](Self::insert).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_tree::prelude::*;
    ///
    /// let mut tree = BoundedTree::with_natural_order(2).unwrap();
    /// let result = tree.insert_all([(1, 'a'), (2, 'b'), (3, 'c')]);
    ///
    /// assert_eq!(result, Err(TreeError::TreeFull { capacity: 2 }));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert_all<I>(&mut self, entries: I) -> Result<(), TreeError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.insert(key, value)?;
        }
        Ok(())
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_tree::prelude::*;
    ///
    /// let mut tree = BoundedTree::with_natural_order(4).unwrap();
    /// tree.insert(1, "one").unwrap();
    /// assert_eq!(tree.get(&1), Some(&"one"));
    /// assert_eq!(tree.get(&2), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find_node(key).map(|node| &node.value)
    }

    /// Returns `true` if the tree holds `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }

    /// Returns a copy of the entry stored under `key`.
    ///
    /// A missing key is a normal outcome and yields `None`.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_tree::prelude::*;
    ///
    /// let mut tree = BoundedTree::with_natural_order(4).unwrap();
    /// tree.insert(4, "a").unwrap();
    ///
    /// assert_eq!(tree.find(&4), Some(KeyValuePair::new(4, "a")));
    /// assert_eq!(tree.find(&10), None);
    /// ```
    #[must_use]
    pub fn find(&self, key: &K) -> Option<KeyValuePair<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.find_node(key).map(Node::to_pair)
    }

    fn find_node(&self, key: &K) -> Option<&Node<K, V>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match self.comparator.compare(key, &node.key) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }

    /// Removes `key` from the tree, returning the removed entry.
    ///
    /// A node with no children is unlinked, a node with one child is
    /// replaced by that child, and a node with two children takes over the
    /// entry of its in-order successor (the minimum of its right subtree),
    /// which is then unlinked from the right subtree.
    ///
    /// Removing a key the tree does not hold returns `Ok(None)` and leaves
    /// the length unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::TreeEmpty`] if the tree has no entries.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_tree::prelude::*;
    ///
    /// let mut tree = BoundedTree::with_natural_order(10).unwrap();
    /// tree.insert_all([(5, "a"), (3, "b"), (7, "c")]).unwrap();
    ///
    /// assert_eq!(tree.remove(&5), Ok(Some(KeyValuePair::new(5, "a"))));
    /// assert_eq!(tree.remove(&5), Ok(None));
    /// assert_eq!(tree.to_string(), "{3:b}{7:c}");
    /// ```
    #[doc(alias = "delete")]
    pub fn remove(&mut self, key: &K) -> Result<Option<KeyValuePair<K, V>>, TreeError> {
        if self.is_empty() {
            debug!("remove rejected: tree is empty");
            return Err(TreeError::TreeEmpty);
        }

        let removed = Self::remove_from_slot(&mut self.root, key, &self.comparator);
        Ok(removed.map(|(pair, case)| {
            self.length -= 1;
            trace!(length = self.length, case = case.as_str(), "node removed");
            pair
        }))
    }

    /// Recursive helper for remove.
    fn remove_from_slot(
        slot: &mut Link<K, V>,
        key: &K,
        comparator: &C,
    ) -> Option<(KeyValuePair<K, V>, RemovalCase)> {
        let node = slot.as_mut()?;
        match comparator.compare(key, &node.key) {
            Ordering::Less => Self::remove_from_slot(&mut node.left, key, comparator),
            Ordering::Greater => Self::remove_from_slot(&mut node.right, key, comparator),
            Ordering::Equal => slot.take().map(|target| Self::splice_out(slot, target)),
        }
    }

    /// Removes `target` (already taken out of `slot`) and puts whatever
    /// replaces it back into `slot`.
    fn splice_out(
        slot: &mut Link<K, V>,
        mut target: Box<Node<K, V>>,
    ) -> (KeyValuePair<K, V>, RemovalCase) {
        match (target.left.take(), target.right.take()) {
            (None, None) => (target.into_pair(), RemovalCase::Leaf),
            (Some(child), None) | (None, Some(child)) => {
                *slot = Some(child);
                (target.into_pair(), RemovalCase::OneChild)
            }
            (Some(left), Some(right)) => {
                let (successor, rest) = right.detach_minimum();
                let removed = target.replace_entry(*successor);
                target.left = Some(left);
                target.right = rest;
                *slot = Some(target);
                (removed, RemovalCase::TwoChildren)
            }
        }
    }

    /// Builds a new tree holding copies of every entry whose key lies in
    /// `lower..=upper` under the comparator.
    ///
    /// The result is independent of `self`: it has its own nodes, a clone of
    /// the comparator and the same configuration. Subtrees that lie entirely
    /// outside the bounds are never visited.
    ///
    /// # Errors
    ///
    /// - [`TreeError::InvalidArgument`] if `lower` compares greater than `upper`
    /// - [`TreeError::TreeFull`] if a copy could not be inserted into the result
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_tree::prelude::*;
    ///
    /// let mut tree = BoundedTree::with_natural_order(10).unwrap();
    /// tree.insert_all([5, 3, 7, 2, 4, 6, 8].map(|key| (key, "a"))).unwrap();
    ///
    /// let range = tree.sub_tree(&4, &8).unwrap();
    /// assert_eq!(range.to_string(), "{4:a}{5:a}{6:a}{7:a}{8:a}");
    /// assert_eq!(tree.len(), 7); // Source unchanged
    ///
    /// assert!(tree.sub_tree(&3, &1).is_err());
    /// ```
    #[doc(alias = "subTree")]
    pub fn sub_tree(&self, lower: &K, upper: &K) -> Result<Self, TreeError>
    where
        K: Clone,
        V: Clone,
        C: Clone,
    {
        if self.comparator.compare(lower, upper) == Ordering::Greater {
            debug!("sub_tree rejected: lower limit is greater than upper limit");
            return Err(TreeError::invalid_argument(
                "lower limit must not be greater than upper limit",
            ));
        }

        let mut result = Self::with_config(self.comparator.clone(), self.config);
        Self::copy_range(
            self.root.as_deref(),
            lower,
            upper,
            &self.comparator,
            &mut result,
        )?;
        trace!(
            source_length = self.length,
            length = result.length,
            "sub-tree extracted"
        );
        Ok(result)
    }

    /// Recursive helper for `sub_tree`, inserting in pre-order so the result
    /// mirrors the shape of the in-range part of the source.
    fn copy_range(
        node: Option<&Node<K, V>>,
        lower: &K,
        upper: &K,
        comparator: &C,
        target: &mut Self,
    ) -> Result<(), TreeError>
    where
        K: Clone,
        V: Clone,
    {
        let Some(node) = node else {
            return Ok(());
        };
        if comparator.compare(&node.key, upper) == Ordering::Greater {
            return Self::copy_range(node.left.as_deref(), lower, upper, comparator, target);
        }
        if comparator.compare(&node.key, lower) == Ordering::Less {
            return Self::copy_range(node.right.as_deref(), lower, upper, comparator, target);
        }
        target.insert(node.key.clone(), node.value.clone())?;
        Self::copy_range(node.left.as_deref(), lower, upper, comparator, target)?;
        Self::copy_range(node.right.as_deref(), lower, upper, comparator, target)
    }
}

impl<K: Ord, V> BoundedTree<K, V, NaturalOrder> {
    /// Creates an empty tree ordered by the keys' `Ord` implementation.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidArgument`] if `capacity` is zero.
    pub fn with_natural_order(capacity: usize) -> Result<Self, TreeError> {
        Self::new(NaturalOrder, capacity)
    }
}

impl<K, V, C> BoundedTree<K, V, C> {
    /// Returns the number of entries in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    #[doc(alias = "size")]
    #[doc(alias = "getTreeSize")]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree has no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns `true` if the tree holds as many entries as its capacity.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.length == self.config.capacity()
    }

    /// The maximum number of entries, fixed at construction.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.config.capacity()
    }

    /// How many more entries fit before the tree is full.
    #[inline]
    #[must_use]
    pub const fn remaining_capacity(&self) -> usize {
        self.config.capacity() - self.length
    }

    /// The full-tree policy.
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> CapacityPolicy {
        self.config.policy()
    }

    /// The configuration the tree was built with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> TreeConfig {
        self.config
    }

    /// The comparator that orders the keys.
    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    const fn full_error(&self) -> TreeError {
        TreeError::TreeFull {
            capacity: self.config.capacity(),
        }
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// An empty tree has height 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_tree::prelude::*;
    ///
    /// let mut tree = BoundedTree::with_natural_order(10).unwrap();
    /// tree.insert_all([(2, ()), (1, ()), (3, ())]).unwrap();
    /// assert_eq!(tree.height(), 2);
    ///
    /// tree.insert(4, ()).unwrap();
    /// assert_eq!(tree.height(), 3);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        Self::height_of(self.root.as_deref())
    }

    fn height_of(node: Option<&Node<K, V>>) -> usize {
        node.map_or(0, |node| {
            1 + Self::height_of(node.left.as_deref()).max(Self::height_of(node.right.as_deref()))
        })
    }

    /// Returns a copy of the entry with the smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::TreeEmpty`] if the tree has no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_tree::prelude::*;
    ///
    /// let mut tree = BoundedTree::with_natural_order(10).unwrap();
    /// assert_eq!(tree.minimum_key_value(), Err(TreeError::TreeEmpty));
    ///
    /// tree.insert_all([(5, "e"), (2, "b"), (8, "h")]).unwrap();
    /// assert_eq!(tree.minimum_key_value(), Ok(KeyValuePair::new(2, "b")));
    /// ```
    #[doc(alias = "getMinimumKeyValue")]
    pub fn minimum_key_value(&self) -> Result<KeyValuePair<K, V>, TreeError>
    where
        K: Clone,
        V: Clone,
    {
        self.leftmost().map(Node::to_pair).ok_or_else(|| {
            debug!("minimum rejected: tree is empty");
            TreeError::TreeEmpty
        })
    }

    /// Returns a copy of the entry with the largest key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::TreeEmpty`] if the tree has no entries.
    #[doc(alias = "getMaximumKeyValue")]
    pub fn maximum_key_value(&self) -> Result<KeyValuePair<K, V>, TreeError>
    where
        K: Clone,
        V: Clone,
    {
        self.rightmost().map(Node::to_pair).ok_or_else(|| {
            debug!("maximum rejected: tree is empty");
            TreeError::TreeEmpty
        })
    }

    /// Returns the entry with the smallest key without copying it.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.leftmost().map(|node| (&node.key, &node.value))
    }

    /// Returns the entry with the largest key without copying it.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.rightmost().map(|node| (&node.key, &node.value))
    }

    fn leftmost(&self) -> Option<&Node<K, V>> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(node)
    }

    fn rightmost(&self) -> Option<&Node<K, V>> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(node)
    }

    /// Calls `callback` with every entry in ascending key order.
    ///
    /// The tree is borrowed for the whole traversal, so the callback cannot
    /// change its structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_tree::prelude::*;
    ///
    /// let mut tree = BoundedTree::with_natural_order(10).unwrap();
    /// tree.insert_all([(5, "d"), (3, "b"), (7, "f")]).unwrap();
    ///
    /// let mut incremented = Vec::new();
    /// tree.process_inorder(|key, _| incremented.push(key + 1));
    /// assert_eq!(incremented, vec![4, 6, 8]);
    /// ```
    #[doc(alias = "processInorder")]
    pub fn process_inorder<F>(&self, mut callback: F)
    where
        F: FnMut(&K, &V),
    {
        Self::visit_in_order(self.root.as_deref(), &mut callback);
    }

    /// Recursive helper for `process_inorder`.
    fn visit_in_order<F>(node: Option<&Node<K, V>>, callback: &mut F)
    where
        F: FnMut(&K, &V),
    {
        if let Some(node) = node {
            Self::visit_in_order(node.left.as_deref(), callback);
            callback(&node.key, &node.value);
            Self::visit_in_order(node.right.as_deref(), callback);
        }
    }

    /// Collects the values of all leaves (nodes without children), ordered
    /// and deduplicated by the values' natural order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_tree::prelude::*;
    ///
    /// let mut tree = BoundedTree::with_natural_order(10).unwrap();
    /// tree.insert_all([(5, "d"), (3, "b"), (7, "f"), (2, "a"), (4, "c"), (6, "e"), (8, "g")])
    ///     .unwrap();
    ///
    /// let leaves: Vec<&str> = tree.leaf_values().into_iter().collect();
    /// assert_eq!(leaves, vec!["a", "c", "e", "g"]);
    /// ```
    #[doc(alias = "getLeavesValues")]
    #[must_use]
    pub fn leaf_values(&self) -> BTreeSet<V>
    where
        V: Ord + Clone,
    {
        let mut leaves = BTreeSet::new();
        Self::collect_leaf_values(self.root.as_deref(), &mut leaves);
        leaves
    }

    fn collect_leaf_values(node: Option<&Node<K, V>>, leaves: &mut BTreeSet<V>)
    where
        V: Ord + Clone,
    {
        if let Some(node) = node {
            if node.is_leaf() {
                leaves.insert(node.value.clone());
            }
            Self::collect_leaf_values(node.left.as_deref(), leaves);
            Self::collect_leaf_values(node.right.as_deref(), leaves);
        }
    }

    /// Returns an iterator over entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_tree::prelude::*;
    ///
    /// let mut tree = BoundedTree::with_natural_order(10).unwrap();
    /// tree.insert_all([(3, "three"), (1, "one"), (2, "two")]).unwrap();
    ///
    /// let keys: Vec<&i32> = tree.iter().map(|(key, _)| key).collect();
    /// assert_eq!(keys, vec![&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iterator = Iter {
            stack: SmallVec::new(),
            remaining: self.length,
        };
        iterator.push_left_spine(self.root.as_deref());
        iterator
    }

    /// Returns an iterator over keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the entries of a [`BoundedTree`] in ascending key order.
///
/// Created by [`BoundedTree::iter`].
pub struct Iter<'a, K, V> {
    stack: SmallVec<[&'a Node<K, V>; INLINE_DEPTH]>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left_spine(&mut self, mut link: Option<&'a Node<K, V>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An owning iterator over the entries of a [`BoundedTree`] in ascending
/// key order.
///
/// Created by [`BoundedTree::into_iter`](IntoIterator::into_iter).
pub struct IntoIter<K, V> {
    stack: Vec<Box<Node<K, V>>>,
    remaining: usize,
}

impl<K, V> IntoIter<K, V> {
    fn push_left_spine(&mut self, mut link: Link<K, V>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        let right = node.right.take();
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(node.into_pair().into_parts())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> Drop for IntoIter<K, V> {
    fn drop(&mut self) {
        release_nodes(mem::take(&mut self.stack));
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, C> Drop for BoundedTree<K, V, C> {
    fn drop(&mut self) {
        release_nodes(self.root.take().into_iter().collect());
    }
}

impl<K, V, C> IntoIterator for BoundedTree<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iterator = IntoIter {
            stack: Vec::new(),
            remaining: mem::take(&mut self.length),
        };
        iterator.push_left_spine(self.root.take());
        iterator
    }
}

impl<'a, K, V, C> IntoIterator for &'a BoundedTree<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two trees are equal when they hold equal entries in the same order.
/// Capacity, policy and tree shape are not compared.
impl<K: PartialEq, V: PartialEq, C> PartialEq for BoundedTree<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for BoundedTree<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for BoundedTree<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

/// Writes [`EMPTY_TREE`] for an empty tree, otherwise `{key:value}` for
/// every entry in ascending key order with no separators.
impl<K: fmt::Display, V: fmt::Display, C> fmt::Display for BoundedTree<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return formatter.write_str(EMPTY_TREE);
        }
        for (key, value) in self {
            write!(formatter, "{{{key}:{value}}}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, C> serde::Serialize for BoundedTree<K, V, C>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Tests
// =============================================================================
