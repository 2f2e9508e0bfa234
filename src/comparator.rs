//! Comparator capability - an externally supplied total order over keys.
//!
//! A [`BoundedTree`](crate::tree::BoundedTree) never consults the key type's
//! own ordering. Every placement, lookup and range decision goes through the
//! comparator handed to it at construction, so two keys are "the same key"
//! exactly when the comparator says [`Ordering::Equal`].
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `K`:
//!
//! ## Consistency
//!
//! ```text
//! compare(a, b) always yields the same result for the same inputs
//! ```
//!
//! ## Antisymmetry
//!
//! ```text
//! compare(a, b) == compare(b, a).reverse()
//! ```
//!
//! ## Transitivity
//!
//! ```text
//! compare(a, b) == Less && compare(b, c) == Less  =>  compare(a, c) == Less
//! ```
//!
//! A comparator that breaks these laws does not cause undefined behaviour,
//! but the tree's ordering invariant no longer holds and lookups may miss.
//!
//! # Examples
//!
//! ```rust
//! use bounded_tree::comparator::{Comparator, NaturalOrder, ReverseOrder};
//! use std::cmp::Ordering;
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(ReverseOrder.compare(&1, &2), Ordering::Greater);
//!
//! // Any `Fn(&K, &K) -> Ordering` is a comparator
//! let by_length = |left: &&str, right: &&str| left.len().cmp(&right.len());
//! assert_eq!(by_length.compare(&"abc", &"de"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over keys of type `K`.
///
/// # Laws
///
/// Implementations must be consistent, antisymmetric and transitive (see the
/// [module documentation](self)).
///
/// # Examples
///
/// ```rust
/// use bounded_tree::comparator::Comparator;
/// use std::cmp::Ordering;
///
/// struct CaseInsensitive;
///
/// impl Comparator<String> for CaseInsensitive {
///     fn compare(&self, left: &String, right: &String) -> Ordering {
///         left.to_lowercase().cmp(&right.to_lowercase())
///     }
/// }
///
/// assert_eq!(
///     CaseInsensitive.compare(&"Tree".to_string(), &"tree".to_string()),
///     Ordering::Equal
/// );
/// ```
pub trait Comparator<K: ?Sized> {
    /// Compares two keys.
    fn compare(&self, left: &K, right: &K) -> Ordering;

    /// Returns a comparator that orders keys in the opposite direction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_tree::comparator::Comparator;
    /// use std::cmp::Ordering;
    ///
    /// let by_length = |left: &&str, right: &&str| left.len().cmp(&right.len());
    /// let longest_first = by_length.reversed();
    /// assert_eq!(longest_first.compare(&"abc", &"de"), Ordering::Less);
    /// ```
    #[must_use]
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed { inner: self }
    }
}

impl<K, F> Comparator<K> for F
where
    K: ?Sized,
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self(left, right)
    }
}

/// Orders keys by their `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl NaturalOrder {
    /// Returns the descending counterpart, [`ReverseOrder`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_tree::comparator::{Comparator, NaturalOrder};
    /// use std::cmp::Ordering;
    ///
    /// let descending = NaturalOrder.reversed();
    /// assert_eq!(descending.compare(&1, &2), Ordering::Greater);
    /// ```
    #[inline]
    #[must_use]
    pub const fn reversed(self) -> ReverseOrder {
        ReverseOrder
    }
}

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }
}

/// Orders keys by the reverse of their `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder;

impl ReverseOrder {
    /// Returns the ascending counterpart, [`NaturalOrder`].
    #[inline]
    #[must_use]
    pub const fn reversed(self) -> NaturalOrder {
        NaturalOrder
    }
}

impl<K: Ord + ?Sized> Comparator<K> for ReverseOrder {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        right.cmp(left)
    }
}

/// A comparator that inverts another comparator.
///
/// Created by [`Comparator::reversed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C> {
    inner: C,
}

impl<C> Reversed<C> {
    /// Undoes the reversal, returning the wrapped comparator.
    #[inline]
    #[must_use]
    pub fn reversed(self) -> C {
        self.inner
    }
}

impl<K: ?Sized, C: Comparator<K>> Comparator<K> for Reversed<C> {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self.inner.compare(right, left)
    }
}

/// A comparator built from a function returning a signed integer.
///
/// Negative means "less", zero means "equal", positive means "greater".
/// Created by [`by_sign`].
#[derive(Debug, Clone, Copy)]
pub struct BySign<F> {
    function: F,
}

/// Adapts a sign-returning comparison function into a [`Comparator`].
///
/// # Examples
///
/// ```rust
/// use bounded_tree::comparator::{Comparator, by_sign};
/// use std::cmp::Ordering;
///
/// let comparator = by_sign(|left: &i64, right: &i64| {
///     i64::from(left > right) - i64::from(left < right)
/// });
/// assert_eq!(comparator.compare(&3, &10), Ordering::Less);
/// assert_eq!(comparator.compare(&10, &10), Ordering::Equal);
/// assert_eq!(comparator.compare(&i64::MIN, &1), Ordering::Less);
/// ```
pub const fn by_sign<K, F>(function: F) -> BySign<F>
where
    K: ?Sized,
    F: Fn(&K, &K) -> i64,
{
    BySign { function }
}

impl<K, F> Comparator<K> for BySign<F>
where
    K: ?Sized,
    F: Fn(&K, &K) -> i64,
{
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        (self.function)(left, right).cmp(&0)
    }
}
