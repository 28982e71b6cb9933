//! Three-way key ordering used by [`RedBlackTreeMap`](super::RedBlackTreeMap).
//!
//! A [`Comparator`] must describe a strict total order and must be pure:
//! comparing the same two keys always yields the same [`Ordering`].
//!
//! # Examples
//!
//! ```rust
//! use redblack::tree::{Comparator, NaturalOrder, Reversed};
//! use std::cmp::Ordering;
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reversed(NaturalOrder).compare(&1, &2), Ordering::Greater);
//!
//! let by_length = |left: &&str, right: &&str| left.len().cmp(&right.len());
//! assert_eq!(by_length.compare(&"abc", &"de"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// Three-way ordering over keys.
pub trait Comparator<K: ?Sized> {
    /// Compares `left` against `right`.
    fn compare(&self, left: &K, right: &K) -> Ordering;
}

/// Orders keys by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }
}

/// Inverts the ordering of the wrapped comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C = NaturalOrder>(pub C);

impl<K: ?Sized, C: Comparator<K>> Comparator<K> for Reversed<C> {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self.0.compare(left, right).reverse()
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self(left, right)
    }
}
