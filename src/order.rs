//! Ready-made comparators
//!
//! | Comparator      | `lower(a, b)`           | Root        |
//! |-----------------|-------------------------|-------------|
//! | [`MaxOrder`]    | `a < b`                 | maximum     |
//! | [`MinOrder`]    | `a > b`                 | minimum     |
//! | [`Reversed<C>`] | `inner.lower(b, a)`     | flipped `C` |
//! | [`ByKey<F>`]    | `key(a) < key(b)`       | largest key |

use crate::traits::Compare;

/// Natural ordering: the root is the maximum element
///
/// This is the default comparator, matching `std::less<>` in C++'s heap
/// algorithms and the max-heap behaviour of `std::collections::BinaryHeap`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> Compare<T> for MaxOrder {
    #[inline]
    fn lower(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Inverse ordering: the root is the minimum element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinOrder;

impl<T: Ord + ?Sized> Compare<T> for MinOrder {
    #[inline]
    fn lower(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Flips another comparator, so the lowest ranked element becomes the root
///
/// ```rust
/// use heap_utils::{top_k, MaxOrder, Reversed};
///
/// assert_eq!(top_k(&[3, 1, 2], 2, Reversed(MaxOrder)), vec![1, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    #[inline]
    fn lower(&self, a: &T, b: &T) -> bool {
        self.0.lower(b, a)
    }
}

/// Ranks elements by a key extracted from each one; the largest key wins
///
/// Wrap it in [`Reversed`] to make the smallest key win.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T: ?Sized, K: Ord, F> Compare<T> for ByKey<F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn lower(&self, a: &T, b: &T) -> bool {
        (self.0)(a) < (self.0)(b)
    }
}
