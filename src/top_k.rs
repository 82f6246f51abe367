//! Top-K extraction
//!
//! The K best elements are found by heapifying a working copy of the input
//! and popping K times. Results are ranked best first under the comparator.
//!
//! # Time Complexity
//!
//! O(n + k log n): a linear heapify followed by `min(k, n)` pops.
//!
//! | Function              | Comparator           | Result order     |
//! |-----------------------|----------------------|------------------|
//! | [`top_k`]             | caller supplied      | best first       |
//! | [`largest_k`]         | [`MaxOrder`]         | descending       |
//! | [`smallest_k`]        | [`MinOrder`]         | ascending        |
//! | [`largest_k_by_key`]  | [`ByKey`]            | descending key   |
//! | [`smallest_k_by_key`] | reversed [`ByKey`]   | ascending key    |

use crate::heapify::build_heap;
use crate::mutation::pop_root;
use crate::order::{ByKey, MaxOrder, MinOrder, Reversed};
use crate::traits::Compare;

/// Return the `k` best elements of `data` under `comp`, best first
///
/// `data` is cloned into a working buffer; the caller's slice is never
/// reordered. If `k` is zero or `data` is empty the result is empty. If `k`
/// is at least `data.len()` every element is returned, fully ranked.
/// Equal elements come out in no particular order.
///
/// # Example
///
/// ```rust
/// use heap_utils::top_k;
///
/// let words = ["kiwi", "fig", "banana", "apple"];
/// let longest = top_k(&words, 2, |a: &&str, b: &&str| a.len() < b.len());
/// assert_eq!(longest, vec!["banana", "apple"]);
/// ```
pub fn top_k<T: Clone, C: Compare<T>>(data: &[T], k: usize, comp: C) -> Vec<T> {
    if k == 0 || data.is_empty() {
        return Vec::new();
    }
    into_top_k(data.to_vec(), k, comp)
}

/// Like [`top_k`], but takes ownership of the input instead of cloning it
///
/// Useful when the caller no longer needs the original vector or `T` is not
/// `Clone`.
pub fn into_top_k<T, C: Compare<T>>(mut data: Vec<T>, k: usize, comp: C) -> Vec<T> {
    let take = k.min(data.len());
    log::trace!(
        "heap_utils: extracting top {} of {} elements (k = {})",
        take,
        data.len(),
        k
    );
    if take == 0 {
        return Vec::new();
    }

    build_heap(&mut data, &comp);

    let mut out = Vec::with_capacity(take);
    out.extend(std::iter::from_fn(|| pop_root(&mut data, &comp)).take(take));
    out
}

/// Return the `k` largest elements of `data` in descending order
///
/// ```rust
/// use heap_utils::largest_k;
///
/// assert_eq!(largest_k(&[7, 1, 9, 2, 8, 3, 6, 4, 5], 3), vec![9, 8, 7]);
/// ```
pub fn largest_k<T: Ord + Clone>(data: &[T], k: usize) -> Vec<T> {
    top_k(data, k, MaxOrder)
}

/// Return the `k` smallest elements of `data` in ascending order
///
/// ```rust
/// use heap_utils::smallest_k;
///
/// assert_eq!(smallest_k(&[7, 1, 9, 2, 8, 3, 6, 4, 5], 4), vec![1, 2, 3, 4]);
/// ```
pub fn smallest_k<T: Ord + Clone>(data: &[T], k: usize) -> Vec<T> {
    top_k(data, k, MinOrder)
}

/// Return the `k` elements with the largest keys, largest key first
pub fn largest_k_by_key<T, K, F>(data: &[T], k: usize, key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    top_k(data, k, ByKey(key))
}

/// Return the `k` elements with the smallest keys, smallest key first
pub fn smallest_k_by_key<T, K, F>(data: &[T], k: usize, key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    top_k(data, k, Reversed(ByKey(key)))
}
