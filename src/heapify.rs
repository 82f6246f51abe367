//! Heap construction
//!
//! Uses bottom-up construction: every non-leaf is sifted down, starting from
//! the last one (`len / 2 - 1`) and ending at the root. Sift-downs near the
//! leaves are short, so the total work is O(n) rather than the O(n log n) of
//! building by repeated insertion.

use crate::sift::sift_down;
use crate::traits::Compare;

/// Rearrange `data` in place so it satisfies the heap property under `comp`
///
/// Any input is accepted, including empty, already ordered, and reverse
/// ordered slices. Elements are only swapped, never cloned or dropped.
///
/// # Time Complexity
/// O(n), with at most `2n` comparisons.
///
/// # Example
///
/// ```rust
/// use heap_utils::{heapify, is_heap, MaxOrder};
///
/// let mut data = vec![3, 1, 4, 1, 5, 9, 2];
/// heapify(&mut data, MaxOrder);
/// assert!(is_heap(&data, MaxOrder));
/// assert_eq!(data[0], 9);
/// ```
pub fn heapify<T, C: Compare<T>>(data: &mut [T], comp: C) {
    build_heap(data, &comp);
}

pub(crate) fn build_heap<T, C: Compare<T>>(data: &mut [T], comp: &C) {
    for index in (0..data.len() / 2).rev() {
        sift_down(data, index, comp);
    }
}
