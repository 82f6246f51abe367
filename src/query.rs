//! Read-only heap queries

use crate::traits::{Compare, HeapError};

/// Return the root of the heap without modifying it
///
/// # Errors
/// Returns [`HeapError::EmptyHeap`] if `data` is empty.
pub fn heap_top<T>(data: &[T]) -> Result<&T, HeapError> {
    data.first().ok_or_else(|| HeapError::empty("heap_top"))
}

/// Check whether `data` satisfies the heap property under `comp`
///
/// True iff no child ranks above its parent. Empty and single element slices
/// are heaps.
///
/// # Time Complexity
/// O(n)
pub fn is_heap<T, C: Compare<T>>(data: &[T], comp: C) -> bool {
    is_heap_until(data, comp) == data.len()
}

/// Length of the longest prefix of `data` that is a heap under `comp`
///
/// This is the index of the first element that outranks its parent, or
/// `data.len()` when there is none.
///
/// ```rust
/// use heap_utils::{is_heap_until, MaxOrder};
///
/// assert_eq!(is_heap_until(&[9, 5, 4, 1, 8, 2], MaxOrder), 4);
/// assert_eq!(is_heap_until(&[9, 5, 4], MaxOrder), 3);
/// ```
pub fn is_heap_until<T, C: Compare<T>>(data: &[T], comp: C) -> usize {
    (1..data.len())
        .find(|&child| comp.lower(&data[(child - 1) / 2], &data[child]))
        .unwrap_or(data.len())
}
