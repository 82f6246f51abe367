//! Heap mutation: push and pop on a `Vec` that already satisfies the heap
//! property
//!
//! Both operations must be given the comparator that established the heap
//! order. This is not checked.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `heap_push`  | O(log n)   |
//! | `heap_pop`   | O(log n)   |

use crate::sift::{sift_down, sift_up};
use crate::traits::{Compare, HeapError};

/// Append `value` and restore the heap property by sifting it up
///
/// Never fails; pushing onto an empty vector makes `value` the root.
///
/// # Example
///
/// ```rust
/// use heap_utils::{heap_push, heap_top, MaxOrder};
///
/// let mut heap = Vec::new();
/// heap_push(&mut heap, 3, MaxOrder);
/// heap_push(&mut heap, 7, MaxOrder);
/// heap_push(&mut heap, 5, MaxOrder);
/// assert_eq!(heap_top(&heap), Ok(&7));
/// ```
pub fn heap_push<T, C: Compare<T>>(data: &mut Vec<T>, value: T, comp: C) {
    push_value(data, value, &comp);
}

pub(crate) fn push_value<T, C: Compare<T>>(data: &mut Vec<T>, value: T, comp: &C) {
    data.push(value);
    let last = data.len() - 1;
    sift_up(data, last, comp);
}

/// Remove and return the root, restoring the heap property over the rest
///
/// The root is swapped with the last element, the vector shrinks by one, and
/// the element now at the root is sifted down.
///
/// # Errors
/// Returns [`HeapError::EmptyHeap`] if `data` is empty. The vector is left
/// untouched in that case.
///
/// # Example
///
/// ```rust
/// use heap_utils::{heap_pop, heapify, HeapError, MinOrder};
///
/// let mut heap = vec![5, 4, 3];
/// heapify(&mut heap, MinOrder);
/// assert_eq!(heap_pop(&mut heap, MinOrder), Ok(3));
/// assert_eq!(heap_pop(&mut heap, MinOrder), Ok(4));
/// assert_eq!(heap_pop(&mut heap, MinOrder), Ok(5));
/// assert!(matches!(
///     heap_pop(&mut heap, MinOrder),
///     Err(HeapError::EmptyHeap { .. })
/// ));
/// ```
pub fn heap_pop<T, C: Compare<T>>(data: &mut Vec<T>, comp: C) -> Result<T, HeapError> {
    pop_root(data, &comp).ok_or_else(|| HeapError::empty("heap_pop"))
}

pub(crate) fn pop_root<T, C: Compare<T>>(data: &mut Vec<T>, comp: &C) -> Option<T> {
    if data.is_empty() {
        return None;
    }

    // swap_remove moves the last element into slot 0.
    let root = data.swap_remove(0);
    sift_down(data, 0, comp);
    Some(root)
}
