//! Common traits and the error type shared by the heap primitives
//!
//! - [`Compare`]: the ordering seam every primitive is generic over
//! - [`HeapError`]: the single failure mode, reported by operations that need
//!   a root to exist
//!
//! A comparator answers one question: "does `a` rank strictly below `b`?".
//! Whatever ranks highest ends up at index 0. With [`MaxOrder`](crate::MaxOrder)
//! (`a < b`) that is the maximum; with [`MinOrder`](crate::MinOrder) it is the
//! minimum.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum HeapError {
    /// The operation needs a root element but the buffer has none
    #[error("{operation}() on empty heap")]
    EmptyHeap {
        /// Name of the operation that was attempted
        operation: &'static str,
    },
}

impl HeapError {
    pub(crate) fn empty(operation: &'static str) -> Self {
        log::trace!("heap_utils: {operation}() on empty heap");
        HeapError::EmptyHeap { operation }
    }
}

/// Ordering predicate used to arrange a heap
///
/// `lower(a, b)` returns `true` when `a` has strictly lower priority than `b`,
/// i.e. `a` should sink below `b`. It must describe a strict weak ordering and
/// must stay the same across every call made on one buffer; neither condition
/// is checked. A comparator that breaks them produces an unspecified element
/// order but never panics or loses elements.
///
/// Any `Fn(&T, &T) -> bool` is a comparator, with the same meaning as the
/// `comp(a, b)` argument of C++'s `std::make_heap`:
///
/// ```rust
/// use heap_utils::{heapify, heap_top};
///
/// let mut data = vec![(1, 'a'), (3, 'c'), (2, 'b')];
/// heapify(&mut data, |a: &(i32, char), b: &(i32, char)| a.0 < b.0);
/// assert_eq!(heap_top(&data), Ok(&(3, 'c')));
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns `true` if `a` ranks strictly below `b`
    fn lower(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn lower(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
