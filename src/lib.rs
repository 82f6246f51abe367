//! Binary heap primitives over plain vectors
//!
//! This crate provides a small set of free functions that treat an ordinary
//! `Vec<T>` (or slice) as a binary heap, plus top-K extraction built on them.
//! The caller keeps full ownership of the buffer; there is no opaque
//! priority-queue type to adopt.
//!
//! # Features
//!
//! - **Construction**: [`heapify`] arranges any slice into heap order in O(n)
//! - **Mutation**: [`heap_push`] and [`heap_pop`] in O(log n)
//! - **Query**: [`heap_top`] in O(1); [`is_heap`] and [`is_heap_until`] in O(n)
//! - **Top-K**: [`top_k`], [`largest_k`], [`smallest_k`] and the `_by_key`
//!   variants in O(n + k log n), without touching the caller's data
//! - **Comparators**: every function is generic over [`Compare`]; closures
//!   work directly, and [`MaxOrder`] / [`MinOrder`] cover the common cases
//! - **[`HeapVec`]**: an optional wrapper that keeps a buffer and its
//!   comparator together
//!
//! The element at index 0 is the root: the element no other element ranks
//! above. With [`MaxOrder`] that is the maximum, with [`MinOrder`] the minimum.
//! Every call on one buffer must use the same comparator. This is not checked.
//!
//! # Example
//!
//! ```rust
//! use heap_utils::{heap_pop, heap_push, heap_top, heapify, is_heap, MaxOrder};
//!
//! let mut heap = vec![3, 1, 4, 1, 5, 9, 2];
//! heapify(&mut heap, MaxOrder);
//! assert!(is_heap(&heap, MaxOrder));
//! assert_eq!(heap_top(&heap), Ok(&9));
//!
//! heap_push(&mut heap, 6, MaxOrder);
//! assert_eq!(heap_pop(&mut heap, MaxOrder), Ok(9));
//! assert_eq!(heap_pop(&mut heap, MaxOrder), Ok(6));
//! ```
//!
//! # Cargo features
//!
//! - `serde`: `Serialize` / `Deserialize` for [`HeapVec`]. A deserialized heap
//!   is re-heapified, so untrusted input cannot break the heap property.

#![forbid(unsafe_code)]

pub mod heap_vec;
pub mod heapify;
pub mod mutation;
pub mod order;
pub mod query;
pub mod top_k;
pub mod traits;

mod sift;

// Re-export the main API for convenience
pub use heap_vec::HeapVec;
pub use heapify::heapify;
pub use mutation::{heap_pop, heap_push};
pub use order::{ByKey, MaxOrder, MinOrder, Reversed};
pub use query::{heap_top, is_heap, is_heap_until};
pub use top_k::{into_top_k, largest_k, largest_k_by_key, smallest_k, smallest_k_by_key, top_k};
pub use traits::{Compare, HeapError};
