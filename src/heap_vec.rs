//! An owned heap that remembers its comparator
//!
//! The free functions in this crate trust the caller to pass the same
//! comparator on every call. [`HeapVec`] stores the comparator next to the
//! buffer, so it cannot drift between calls. It is a thin layer: the buffer is
//! a plain `Vec<T>` that can be borrowed with [`HeapVec::as_slice`] or taken
//! back with [`HeapVec::into_vec`] at any time.
//!
//! # Differences from `BinaryHeap`
//!
//! - The ordering is a value ([`Compare`]), not the element's `Ord` impl, so a
//!   min-heap needs no `Reverse` wrapper around every element.
//! - [`HeapVec::into_sorted_vec`] returns elements best first (descending for
//!   [`MaxOrder`]), where `BinaryHeap::into_sorted_vec` is ascending.
//!
//! # Example
//!
//! ```rust
//! use heap_utils::{HeapVec, MinOrder};
//!
//! let mut heap = HeapVec::from_vec(vec![5, 4, 3, 2, 1], MinOrder);
//! assert_eq!(heap.peek(), Some(&1));
//! heap.push(0);
//! assert_eq!(heap.pop(), Some(0));
//! assert_eq!(heap.peek(), Some(&1));
//! ```

use crate::heapify::build_heap;
use crate::mutation::{pop_root, push_value};
use crate::order::MaxOrder;
use crate::top_k::into_top_k;
use crate::traits::Compare;

/// A `Vec<T>` kept in heap order under the comparator `C`
#[derive(Debug, Clone)]
pub struct HeapVec<T, C = MaxOrder> {
    data: Vec<T>,
    comp: C,
}

impl<T, C: Compare<T> + Default> HeapVec<T, C> {
    /// Creates an empty heap using the default value of `C`
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Compare<T>> HeapVec<T, C> {
    /// Creates an empty heap ordered by `comp`
    pub fn with_comparator(comp: C) -> Self {
        Self {
            data: Vec::new(),
            comp,
        }
    }

    /// Takes ownership of `data` and heapifies it in O(n)
    pub fn from_vec(mut data: Vec<T>, comp: C) -> Self {
        build_heap(&mut data, &comp);
        Self { data, comp }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the comparator this heap is ordered by
    pub fn comparator(&self) -> &C {
        &self.comp
    }

    /// Pushes an item onto the heap
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn push(&mut self, item: T) {
        push_value(&mut self.data, item, &self.comp);
    }

    /// Returns the root without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the root
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop(&mut self) -> Option<T> {
        pop_root(&mut self.data, &self.comp)
    }

    /// Removes every element, keeping the allocation
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The underlying buffer, in heap order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the underlying buffer, in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap and returns every element, best first
    pub fn into_sorted_vec(self) -> Vec<T> {
        let len = self.data.len();
        self.into_top_k(len)
    }

    /// Consumes the heap and returns its `k` best elements, best first
    pub fn into_top_k(self, k: usize) -> Vec<T> {
        into_top_k(self.data, k, self.comp)
    }
}

impl<T, C: Compare<T> + Default> Default for HeapVec<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for HeapVec<T, MaxOrder> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data, MaxOrder)
    }
}

impl<T, C: Compare<T>> From<HeapVec<T, C>> for Vec<T> {
    fn from(heap: HeapVec<T, C>) -> Self {
        heap.into_vec()
    }
}

impl<T, C: Compare<T>> Extend<T> for HeapVec<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for HeapVec<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect(), C::default())
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, C> serde::Serialize for HeapVec<T, C> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.data, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C> serde::Deserialize<'de> for HeapVec<T, C>
where
    T: serde::Deserialize<'de>,
    C: Compare<T> + Default,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = <Vec<T> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        Ok(Self::from_vec(data, C::default()))
    }
}
