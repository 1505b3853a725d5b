//! Owning max-heap
//!
//! [`MaxHeap`] wraps a `Vec<T>` and drives it with the in-place primitives
//! from [`functional`](crate::functional), for callers who do not want to
//! manage the backing sequence themselves.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `push`       | O(log n)   |
//! | `pop`        | O(log n)   |
//! | `peek`       | O(1)       |
//! | `push_pop`   | O(log n)   |
//! | `replace`    | O(log n)   |
//! | `merge`      | O(n + m)   |
//! | `From<Vec>`  | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use rust_maxheap::MaxHeap;
//!
//! let mut heap = MaxHeap::from(vec![3, 1, 6, 5, 2, 4]);
//! heap.push(7);
//!
//! assert_eq!(heap.peek(), Some(&7));
//! assert_eq!(heap.pop(), Some(7));
//! assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 4, 5, 6]);
//! ```

use crate::functional;
use crate::traits::{Heap, HeapError};

/// A binary max-heap backed by a `Vec<T>`
///
/// Elements are ordered by `PartialOrd`; the largest comes out first.
#[derive(Debug, Clone)]
pub struct MaxHeap<T> {
    /// Heap-ordered elements
    data: Vec<T>,
}

impl<T: PartialOrd> MaxHeap<T> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a new empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the largest element without removing it
    pub fn peek(&self) -> Option<&T> {
        functional::peek(&self.data)
    }

    /// Inserts an element
    pub fn push(&mut self, item: T) {
        functional::push(&mut self.data, item);
    }

    /// Removes and returns the largest element
    pub fn pop(&mut self) -> Option<T> {
        functional::pop(&mut self.data).ok()
    }

    /// Pushes `item` then pops the largest element
    ///
    /// Returns `item` itself, leaving the heap alone, when the heap is empty or
    /// `item` is at least as large as the current maximum.
    pub fn push_pop(&mut self, item: T) -> T {
        functional::push_pop(&mut self.data, item)
    }

    /// Pops the largest element then pushes `item`
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyReplace`] if the heap is empty.
    pub fn replace(&mut self, item: T) -> Result<T, HeapError> {
        functional::replace(&mut self.data, item)
    }

    /// Moves every element of `other` into this heap
    ///
    /// Rebuilds the heap from scratch, which is O(n + m).
    pub fn merge(&mut self, other: Self) {
        if other.is_empty() {
            return;
        }
        self.data.extend(other.data);
        functional::heapify(&mut self.data);
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the elements in heap order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap, returning the elements in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning the elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted.reverse();
        sorted
    }
}

impl<T: PartialOrd> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd> From<Vec<T>> for MaxHeap<T> {
    /// Heapifies `data` in place, O(n)
    fn from(mut data: Vec<T>) -> Self {
        functional::heapify(&mut data);
        Self { data }
    }
}

impl<T: PartialOrd> From<MaxHeap<T>> for Vec<T> {
    fn from(heap: MaxHeap<T>) -> Self {
        heap.into_vec()
    }
}

impl<T: PartialOrd> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: PartialOrd> Extend<T> for MaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: PartialOrd> Heap<T> for MaxHeap<T> {
    fn new() -> Self {
        MaxHeap::new()
    }

    fn is_empty(&self) -> bool {
        MaxHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        MaxHeap::len(self)
    }

    fn push(&mut self, item: T) {
        MaxHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        MaxHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        MaxHeap::pop(self)
    }

    fn merge(&mut self, other: Self) {
        MaxHeap::merge(self, other)
    }
}
