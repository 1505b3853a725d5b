//! Common traits for the max-heap engine
//!
//! This module provides the seams the heap primitives are written against:
//!
//! - [`Compare`]: a fallible comparison used for every ordering decision
//! - [`HeapStorage`]: the growable, randomly indexable sequence a heap lives in
//! - [`Heap`]: an owning heap interface, implemented by [`MaxHeap`](crate::MaxHeap)
//!
//! and the [`HeapError`] type returned by the primitives.

use std::convert::Infallible;
use std::fmt;

/// Error type for heap operations
///
/// `E` is the error type of the comparison in use. With the natural
/// `PartialOrd` ordering it is [`Infallible`], so only the empty-heap
/// variants can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError<E = Infallible> {
    /// `pop` was called on an empty heap
    EmptyPop,
    /// `replace` was called on an empty heap
    EmptyReplace,
    /// The comparison itself failed; the sift was abandoned part-way
    Compare(E),
}

impl<E> HeapError<E> {
    /// Returns true for the empty-heap variants
    pub fn is_empty_heap(&self) -> bool {
        matches!(self, HeapError::EmptyPop | HeapError::EmptyReplace)
    }
}

impl<E> From<E> for HeapError<E> {
    fn from(err: E) -> Self {
        HeapError::Compare(err)
    }
}

impl<E: fmt::Display> fmt::Display for HeapError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyPop => write!(f, "pop from empty heap"),
            HeapError::EmptyReplace => write!(f, "replace on empty heap"),
            HeapError::Compare(err) => write!(f, "comparison failed: {}", err),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for HeapError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeapError::Compare(err) => Some(err),
            _ => None,
        }
    }
}

/// A comparison that may fail
///
/// The engine only ever asks three questions of a comparison: `a < b`,
/// `a <= b` and `a > b`. It never assumes equality or hashing are available.
/// An `Err` aborts the operation in progress and is handed back to the caller
/// unchanged.
///
/// Implementations must not touch the heap being sifted.
pub trait Compare<T: ?Sized> {
    /// Error produced when two elements cannot be compared
    type Error;

    /// Returns whether `a < b`
    fn lt(&mut self, a: &T, b: &T) -> Result<bool, Self::Error>;

    /// Returns whether `a <= b`
    fn le(&mut self, a: &T, b: &T) -> Result<bool, Self::Error>;

    /// Returns whether `a > b`
    fn gt(&mut self, a: &T, b: &T) -> Result<bool, Self::Error>;
}

impl<T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for &mut C {
    type Error = C::Error;

    fn lt(&mut self, a: &T, b: &T) -> Result<bool, Self::Error> {
        (**self).lt(a, b)
    }

    fn le(&mut self, a: &T, b: &T) -> Result<bool, Self::Error> {
        (**self).le(a, b)
    }

    fn gt(&mut self, a: &T, b: &T) -> Result<bool, Self::Error> {
        (**self).gt(a, b)
    }
}

/// A growable sequence that a heap can be laid out in
///
/// Position in the sequence is the tree structure: the children of `i` live
/// at `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`. The engine only
/// rearranges elements and appends or removes at the end.
///
/// `get`, `get_mut` and `swap` panic when an index is out of bounds.
pub trait HeapStorage {
    /// Element type stored in the sequence
    type Item;

    /// Returns the number of elements
    fn len(&self) -> usize;

    /// Returns true if the sequence holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`
    fn get(&self, index: usize) -> &Self::Item;

    /// Returns the element at `index` mutably
    fn get_mut(&mut self, index: usize) -> &mut Self::Item;

    /// Exchanges the elements at `a` and `b`
    fn swap(&mut self, a: usize, b: usize);

    /// Appends an element at the end
    fn push(&mut self, item: Self::Item);

    /// Removes the last element
    fn pop(&mut self) -> Option<Self::Item>;
}

/// Owning max-heap interface
///
/// Modeled on `std::collections::BinaryHeap`: the element is its own
/// priority and the largest element comes out first.
///
/// # Example
///
/// ```rust
/// use rust_maxheap::{Heap, MaxHeap};
///
/// let mut heap = MaxHeap::new();
/// heap.push(3);
/// heap.push(9);
/// heap.push(5);
///
/// assert_eq!(heap.peek(), Some(&9));
/// assert_eq!(heap.pop(), Some(9));
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the largest element without removing it
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the largest element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self);
}
