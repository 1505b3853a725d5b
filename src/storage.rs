//! Sequence backends for in-place heaps
//!
//! [`HeapStorage`] is implemented for:
//!
//! - `Vec<T>`: the default, and what [`MaxHeap`](crate::MaxHeap) owns
//! - `VecDeque<T>`: the back of the deque is the end of the heap
//! - `SmallVec<A>`: inline storage for small heaps (requires the `smallvec` feature)
//!
//! # Example
//!
//! ```rust
//! use std::collections::VecDeque;
//!
//! let mut heap: VecDeque<i32> = VecDeque::from(vec![4, 8, 1]);
//! rust_maxheap::heapify(&mut heap);
//! rust_maxheap::push(&mut heap, 6);
//! assert_eq!(rust_maxheap::pop(&mut heap), Ok(8));
//! assert_eq!(rust_maxheap::pop(&mut heap), Ok(6));
//! ```

use std::collections::VecDeque;

#[cfg(feature = "smallvec")]
use smallvec::{Array, SmallVec};

use crate::traits::HeapStorage;

impl<T> HeapStorage for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    #[inline]
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
}

impl<T> HeapStorage for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }

    #[inline]
    fn push(&mut self, item: T) {
        self.push_back(item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }
}

#[cfg(feature = "smallvec")]
impl<A: Array> HeapStorage for SmallVec<A> {
    type Item = A::Item;

    #[inline]
    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> &A::Item {
        &self[index]
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> &mut A::Item {
        &mut self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    #[inline]
    fn push(&mut self, item: A::Item) {
        SmallVec::push(self, item);
    }

    #[inline]
    fn pop(&mut self) -> Option<A::Item> {
        SmallVec::pop(self)
    }
}
