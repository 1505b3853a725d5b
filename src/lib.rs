//! Max-first binary heap primitives for Rust
//!
//! This crate treats a caller-owned, growable sequence as a binary max-heap and
//! provides the usual heap primitives over it, with the largest element first:
//!
//! - [`heapify`]: rearrange an arbitrary sequence into a heap in O(n)
//! - [`push`] / [`pop`]: insert, and remove the maximum, in O(log n)
//! - [`push_pop`]: push then pop, returning the pushed item directly when it
//!   would come straight back out
//! - [`replace`]: pop then push, unconditionally
//! - [`peek`] and [`is_heap`]: inspection helpers
//!
//! The tree is implicit: the children of index `i` live at `2i + 1` and
//! `2i + 2`. Any [`HeapStorage`] can hold a heap (`Vec`, `VecDeque`, and
//! `SmallVec` with the `smallvec` feature), and each primitive has a `_by`
//! variant taking a fallible [`Compare`] whose errors are propagated.
//!
//! For an owning wrapper, see [`MaxHeap`].
//!
//! # Example
//!
//! ```rust
//! let mut heap = vec![3, 1, 6, 5, 2, 4];
//! rust_maxheap::heapify(&mut heap);
//!
//! let mut out = Vec::new();
//! while let Ok(x) = rust_maxheap::pop(&mut heap) {
//!     out.push(x);
//! }
//! assert_eq!(out, vec![6, 5, 4, 3, 2, 1]);
//! ```
//!
//! Only growable sequences are accepted; a fixed-size array is rejected at
//! compile time:
//!
//! ```compile_fail
//! let mut fixed = [1, 2, 3];
//! rust_maxheap::push(&mut fixed, 4);
//! ```
//!
//! # Concurrency
//!
//! The primitives take `&mut` access to the sequence for the whole call, so no
//! two operations can run on the same heap at once. Comparisons must not try to
//! reach the heap being sifted.

pub mod compare;
pub mod functional;
pub mod max_heap;
pub mod sift;
pub mod storage;
pub mod traits;

// Re-export the main API for convenience
pub use compare::{CompareFn, Natural};
pub use functional::{
    heapify, heapify_by, is_heap, is_heap_by, peek, pop, pop_by, push, push_by, push_pop,
    push_pop_by, replace, replace_by,
};
pub use max_heap::MaxHeap;
pub use traits::{Compare, Heap, HeapError, HeapStorage};
