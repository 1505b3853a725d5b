//! In-place max-heap primitives
//!
//! These functions treat a caller-owned sequence as a binary max-heap, in the
//! style of a `heapq` module but with the largest element first. The caller
//! keeps ownership of the sequence; the functions only rearrange elements and
//! append or remove at the end.
//!
//! Every primitive comes in two forms:
//!
//! - a plain form (`push`, `pop`, ...) ordering elements by `PartialOrd`
//! - a `_by` form taking any [`Compare`], whose errors are propagated
//!
//! When a comparison fails the operation stops immediately. No element is lost
//! or duplicated, but the heap property may be broken until the sequence is
//! heapified again.
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `heapify`   | O(n)       |
//! | `push`      | O(log n)   |
//! | `pop`       | O(log n)   |
//! | `push_pop`  | O(log n), O(1) when `item` is not below the maximum |
//! | `replace`   | O(log n)   |
//! | `peek`      | O(1)       |
//! | `is_heap`   | O(n)       |
//!
//! # Example
//!
//! ```rust
//! let mut heap = vec![5, 1, 9, 3, 7];
//! rust_maxheap::heapify(&mut heap);
//!
//! assert_eq!(rust_maxheap::peek(&heap), Some(&9));
//! assert_eq!(rust_maxheap::push_pop(&mut heap, 12), 12);
//! assert_eq!(rust_maxheap::replace(&mut heap, 2), Ok(9));
//! assert_eq!(rust_maxheap::pop(&mut heap), Ok(7));
//! ```

use std::convert::Infallible;

use crate::compare::Natural;
use crate::sift::{left, sift_down, sift_up};
use crate::traits::{Compare, HeapError, HeapStorage};

#[inline]
fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Rearranges `heap` into a valid max-heap, in place, in O(n).
pub fn heapify<S>(heap: &mut S)
where
    S: HeapStorage + ?Sized,
    S::Item: PartialOrd,
{
    infallible(heapify_by(heap, &mut Natural))
}

/// Rearranges `heap` into a valid max-heap using `cmp`.
///
/// Sifts down every parent position, from the last one back to the root.
pub fn heapify_by<S, C>(heap: &mut S, cmp: &mut C) -> Result<(), C::Error>
where
    S: HeapStorage + ?Sized,
    C: Compare<S::Item> + ?Sized,
{
    let n = heap.len();
    for pos in (0..n / 2).rev() {
        if let Err(err) = sift_down(heap, pos, cmp) {
            log::debug!("heapify of {} elements aborted at position {}", n, pos);
            return Err(err);
        }
    }
    Ok(())
}

/// Pushes `item` onto `heap`.
pub fn push<S>(heap: &mut S, item: S::Item)
where
    S: HeapStorage + ?Sized,
    S::Item: PartialOrd,
{
    infallible(push_by(heap, item, &mut Natural))
}

/// Pushes `item` onto `heap` using `cmp`.
///
/// The item is appended before any comparison is made, so it stays in the
/// sequence even if the sift fails.
pub fn push_by<S, C>(heap: &mut S, item: S::Item, cmp: &mut C) -> Result<(), C::Error>
where
    S: HeapStorage + ?Sized,
    C: Compare<S::Item> + ?Sized,
{
    heap.push(item);
    let last = heap.len() - 1;
    sift_up(heap, last, cmp)
}

/// Removes and returns the largest element of `heap`.
///
/// # Errors
/// Returns [`HeapError::EmptyPop`] if `heap` is empty.
pub fn pop<S>(heap: &mut S) -> Result<S::Item, HeapError>
where
    S: HeapStorage + ?Sized,
    S::Item: PartialOrd,
{
    pop_by(heap, &mut Natural)
}

/// Removes and returns the largest element of `heap` using `cmp`.
///
/// A single-element heap is emptied without any comparison.
///
/// # Errors
/// Returns [`HeapError::EmptyPop`] if `heap` is empty, or
/// [`HeapError::Compare`] if the sift fails. In the latter case the maximum has
/// already been removed from the sequence and is dropped.
pub fn pop_by<S, C>(heap: &mut S, cmp: &mut C) -> Result<S::Item, HeapError<C::Error>>
where
    S: HeapStorage + ?Sized,
    C: Compare<S::Item> + ?Sized,
{
    let Some(last) = heap.pop() else {
        log::debug!("pop from empty heap");
        return Err(HeapError::EmptyPop);
    };
    if heap.is_empty() {
        return Ok(last);
    }

    // The former last element takes the root's place and sinks
    let top = std::mem::replace(heap.get_mut(0), last);
    sift_down(heap, 0, cmp)?;
    Ok(top)
}

/// Pushes `item` and then pops the largest element, in one step.
///
/// If the heap is empty or `item` is not smaller than the current maximum,
/// `item` is returned straight back and the heap is untouched.
pub fn push_pop<S>(heap: &mut S, item: S::Item) -> S::Item
where
    S: HeapStorage + ?Sized,
    S::Item: PartialOrd,
{
    infallible(push_pop_by(heap, item, &mut Natural))
}

/// Pushes `item` and then pops the largest element using `cmp`.
///
/// # Errors
/// Propagates a comparison failure. If the very first comparison fails,
/// `item` never entered the heap and is dropped; otherwise it sits at the
/// position the sift reached.
pub fn push_pop_by<S, C>(heap: &mut S, item: S::Item, cmp: &mut C) -> Result<S::Item, C::Error>
where
    S: HeapStorage + ?Sized,
    C: Compare<S::Item> + ?Sized,
{
    if heap.is_empty() || !cmp.lt(&item, heap.get(0))? {
        log::trace!("push_pop fast path, heap of {} left untouched", heap.len());
        return Ok(item);
    }

    let top = std::mem::replace(heap.get_mut(0), item);
    sift_down(heap, 0, cmp)?;
    Ok(top)
}

/// Pops the largest element and then pushes `item`, in one step.
///
/// Unlike [`push_pop`], the swap always happens, so the returned value may be
/// larger than `item`.
///
/// # Errors
/// Returns [`HeapError::EmptyReplace`] if `heap` is empty; `item` is dropped.
pub fn replace<S>(heap: &mut S, item: S::Item) -> Result<S::Item, HeapError>
where
    S: HeapStorage + ?Sized,
    S::Item: PartialOrd,
{
    replace_by(heap, item, &mut Natural)
}

/// Pops the largest element and then pushes `item` using `cmp`.
///
/// # Errors
/// Returns [`HeapError::EmptyReplace`] if `heap` is empty, or
/// [`HeapError::Compare`] if the sift fails, in which case the old maximum is
/// dropped and `item` stays in the sequence.
pub fn replace_by<S, C>(
    heap: &mut S,
    item: S::Item,
    cmp: &mut C,
) -> Result<S::Item, HeapError<C::Error>>
where
    S: HeapStorage + ?Sized,
    C: Compare<S::Item> + ?Sized,
{
    if heap.is_empty() {
        log::debug!("replace on empty heap");
        return Err(HeapError::EmptyReplace);
    }

    let top = std::mem::replace(heap.get_mut(0), item);
    sift_down(heap, 0, cmp)?;
    Ok(top)
}

/// Returns the largest element of `heap` without removing it.
pub fn peek<S>(heap: &S) -> Option<&S::Item>
where
    S: HeapStorage + ?Sized,
{
    if heap.is_empty() {
        None
    } else {
        Some(heap.get(0))
    }
}

/// Returns true if `heap` satisfies the max-heap property.
pub fn is_heap<S>(heap: &S) -> bool
where
    S: HeapStorage + ?Sized,
    S::Item: PartialOrd,
{
    infallible(is_heap_by(heap, &mut Natural))
}

/// Returns true if `heap` satisfies the max-heap property under `cmp`.
///
/// A parent violates the property only when it is strictly less than one of
/// its children.
pub fn is_heap_by<S, C>(heap: &S, cmp: &mut C) -> Result<bool, C::Error>
where
    S: HeapStorage + ?Sized,
    C: Compare<S::Item> + ?Sized,
{
    let n = heap.len();
    for pos in 0..n / 2 {
        let child = left(pos);
        if cmp.lt(heap.get(pos), heap.get(child))? {
            return Ok(false);
        }
        if child + 1 < n && cmp.lt(heap.get(pos), heap.get(child + 1))? {
            return Ok(false);
        }
    }
    Ok(true)
}
