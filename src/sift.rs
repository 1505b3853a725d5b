//! Sift routines that restore the max-heap property
//!
//! Both routines move a single out-of-place element along one root-to-leaf
//! path, so each is O(log n). Elements are relocated with swaps: if the
//! comparison fails part-way, the sift stops where it is and every element is
//! still present exactly once, although the heap property may no longer hold.

use crate::traits::{Compare, HeapStorage};

/// Index of the parent of `pos`; `pos` must be non-zero
#[inline]
pub(crate) fn parent(pos: usize) -> usize {
    (pos - 1) / 2
}

/// Index of the left child of `pos`
#[inline]
pub(crate) fn left(pos: usize) -> usize {
    2 * pos + 1
}

/// Moves the element at `pos` towards the root until its parent is not
/// smaller than it.
///
/// Assumes every other element already satisfies the heap property, which is
/// the situation right after appending to a valid heap.
///
/// # Panics
/// Panics if `pos` is out of bounds.
pub fn sift_up<S, C>(heap: &mut S, mut pos: usize, cmp: &mut C) -> Result<(), C::Error>
where
    S: HeapStorage + ?Sized,
    C: Compare<S::Item> + ?Sized,
{
    assert!(pos < heap.len(), "sift_up position out of bounds");

    while pos > 0 {
        let parent = parent(pos);
        if !cmp.gt(heap.get(pos), heap.get(parent))? {
            break;
        }
        heap.swap(pos, parent);
        pos = parent;
    }
    Ok(())
}

/// Moves the element at `pos` towards the leaves until neither child is
/// larger than it.
///
/// Assumes both subtrees below `pos` already satisfy the heap property. The
/// right child is only preferred over the left when it is strictly greater, so
/// equal children promote the left one. A `pos` with no children (including
/// one past the end) is left alone.
pub fn sift_down<S, C>(heap: &mut S, mut pos: usize, cmp: &mut C) -> Result<(), C::Error>
where
    S: HeapStorage + ?Sized,
    C: Compare<S::Item> + ?Sized,
{
    let end = heap.len();
    // Positions at or past end / 2 have no children
    if pos >= end / 2 {
        return Ok(());
    }
    let mut child = left(pos);

    while child < end {
        let right = child + 1;
        if right < end && cmp.gt(heap.get(right), heap.get(child))? {
            child = right;
        }
        if cmp.le(heap.get(child), heap.get(pos))? {
            break;
        }
        heap.swap(pos, child);
        pos = child;
        child = left(pos);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{CompareFn, Natural};
    use std::cmp::Ordering;

    #[test]
    fn test_index_arithmetic() {
        assert_eq!(left(0), 1);
        assert_eq!(left(0) + 1, 2);
        assert_eq!(left(3), 7);
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(7), 3);
        assert_eq!(parent(8), 3);
    }

    #[test]
    fn test_sift_up_moves_to_root() {
        let mut heap = vec![10, 5, 3, 12];
        sift_up(&mut heap, 3, &mut Natural).unwrap();
        assert_eq!(heap, vec![12, 10, 3, 5]);
    }

    #[test]
    fn test_sift_up_stops_on_equal_parent() {
        let mut heap = vec![10, 5, 3, 5];
        sift_up(&mut heap, 3, &mut Natural).unwrap();
        assert_eq!(heap, vec![10, 5, 3, 5]);
    }

    #[test]
    fn test_sift_down_from_root() {
        let mut heap = vec![1, 9, 8, 7, 6];
        sift_down(&mut heap, 0, &mut Natural).unwrap();
        assert_eq!(heap, vec![9, 7, 8, 1, 6]);
    }

    #[test]
    fn test_sift_down_leaf_is_noop() {
        let mut heap = vec![1, 9, 8];
        sift_down(&mut heap, 2, &mut Natural).unwrap();
        sift_down(&mut heap, 3, &mut Natural).unwrap();
        assert_eq!(heap, vec![1, 9, 8]);
    }

    #[test]
    fn test_sift_down_huge_position_is_noop() {
        let mut heap = vec![1, 9, 8];
        sift_down(&mut heap, usize::MAX, &mut Natural).unwrap();
        sift_down(&mut heap, usize::MAX / 2 + 1, &mut Natural).unwrap();
        assert_eq!(heap, vec![1, 9, 8]);
    }

    #[test]
    fn test_sift_down_only_left_child() {
        let mut heap = vec![1, 4];
        sift_down(&mut heap, 0, &mut Natural).unwrap();
        assert_eq!(heap, vec![4, 1]);
    }

    #[test]
    fn test_sift_down_prefers_left_on_tie() {
        // (key, tag); only keys are compared
        let mut heap = vec![(1, 'r'), (3, 'a'), (3, 'b')];
        let mut by_key = CompareFn::new(|a: &(i32, char), b: &(i32, char)| {
            Ok::<_, ()>(a.0.cmp(&b.0))
        });
        sift_down(&mut heap, 0, &mut by_key).unwrap();
        assert_eq!(heap, vec![(3, 'a'), (1, 'r'), (3, 'b')]);
    }

    #[test]
    fn test_sift_down_error_keeps_all_elements() {
        let mut calls = 0;
        let mut flaky = CompareFn::new(|a: &i32, b: &i32| {
            calls += 1;
            if calls > 2 {
                Err("comparison limit reached")
            } else {
                Ok(a.cmp(b))
            }
        });
        let mut heap = vec![0, 9, 8, 7, 6, 5, 4];
        let result = sift_down(&mut heap, 0, &mut flaky);
        assert_eq!(result, Err("comparison limit reached"));

        let mut sorted = heap.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 4, 5, 6, 7, 8, 9]);
        assert_eq!(heap[0], 9);
    }

    #[test]
    fn test_sift_up_error_propagates() {
        let mut never = CompareFn::new(|_: &i32, _: &i32| Err::<Ordering, _>(42));
        let mut heap = vec![1, 2];
        assert_eq!(sift_up(&mut heap, 1, &mut never), Err(42));
        assert_eq!(heap, vec![1, 2]);
    }
}
