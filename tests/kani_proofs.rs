//! Kani verification proofs for the heap primitives
//!
//! Kani is AWS's model checker for Rust. It verifies properties by checking
//! all possible executions up to the given unwinding bounds.
//!
//! To run these proofs:
//!   cargo kani

#[cfg(kani)]
use rust_maxheap::{heapify, is_heap, pop, push, push_pop, replace, HeapError};

/// Proof that push always increments the length and keeps the heap property
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_push_increments_len() {
    let mut heap: Vec<u8> = vec![kani::any(), kani::any(), kani::any()];
    heapify(&mut heap);
    let initial_len = heap.len();

    push(&mut heap, kani::any());

    assert!(heap.len() == initial_len + 1);
    assert!(is_heap(&heap));
}

/// Proof that pop returns the maximum and decrements the length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_pop_returns_max() {
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    let c: u8 = kani::any();
    let mut heap = vec![a, b, c];
    heapify(&mut heap);

    let top = pop(&mut heap).unwrap();

    assert!(top >= a && top >= b && top >= c);
    assert!(heap.len() == 2);
    assert!(is_heap(&heap));
}

/// Proof that pop and replace reject an empty heap without mutating it
#[cfg(kani)]
#[kani::proof]
fn verify_empty_heap_errors() {
    let mut heap: Vec<u8> = Vec::new();

    assert!(pop(&mut heap) == Err(HeapError::EmptyPop));
    assert!(replace(&mut heap, kani::any()) == Err(HeapError::EmptyReplace));
    assert!(heap.is_empty());
}

/// Proof that push_pop never leaves the heap larger or smaller
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_push_pop_preserves_len() {
    let mut heap: Vec<u8> = vec![kani::any(), kani::any(), kani::any(), kani::any()];
    heapify(&mut heap);
    let root = heap[0];
    let item: u8 = kani::any();

    let out = push_pop(&mut heap, item);

    assert!(heap.len() == 4);
    assert!(out >= item);
    assert!(out == if item < root { root } else { item });
    assert!(is_heap(&heap));
}
