//! Comparators for the heap primitives
//!
//! - [`Natural`]: the element type's own `PartialOrd`, never fails
//! - [`CompareFn`]: a caller-supplied closure returning `Result<Ordering, E>`
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use rust_maxheap::compare::CompareFn;
//! use rust_maxheap::{heapify_by, pop_by};
//!
//! // Order strings by length, refusing to compare empty strings
//! let mut by_len = CompareFn::new(|a: &&str, b: &&str| {
//!     if a.is_empty() || b.is_empty() {
//!         Err("empty string")
//!     } else {
//!         Ok(a.len().cmp(&b.len()))
//!     }
//! });
//!
//! let mut words = vec!["ab", "abcd", "a", "abc"];
//! heapify_by(&mut words, &mut by_len).unwrap();
//! assert_eq!(pop_by(&mut words, &mut by_len), Ok("abcd"));
//! ```

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;

use crate::traits::Compare;

/// Compares elements with their `PartialOrd` implementation
///
/// Pairs that are not comparable (such as a NaN float) answer `false` to every
/// question, exactly as the `<`, `<=` and `>` operators do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: PartialOrd + ?Sized> Compare<T> for Natural {
    type Error = Infallible;

    #[inline]
    fn lt(&mut self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok(a < b)
    }

    #[inline]
    fn le(&mut self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok(a <= b)
    }

    #[inline]
    fn gt(&mut self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok(a > b)
    }
}

/// Compares elements with a fallible closure
///
/// The closure returns the [`Ordering`] of its two arguments; `lt`, `le` and
/// `gt` are derived from it.
#[derive(Clone, Copy)]
pub struct CompareFn<F> {
    f: F,
}

impl<F> CompareFn<F> {
    /// Wraps a closure of the form `FnMut(&T, &T) -> Result<Ordering, E>`
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Returns the wrapped closure
    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<F> fmt::Debug for CompareFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompareFn").finish_non_exhaustive()
    }
}

impl<T, E, F> Compare<T> for CompareFn<F>
where
    T: ?Sized,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    type Error = E;

    fn lt(&mut self, a: &T, b: &T) -> Result<bool, E> {
        (self.f)(a, b).map(|ord| ord == Ordering::Less)
    }

    fn le(&mut self, a: &T, b: &T) -> Result<bool, E> {
        (self.f)(a, b).map(|ord| ord != Ordering::Greater)
    }

    fn gt(&mut self, a: &T, b: &T) -> Result<bool, E> {
        (self.f)(a, b).map(|ord| ord == Ordering::Greater)
    }
}
