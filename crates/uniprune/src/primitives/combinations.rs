//! Lazy lexicographic enumeration of index combinations.
//!
//! ## Purpose
//!
//! This module enumerates every strictly increasing index sequence of length
//! `k` drawn from `{0, …, n-1}`, lazily and in lexicographic order. It is the
//! candidate generator that drives the exhaustive pruning search.
//!
//! ## Design notes
//!
//! * **State machine**: The iterator holds the current combination and an
//!   exhausted flag; moving forward is a pure transition ([`next_combination`]).
//! * **Backtracking**: The transition scans right-to-left across as many
//!   positions as needed before refilling forward.
//! * **Restartable**: [`Combinations`] is a cheap descriptor; each call to
//!   [`Combinations::iter`] starts a fresh enumeration.
//! * **Tracing**: Exhaustion is reported through `log::trace!` only.
//!
//! ## Key concepts
//!
//! For `n = 4, k = 3` the enumeration is
//! `(0,1,2), (0,1,3), (0,2,3), (1,2,3)`.
//!
//! Position `p` of a length-`k` combination can never exceed `n - (k - p)`:
//! the positions after it need `k - p - 1` distinct larger values below `n`.
//!
//! ## Invariants
//!
//! * Every yielded combination has length `k` and is strictly increasing.
//! * All values lie in `[0, n)`.
//! * Each of the `C(n, k)` combinations is yielded exactly once.
//!
//! ## Non-goals
//!
//! * This module does not map combinations onto data (see `masked`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::iter::FusedIterator;
use log::trace;

// Internal dependencies
use crate::primitives::errors::PruneError;

// ============================================================================
// Combination Space
// ============================================================================

/// The set of all `selection_size`-element combinations of `0..collection_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combinations {
    collection_size: usize,
    selection_size: usize,
}

impl Combinations {
    /// Describe the combinations of `selection_size` indices out of `collection_size`.
    ///
    /// Fails with [`PruneError::InvalidSelectionSize`] when
    /// `selection_size > collection_size`.
    pub fn new(collection_size: usize, selection_size: usize) -> Result<Self, PruneError> {
        if selection_size > collection_size {
            return Err(PruneError::InvalidSelectionSize {
                selection_size,
                collection_size,
            });
        }

        Ok(Self {
            collection_size,
            selection_size,
        })
    }

    /// Number of indices available (`n`).
    #[inline]
    pub fn collection_size(&self) -> usize {
        self.collection_size
    }

    /// Number of indices per combination (`k`).
    #[inline]
    pub fn selection_size(&self) -> usize {
        self.selection_size
    }

    /// Total number of combinations, `C(n, k)`, or `None` if it overflows `usize`.
    #[inline]
    pub fn total(&self) -> Option<usize> {
        binomial(self.collection_size, self.selection_size)
    }

    /// Start a fresh enumeration at `(0, 1, …, k-1)`.
    pub fn iter(&self) -> CombinationIter {
        CombinationIter {
            combination: (0..self.selection_size).collect(),
            collection_size: self.collection_size,
            exhausted: false,
            remaining: self.total(),
        }
    }
}

impl IntoIterator for Combinations {
    type Item = Vec<usize>;
    type IntoIter = CombinationIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Combinations {
    type Item = Vec<usize>;
    type IntoIter = CombinationIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Iterator
// ============================================================================

/// Lazy iterator over combinations in lexicographic order.
#[derive(Debug, Clone)]
pub struct CombinationIter {
    // Combination to yield next (meaningless once exhausted).
    combination: Vec<usize>,

    collection_size: usize,

    exhausted: bool,

    // Combinations left to yield, when C(n, k) fits in usize.
    remaining: Option<usize>,
}

impl CombinationIter {
    /// Peek at the combination the next call to `next` will yield.
    pub fn current(&self) -> Option<&[usize]> {
        if self.exhausted {
            None
        } else {
            Some(&self.combination)
        }
    }

    /// Whether the enumeration has finished.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl Iterator for CombinationIter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let current = self.combination.clone();
        if !next_combination(&mut self.combination, self.collection_size) {
            self.exhausted = true;
            trace!(
                "combinations exhausted: n={} k={}",
                self.collection_size,
                self.combination.len()
            );
        }
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for CombinationIter {}

// ============================================================================
// Transition
// ============================================================================

/// Advance `combination` in place to its lexicographic successor over `0..n`.
///
/// `combination` must be strictly increasing with every value below `n`.
/// Finds the right-most position `p` that can still be raised (its ceiling is
/// `n - (k - p)`), raises it by one, and refills every later position with the
/// smallest strictly increasing values above it. Returns `false`, leaving the
/// slice untouched, when `combination` is already the last one.
///
/// Because values are strictly increasing, raising position `p` can never
/// collide with an earlier position.
pub fn next_combination(combination: &mut [usize], n: usize) -> bool {
    let k = combination.len();

    for p in (0..k).rev() {
        let ceiling = match n.checked_sub(k - p) {
            Some(ceiling) => ceiling,
            None => return false,
        };

        if combination[p] < ceiling {
            let raised = combination[p] + 1;
            combination[p] = raised;
            for (offset, slot) in combination[p + 1..].iter_mut().enumerate() {
                *slot = raised + 1 + offset;
            }
            return true;
        }
    }

    false
}

/// Binomial coefficient `C(n, k)`, or `None` if it does not fit in `usize`.
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }

    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) is divisible by (i + 1) at every step
        acc = acc.checked_mul((n - i) as u128)? / (i as u128 + 1);
    }

    usize::try_from(acc).ok()
}
