//! Exhaustive curvature-minimizing removal search.
//!
//! ## Purpose
//!
//! This module implements the brute-force search behind uniform pruning: it
//! enumerates every way of removing a fixed number of interior points from a
//! sequence, scores each candidate with the curvature score, and keeps the
//! best one.
//!
//! ## Design notes
//!
//! * **Endpoint protection**: Only interior indices `1..=n-2` are candidates;
//!   combinations are drawn over `0..n-2` and shifted up by one.
//! * **Zero-copy candidates**: Each candidate is scored through a masked walk
//!   over the borrowed input; only the running best is stored.
//! * **Strict improvement**: A candidate replaces the best only when its score
//!   is strictly lower, so the first minimum in lexicographic order wins.
//! * **Partitioning**: The space splits by the leading removed index. Each
//!   partition is a contiguous run of the lexicographic enumeration, so
//!   merging partition outcomes in order reproduces the sequential result.
//!
//! ## Key concepts
//!
//! * **Search pass**: Full sequential enumeration, partition by partition ([`search_pass`]).
//! * **Partition**: All candidates sharing a leading removed index ([`search_partition`]).
//! * **Merge**: Order-preserving minimum reduction ([`SearchOutcome::merge`]).
//!
//! ## Invariants
//!
//! * Candidates always keep the first and last sample.
//! * Every candidate removes exactly `remove` points.
//! * `C(n - 2, remove)` candidates are evaluated by a full pass.
//!
//! ## Non-goals
//!
//! * This module does not validate sizes (handled by `validator`).
//! * This module does not prune analytically; cost is exponential in `remove`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::Range;
use log::{debug, trace};
use num_traits::Float;

// Internal dependencies
use crate::math::curvature::score;
use crate::primitives::combinations::next_combination;
use crate::primitives::masked::Iter;

// ============================================================================
// Search Results
// ============================================================================

/// A scored removal set.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<T> {
    /// Sorted indices removed from the input.
    pub removed: Vec<usize>,

    /// Curvature score of the retained points.
    pub score: T,
}

/// Best candidate found over some range of the enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<T> {
    /// Lowest-scoring candidate (earliest on ties), `None` if nothing was evaluated.
    pub best: Option<Candidate<T>>,

    /// Number of candidates scored.
    pub evaluated: usize,
}

impl<T: Float> Default for SearchOutcome<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Float> SearchOutcome<T> {
    /// Outcome of a search that evaluated nothing.
    pub fn empty() -> Self {
        Self {
            best: None,
            evaluated: 0,
        }
    }

    /// Combine with the outcome of the range that follows this one.
    ///
    /// `later` wins only with a strictly lower score, so folding partition
    /// outcomes left to right keeps the earliest minimum.
    pub fn merge(self, later: Self) -> Self {
        let evaluated = self.evaluated + later.evaluated;
        let best = match (self.best, later.best) {
            (Some(earlier), Some(later)) => {
                if later.score < earlier.score {
                    Some(later)
                } else {
                    Some(earlier)
                }
            }
            (earlier, None) => earlier,
            (None, later) => later,
        };

        Self { best, evaluated }
    }

    // Record a scored candidate, replacing the best only on strict improvement.
    fn offer(&mut self, removed: &[usize], candidate_score: T) {
        self.evaluated += 1;
        match self.best.as_mut() {
            Some(best) if candidate_score < best.score => {
                trace!(
                    "improved: score={} removed={:?}",
                    candidate_score.to_f64().unwrap_or(f64::NAN),
                    removed
                );
                best.removed.clear();
                best.removed.extend_from_slice(removed);
                best.score = candidate_score;
            }
            Some(_) => {}
            None => {
                self.best = Some(Candidate {
                    removed: removed.to_vec(),
                    score: candidate_score,
                });
            }
        }
    }
}

// ============================================================================
// Search Passes
// ============================================================================

/// Evaluate every way of removing `remove` interior points from `x`.
///
/// Requires `x.len() >= 2` and `remove <= x.len() - 2`.
pub fn search_pass<T: Float>(x: &[T], remove: usize) -> SearchOutcome<T> {
    let interior = interior_len(x);
    debug_assert!(remove <= interior, "search_pass: remove exceeds interior");
    debug!(
        "exhaustive search: n={} remove={} interior={}",
        x.len(),
        remove,
        interior
    );

    // Partitions tile the lexicographic enumeration in order
    let outcome = leading_values(x.len(), remove)
        .map(|leading| search_partition(x, remove, leading))
        .fold(SearchOutcome::empty(), SearchOutcome::merge);

    debug!(
        "exhaustive search done: evaluated={} best={:?}",
        outcome.evaluated,
        outcome
            .best
            .as_ref()
            .map(|b| b.score.to_f64().unwrap_or(f64::NAN))
    );
    outcome
}

/// Evaluate the candidates whose first removed interior index is `leading`.
///
/// Interior indices are 0-based over `1..=n-2` (so `leading = 0` means the
/// candidate removes `x[1]`). `leading` must lie in [`leading_values`].
pub fn search_partition<T: Float>(x: &[T], remove: usize, leading: usize) -> SearchOutcome<T> {
    let interior = interior_len(x);

    if remove == 0 {
        debug_assert_eq!(leading, 0, "search_partition: single partition when remove = 0");
        return run(x, &mut [], 0, interior);
    }

    debug_assert!(
        leading + remove <= interior,
        "search_partition: leading index out of range"
    );
    let mut combination: Vec<usize> = (leading..leading + remove).collect();
    run(x, &mut combination, 1, interior)
}

/// Leading interior indices that partition the search space, in enumeration order.
///
/// When nothing is removed there is a single partition holding the empty
/// candidate.
pub fn leading_values(n: usize, remove: usize) -> Range<usize> {
    let interior = n.saturating_sub(2);
    if remove == 0 {
        0..1
    } else {
        0..(interior + 1).saturating_sub(remove)
    }
}

#[inline]
fn interior_len<T>(x: &[T]) -> usize {
    x.len().saturating_sub(2)
}

// Score combinations starting at `combination`, advancing only positions
// `fixed..` so that positions before `fixed` stay pinned.
fn run<T: Float>(
    x: &[T],
    combination: &mut [usize],
    fixed: usize,
    interior: usize,
) -> SearchOutcome<T> {
    let mut outcome = SearchOutcome::empty();
    let mut removed = vec![0usize; combination.len()];

    loop {
        for (slot, &c) in removed.iter_mut().zip(combination.iter()) {
            *slot = c + 1;
        }

        let candidate_score = score(Iter::over(x, &removed));
        outcome.offer(&removed, candidate_score);

        if !next_combination(&mut combination[fixed..], interior) {
            break;
        }
    }

    outcome
}
