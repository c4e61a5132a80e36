//! Output types for pruning operations.
//!
//! ## Purpose
//!
//! This module defines [`PruneResult`], the materialized outcome of a pruning
//! run through the builder API: the retained samples, which positions they
//! came from, and how the search scored them.
//!
//! ## Design notes
//!
//! * **Owned**: Retained values are copied out, so the result does not borrow
//!   the input (use `prune_uniform_exhaustive` for a borrowing view).
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `x.len() == kept_indices.len() == output size`.
//! * `kept_indices` and `removed_indices` are sorted and partition `0..input_size`.
//! * The first and last input positions are always kept.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// Outcome of a pruning run.
#[derive(Debug, Clone, PartialEq)]
pub struct PruneResult<T> {
    /// Retained samples, in input order.
    pub x: Vec<T>,

    /// Input positions of the retained samples.
    pub kept_indices: Vec<usize>,

    /// Input positions that were removed.
    pub removed_indices: Vec<usize>,

    /// Curvature score of the retained samples.
    pub score: T,

    /// Curvature score of the full input.
    pub input_score: T,

    /// Number of candidate removal sets evaluated.
    pub candidates_evaluated: usize,
}

impl<T: Float> PruneResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of retained samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether no samples were retained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Number of samples in the original input.
    #[inline]
    pub fn input_size(&self) -> usize {
        self.kept_indices.len() + self.removed_indices.len()
    }

    /// Whether any sample was removed.
    #[inline]
    pub fn is_pruned(&self) -> bool {
        !self.removed_indices.is_empty()
    }

    /// Fraction of the input that was retained, in `(0, 1]`.
    pub fn retained_fraction(&self) -> T {
        let total = self.input_size();
        if total == 0 {
            return T::zero();
        }
        T::from(self.len()).unwrap_or_else(T::zero) / T::from(total).unwrap_or_else(T::one)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for PruneResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Input points:  {}", self.input_size())?;
        writeln!(f, "  Output points: {}", self.len())?;
        writeln!(f, "  Candidates:    {}", self.candidates_evaluated)?;
        writeln!(f, "  Input score:   {}", self.input_score)?;
        writeln!(f, "  Score:         {}", self.score)?;
        writeln!(f)?;

        writeln!(f, "Retained Data:")?;
        writeln!(f, "{:>8} {:>12}", "Index", "X")?;
        writeln!(f, "{:-<width$}", "", width = 21)?;

        // Show first 10 and last 10 if more than 20 points
        let n = self.x.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_row = 0;
        for (i, &row) in rows_to_show.iter().enumerate() {
            if i > 0 && row != prev_row + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_row = row;

            writeln!(f, "{:>8} {:>12.6}", self.kept_indices[row], self.x[row])?;
        }

        Ok(())
    }
}
