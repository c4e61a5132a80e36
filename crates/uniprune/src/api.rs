//! High-level API for uniform pruning.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the three primitive
//! operations ([`combinations`], [`score`], [`prune_uniform_exhaustive`]) and
//! a fluent builder for configuring a pruning run and choosing a strategy.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; only `output_size` is required.
//! * **Polymorphic**: Marker types transition to specialized strategy builders.
//! * **Validated**: Configuration is validated in `build()`, data in `prune()`.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PrunerBuilder`] via `Pruner::new()`.
//! 2. Chain configuration methods (`.output_size()`, `.max_candidates()`).
//! 3. Select a strategy via `.adapter(Exhaustive)` to get an execution builder.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::exhaustive::ExhaustivePrunerBuilder;
use crate::algorithms::exhaustive::search_pass;
use crate::engine::executor::SearchPassFn;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::exhaustive::ExhaustivePruner;
pub use crate::engine::output::PruneResult;
pub use crate::math::curvature::{score, second_differences};
pub use crate::primitives::combinations::{CombinationIter, Combinations};
pub use crate::primitives::errors::PruneError;
pub use crate::primitives::masked::{Iter as MaskedIter, MaskedView};

/// Marker types for selecting pruning strategies.
#[allow(non_snake_case)]
pub mod Strategy {
    pub use super::Exhaustive;
}

// ============================================================================
// Primitive Operations
// ============================================================================

/// All `k`-element increasing index combinations of `0..n`, in lexicographic order.
///
/// Fails with [`PruneError::InvalidSelectionSize`] when `k > n`.
///
/// ```rust
/// let all: Vec<Vec<usize>> = uniprune::combinations(4, 3)?.into_iter().collect();
/// assert_eq!(all, vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3], vec![1, 2, 3]]);
/// # Ok::<(), uniprune::prelude::PruneError>(())
/// ```
pub fn combinations(n: usize, k: usize) -> Result<Combinations, PruneError> {
    Combinations::new(n, k)
}

/// Keep the `output_size` samples of `input` whose spacing is closest to uniform.
///
/// The first and last samples are always kept. Every way of removing
/// `input.len() - output_size` interior samples is scored with [`score`];
/// the lowest score wins, and on ties the removal set enumerated first in
/// lexicographic order wins. The returned view borrows `input`.
///
/// Fails with [`PruneError::InvalidOutputSize`] when `input.len() < 2`,
/// `output_size < 2` or `output_size > input.len()`.
///
/// ```rust
/// let input = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
/// let kept = uniprune::prune_uniform_exhaustive(&input, 4)?;
/// assert_eq!(kept, [1.0, 3.0, 5.0, 7.0]);
/// # Ok::<(), uniprune::prelude::PruneError>(())
/// ```
pub fn prune_uniform_exhaustive<T: Float>(
    input: &[T],
    output_size: usize,
) -> Result<MaskedView<'_, T>, PruneError> {
    Validator::validate_output_size(input.len(), output_size)?;

    let outcome = search_pass(input, input.len() - output_size);
    let removed = outcome.best.map(|best| best.removed).unwrap_or_default();

    Ok(MaskedView::from_sorted(input, removed))
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring pruning runs.
#[derive(Debug, Clone)]
pub struct PrunerBuilder<T> {
    /// Number of samples to retain.
    pub output_size: Option<usize>,

    /// Upper bound on the number of candidates to evaluate.
    pub max_candidates: Option<usize>,

    // ======================================
    // DEV
    // ======================================
    /// Custom search pass function.
    #[doc(hidden)]
    pub custom_search_pass: Option<SearchPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for PrunerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> PrunerBuilder<T> {
    /// Select a pruning strategy to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: PruneAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            output_size: None,
            max_candidates: None,
            custom_search_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the number of samples to retain (including both endpoints).
    pub fn output_size(mut self, output_size: usize) -> Self {
        if self.output_size.is_some() {
            self.duplicate_param = Some("output_size");
        }
        self.output_size = Some(output_size);
        self
    }

    /// Reject inputs whose search would evaluate more than `limit` candidates.
    pub fn max_candidates(mut self, limit: usize) -> Self {
        if self.max_candidates.is_some() {
            self.duplicate_param = Some("max_candidates");
        }
        self.max_candidates = Some(limit);
        self
    }

    // ======================================
    // DEV
    // ======================================

    /// Set a custom search pass function.
    #[doc(hidden)]
    pub fn custom_search_pass(mut self, pass: SearchPassFn<T>) -> Self {
        self.custom_search_pass = Some(pass);
        self
    }

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }
}

// ============================================================================
// Strategy Markers
// ============================================================================

/// Conversion from the generic builder into a strategy-specific builder.
pub trait PruneAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`PrunerBuilder`] into a specialized execution builder.
    fn convert(builder: PrunerBuilder<T>) -> Self::Output;
}

/// Marker for the exhaustive (brute-force) strategy.
#[derive(Debug, Clone, Copy)]
pub struct Exhaustive;

impl<T: Float> PruneAdapter<T> for Exhaustive {
    type Output = ExhaustivePrunerBuilder<T>;

    fn convert(builder: PrunerBuilder<T>) -> Self::Output {
        let mut result = ExhaustivePrunerBuilder::default();

        if let Some(output_size) = builder.output_size {
            result = result.output_size(output_size);
        }
        if let Some(limit) = builder.max_candidates {
            result = result.max_candidates(limit);
        }
        if let Some(pass) = builder.custom_search_pass {
            result = result.custom_search_pass(pass);
        }
        if let Some(parallel) = builder.parallel {
            result = result.parallel(parallel);
        }

        result.duplicate_param = builder.duplicate_param;
        result
    }
}
