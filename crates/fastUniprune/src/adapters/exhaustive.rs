//! Exhaustive adapter with parallel search.
//!
//! ## Purpose
//!
//! This module wraps the `uniprune` exhaustive builder and processor. It adds
//! parallel execution via `rayon` and accepts any [`PruneInput`] container.
//!
//! ## Design notes
//!
//! * **Wrapping**: Configuration lives in the base builder; this layer only
//!   decides which search pass to inject.
//! * **Parallel-First**: Parallel execution is on unless disabled.
//! * **Delegation**: Validation and result construction stay in `uniprune`.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Parallel and sequential runs return identical results.
//! * The first and last samples are always retained.
//!
//! ## Non-goals
//!
//! * This adapter does not add pruning strategies beyond the exhaustive search.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::search_pass_parallel;

// External dependencies
use num_traits::Float;

// Export dependencies from uniprune crate
use uniprune::internals::adapters::exhaustive::{ExhaustivePruner, ExhaustivePrunerBuilder};
use uniprune::internals::engine::output::PruneResult;
use uniprune::internals::primitives::errors::PruneError;

// Internal dependencies
use crate::input::PruneInput;

// ============================================================================
// Extended Exhaustive Pruner Builder
// ============================================================================

/// Builder for the exhaustive pruning processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelExhaustivePrunerBuilder<T: Float> {
    /// Base builder from the uniprune crate
    pub base: ExhaustivePrunerBuilder<T>,
}

impl<T: Float> Default for ParallelExhaustivePrunerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelExhaustivePrunerBuilder<T> {
    /// Create a new builder with parallel execution enabled.
    fn new() -> Self {
        let base = ExhaustivePrunerBuilder::default().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the number of samples to retain.
    pub fn output_size(mut self, output_size: usize) -> Self {
        self.base = self.base.output_size(output_size);
        self
    }

    /// Cap the number of candidate removal sets the search may evaluate.
    pub fn max_candidates(mut self, limit: usize) -> Self {
        self.base = self.base.max_candidates(limit);
        self
    }
}

impl<T: Float + Send + Sync> ParallelExhaustivePrunerBuilder<T> {
    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the parallel exhaustive processor.
    pub fn build(self) -> Result<ParallelExhaustivePruner<T>, PruneError> {
        let mut builder = self.base;

        #[cfg(feature = "cpu")]
        {
            if builder.parallel.unwrap_or(true) {
                builder = builder.custom_search_pass(search_pass_parallel);
            } else {
                builder.custom_search_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            builder.custom_search_pass = None;
        }

        Ok(ParallelExhaustivePruner {
            processor: builder.build()?,
        })
    }
}

// ============================================================================
// Extended Exhaustive Pruner
// ============================================================================

/// Exhaustive pruning processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelExhaustivePruner<T> {
    processor: ExhaustivePruner<T>,
}

impl<T: Float> ParallelExhaustivePruner<T> {
    /// Number of samples this processor retains.
    #[inline]
    pub fn output_size(&self) -> usize {
        self.processor.output_size()
    }

    /// Select the best `output_size` samples of `x`.
    pub fn prune<I>(&self, x: &I) -> Result<PruneResult<T>, PruneError>
    where
        I: PruneInput<T> + ?Sized,
    {
        let x_slice = x.as_prune_slice()?;
        self.processor.prune(x_slice)
    }
}
