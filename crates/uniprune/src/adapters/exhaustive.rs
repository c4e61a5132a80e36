//! Exhaustive adapter for uniform pruning.
//!
//! ## Purpose
//!
//! This module provides the execution adapter for the exhaustive strategy. It
//! validates configuration and input, runs the search through the executor,
//! and materializes a [`PruneResult`].
//!
//! ## Design notes
//!
//! * **Processing**: Scores every candidate removal set in one pass.
//! * **Delegation**: Delegates the search to the execution engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Validation Flow**: Configuration at `build()`, data at `prune()`.
//! * **Search Cap**: `max_candidates` rejects inputs whose search space is too
//!   large before any work is done.
//!
//! ## Invariants
//!
//! * The first and last samples are always retained.
//! * Output order matches input order.
//!
//! ## Non-goals
//!
//! * This adapter does not execute in parallel (see `fastUniprune`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{PruneConfig, PruneExecutor, SearchPassFn};
use crate::engine::output::PruneResult;
use crate::engine::validator::Validator;
use crate::math::curvature::score;
use crate::primitives::errors::PruneError;
use crate::primitives::masked::MaskedView;

// ============================================================================
// Exhaustive Pruner Builder
// ============================================================================

/// Builder for the exhaustive pruning processor.
#[derive(Debug, Clone)]
pub struct ExhaustivePrunerBuilder<T: Float> {
    /// Number of samples to retain
    pub output_size: Option<usize>,

    /// Upper bound on the number of candidates to evaluate
    pub max_candidates: Option<usize>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom search pass function.
    #[doc(hidden)]
    pub custom_search_pass: Option<SearchPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for ExhaustivePrunerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ExhaustivePrunerBuilder<T> {
    /// Create a new exhaustive pruner builder with default parameters.
    fn new() -> Self {
        Self {
            output_size: None,
            max_candidates: None,
            custom_search_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the number of samples to retain.
    pub fn output_size(mut self, output_size: usize) -> Self {
        self.output_size = Some(output_size);
        self
    }

    /// Cap the number of candidate removal sets the search may evaluate.
    pub fn max_candidates(mut self, limit: usize) -> Self {
        self.max_candidates = Some(limit);
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Set a custom search pass function.
    #[doc(hidden)]
    pub fn custom_search_pass(mut self, pass: SearchPassFn<T>) -> Self {
        self.custom_search_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the exhaustive processor.
    pub fn build(self) -> Result<ExhaustivePruner<T>, PruneError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let output_size = Validator::validate_required(self.output_size, "output_size")?;

        Ok(ExhaustivePruner {
            config: PruneConfig {
                output_size,
                custom_search_pass: self.custom_search_pass,
                parallel: self.parallel.unwrap_or(false),
            },
            max_candidates: self.max_candidates,
        })
    }
}

// ============================================================================
// Exhaustive Pruner
// ============================================================================

/// Exhaustive pruning processor.
#[derive(Debug, Clone)]
pub struct ExhaustivePruner<T> {
    config: PruneConfig<T>,
    max_candidates: Option<usize>,
}

impl<T: Float> ExhaustivePruner<T> {
    /// Number of samples this processor retains.
    #[inline]
    pub fn output_size(&self) -> usize {
        self.config.output_size
    }

    /// Select the best `output_size` samples of `x`.
    pub fn prune(&self, x: &[T]) -> Result<PruneResult<T>, PruneError> {
        let n = x.len();
        let m = self.config.output_size;

        Validator::validate_output_size(n, m)?;
        Validator::validate_inputs(x)?;
        Validator::validate_search_space(n, m, self.max_candidates)?;

        let output = PruneExecutor::run_with_config(x, &self.config);
        let view = MaskedView::from_sorted(x, output.removed);

        Ok(PruneResult {
            x: view.to_vec(),
            kept_indices: view.kept_indices().collect::<Vec<_>>(),
            removed_indices: view.into_removed(),
            score: output.score,
            input_score: score(x),
            candidates_evaluated: output.evaluated,
        })
    }
}
