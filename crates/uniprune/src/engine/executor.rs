//! Execution engine for pruning searches.
//!
//! ## Purpose
//!
//! This module turns a validated configuration into a search. It decides
//! which search pass to run (the built-in sequential pass or one injected by
//! an extension crate) and packages the winning candidate.
//!
//! ## Design notes
//!
//! * **Injection**: Extension crates supply a [`SearchPassFn`] to replace the
//!   sequential pass; the `parallel` flag selects it.
//! * **Generics**: Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * The configuration has been validated before `run_with_config` is called.
//! * The returned removal set is sorted and holds `n - output_size` indices.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not handle parallel execution directly (handled by extension crates).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::exhaustive::{search_pass, Candidate, SearchOutcome};
use crate::math::curvature::score;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for custom search pass function
#[doc(hidden)]
pub type SearchPassFn<T> = fn(
    &[T],  // x
    usize, // number of interior points to remove
) -> SearchOutcome<T>;

/// Output from a pruning search.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Sorted indices removed from the input.
    pub removed: Vec<usize>,

    /// Curvature score of the retained points.
    pub score: T,

    /// Number of candidates scored.
    pub evaluated: usize,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a pruning search.
#[derive(Debug, Clone)]
pub struct PruneConfig<T> {
    /// Number of points to retain.
    pub output_size: usize,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom search pass function (enables parallel execution).
    #[doc(hidden)]
    pub custom_search_pass: Option<SearchPassFn<T>>,

    /// Whether to use `custom_search_pass` when present.
    #[doc(hidden)]
    pub parallel: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for pruning searches.
pub struct PruneExecutor;

impl PruneExecutor {
    /// Run the search described by `config` over `x`.
    pub fn run_with_config<T: Float>(x: &[T], config: &PruneConfig<T>) -> ExecutorOutput<T> {
        let remove = x.len() - config.output_size;

        let outcome = match (config.parallel, config.custom_search_pass) {
            (true, Some(pass)) => pass(x, remove),
            _ => search_pass(x, remove),
        };

        let evaluated = outcome.evaluated;
        debug_assert!(outcome.best.is_some(), "search evaluated no candidates");
        let best = outcome.best.unwrap_or_else(|| Candidate {
            removed: Vec::new(),
            score: score(x),
        });

        ExecutorOutput {
            removed: best.removed,
            score: best.score,
            evaluated,
        }
    }
}
