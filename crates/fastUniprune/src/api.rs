//! High-level API for uniform pruning with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point for pruning with parallel
//! execution. It extends the `uniprune` API with an adapter that spreads the
//! exhaustive search over all available CPU cores.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `uniprune` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution.
//! * **Transparent**: The `Exhaustive` marker selects the parallel builder.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PrunerBuilder`] via `Pruner::new()`.
//! 2. Chain configuration methods (`.output_size()`, `.max_candidates()`).
//! 3. Select a strategy via `.adapter(Exhaustive)` to get a parallel execution builder.

// External dependencies
use num_traits::Float;

// Import base marker types for delegation
use uniprune::internals::api::Exhaustive as BaseExhaustive;

// Internal dependencies
use crate::adapters::exhaustive::ParallelExhaustivePrunerBuilder;

// Publicly re-exported types
pub use crate::adapters::exhaustive::ParallelExhaustivePruner;
pub use crate::input::PruneInput;
pub use uniprune::internals::api::{PruneAdapter, PrunerBuilder};
pub use uniprune::internals::engine::output::PruneResult;
pub use uniprune::internals::primitives::errors::PruneError;
pub use uniprune::internals::primitives::masked::MaskedView;
pub use uniprune::{combinations, prune_uniform_exhaustive, score};

// ============================================================================
// Strategy Module
// ============================================================================

/// Marker types for selecting pruning strategies.
#[allow(non_snake_case)]
pub mod Strategy {
    pub use super::Exhaustive;
}

// ============================================================================
// Strategy Marker Types
// ============================================================================

/// Marker for the exhaustive strategy with parallel partitions.
#[derive(Debug, Clone, Copy)]
pub struct Exhaustive;

impl<T: Float> PruneAdapter<T> for Exhaustive {
    type Output = ParallelExhaustivePrunerBuilder<T>;

    fn convert(builder: PrunerBuilder<T>) -> Self::Output {
        // Parallel unless the caller opted out
        let parallel = builder.parallel.unwrap_or(true);

        let base = <BaseExhaustive as PruneAdapter<T>>::convert(builder).parallel(parallel);

        ParallelExhaustivePrunerBuilder { base }
    }
}
