//! Parallel execution engine for exhaustive pruning.
//!
//! ## Purpose
//!
//! This module provides the parallel search pass that is injected into the
//! `uniprune` execution engine. It spreads the candidate removal sets across
//! CPU cores and returns exactly what the sequential pass would.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential search pass.
//! * **Partitioning**: One task per leading interior index; each task
//!   enumerates its contiguous run of the lexicographic order.
//! * **Reduction**: Partition outcomes are combined with the order-preserving
//!   `SearchOutcome::merge`, so ties resolve exactly as in the sequential pass.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Partition**: All candidates sharing their first removed index.
//! * **Integration**: Plugs into the `uniprune` executor via the `SearchPassFn` hook.
//!
//! ## Invariants
//!
//! * `x.len() >= 2` and `remove <= x.len() - 2`.
//! * The merged outcome evaluates `C(n - 2, remove)` candidates.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not balance partitions by size.

// External dependencies
use log::debug;
use num_traits::Float;
use rayon::prelude::*;

// Export dependencies from uniprune crate
use uniprune::internals::algorithms::exhaustive::{
    leading_values, search_partition, SearchOutcome,
};

// ============================================================================
// Parallel Search Pass
// ============================================================================

/// Evaluate every way of removing `remove` interior points of `x`, in parallel.
pub fn search_pass_parallel<T>(x: &[T], remove: usize) -> SearchOutcome<T>
where
    T: Float + Send + Sync,
{
    let partitions = leading_values(x.len(), remove);
    debug!(
        "parallel exhaustive search: n={} remove={} partitions={}",
        x.len(),
        remove,
        partitions.len()
    );

    partitions
        .into_par_iter()
        .map(|leading| search_partition(x, remove, leading))
        .reduce(SearchOutcome::empty, SearchOutcome::merge)
}
