//! # uniprune — Uniform-Spacing Downsampling for Rust
//!
//! Select `m` of the `n` samples of an ordered numeric sequence so that the
//! retained points are as close to evenly spaced as possible.
//!
//! ## What is uniform pruning?
//!
//! Given samples `x[0] … x[n-1]`, uniform pruning keeps the first and last
//! sample and chooses which interior samples to drop so that the curvature
//! score of what remains,
//!
//! ```text
//! Σ | x[i+1] + x[i-1] - 2·x[i] |
//! ```
//!
//! is minimal. An arithmetic progression scores zero; every change in spacing
//! adds to the score. This is useful for thinning traces, tick positions or
//! sample timestamps while keeping their spacing as regular as possible.
//!
//! The search is exhaustive: it evaluates `C(n-2, n-m)` candidates, which is
//! exponential in the number of removed samples. Use it where `n - m` is
//! small, or cap the search with `max_candidates`.
//!
//! ## Quick Start
//!
//! ### Primitive operations
//!
//! ```rust
//! use uniprune::{prune_uniform_exhaustive, score};
//!
//! let trace = vec![1.0, 4.5, 4.6, 5.0, 5.1, 5.2, 6.0, 9.0];
//!
//! // The view borrows `trace`
//! let kept = prune_uniform_exhaustive(&trace, 3)?;
//! assert_eq!(kept, [1.0, 5.0, 9.0]);
//! assert_eq!(score(&kept), 0.0);
//!
//! // Materialize it when it has to outlive the input
//! let owned: Vec<f64> = kept.to_vec();
//! # assert_eq!(owned.len(), 3);
//! # Result::<(), uniprune::prelude::PruneError>::Ok(())
//! ```
//!
//! ### Builder
//!
//! ```rust
//! use uniprune::prelude::*;
//!
//! let x = vec![0.0, 0.9, 2.1, 2.9, 4.2, 5.0, 6.1, 7.0];
//!
//! let pruner = Pruner::new()
//!     .output_size(5)         // Keep five samples (endpoints included)
//!     .max_candidates(10_000) // Refuse searches larger than this
//!     .adapter(Exhaustive)
//!     .build()?;
//!
//! let result = pruner.prune(&x)?;
//!
//! assert_eq!(result.len(), 5);
//! assert_eq!(result.kept_indices.first(), Some(&0));
//! assert_eq!(result.kept_indices.last(), Some(&7));
//! println!("{}", result);
//! # Result::<(), PruneError>::Ok(())
//! ```
//!
//! ### Combinations
//!
//! ```rust
//! use uniprune::combinations;
//!
//! let pairs: Vec<Vec<usize>> = combinations(3, 2)?.iter().collect();
//! assert_eq!(pairs, vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
//! # Result::<(), uniprune::prelude::PruneError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, PruneError>`. All errors are
//! precondition violations reported before any search work starts:
//!
//! - **`InvalidSelectionSize`**: `combinations(n, k)` with `k > n`.
//! - **`InvalidRemovalSet`**: a `MaskedView` with out-of-range or repeated indices.
//! - **`InvalidOutputSize`**: `m` outside `[2, n]`, or `n < 2`.
//! - **`InvalidNumericValue`**, **`SearchSpaceTooLarge`**, **`MissingParameter`**,
//!   **`DuplicateParameter`**: builder API only.
//! - **`InvalidInput`**: input containers that cannot be borrowed as a slice
//!   (raised by `fastUniprune`).
//!
//! ## Tracing
//!
//! The crate never prints. Search progress is reported through the
//! [`log`](https://docs.rs/log) facade at `debug` and `trace` level and is
//! silent unless the application installs a logger.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! uniprune = { version = "0.1", default-features = false }
//! ```
//!
//! ## Parallel Search
//!
//! The `fastUniprune` crate partitions the search space across CPU cores with
//! `rayon` and returns exactly the same result, tie-breaks included.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - combinations, masked views, errors.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - exhaustive search.
mod algorithms;

// Layer 4: Engine - validation, execution and output.
mod engine;

// Layer 5: Adapters - strategy adapters.
mod adapters;

// High-level fluent API for uniform pruning.
mod api;

pub use crate::api::{combinations, prune_uniform_exhaustive, score};

// Standard uniprune prelude.
pub mod prelude {
    pub use crate::api::{
        combinations, prune_uniform_exhaustive, score, second_differences, CombinationIter,
        Combinations, ExhaustivePruner, MaskedIter, MaskedView, PruneError, PruneResult,
        PrunerBuilder as Pruner, Strategy::Exhaustive,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
