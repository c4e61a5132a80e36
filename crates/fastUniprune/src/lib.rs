//! # fastUniprune — Parallel Uniform-Spacing Downsampling
//!
//! A parallel front end for [`uniprune`](https://docs.rs/uniprune). The
//! exhaustive search over candidate removal sets is partitioned by the first
//! removed index and the partitions run on all CPU cores with `rayon`.
//!
//! ## What is uniform pruning?
//!
//! Keep `m` of `n` ordered samples, always including the first and last, so
//! that the retained points are as close to evenly spaced as possible: the
//! sum of absolute discrete second differences of what remains is minimal.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastUniprune::prelude::*;
//! use ndarray::Array1;
//!
//! let x = Array1::from_vec(vec![1.0, 4.5, 4.6, 5.0, 5.1, 5.2, 6.0, 9.0]);
//!
//! // Build the processor with parallel execution (default)
//! let pruner = Pruner::new()
//!     .output_size(3)     // Keep three samples (endpoints included)
//!     .adapter(Exhaustive) // Parallel by default
//!     .build()?;
//!
//! let result = pruner.prune(&x)?;
//! assert_eq!(result.x, vec![1.0, 5.0, 9.0]);
//!
//! println!("{}", result);
//! # Result::<(), PruneError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Input points:  8
//!   Output points: 3
//!   Candidates:    6
//!   Input score:   6.9
//!   Score:         0
//!
//! Retained Data:
//!    Index            X
//! ---------------------
//!        0     1.000000
//!        3     5.000000
//!        7     9.000000
//! ```
//!
//! ## Determinism
//!
//! Partition outcomes are merged in enumeration order, so the parallel search
//! returns the same removal set as the sequential one, including which of
//! several equally good candidates wins.
//!
//! ## Sequential Execution
//!
//! ```rust
//! use fastUniprune::prelude::*;
//!
//! let pruner = Pruner::new()
//!     .output_size(4)
//!     .adapter(Exhaustive)
//!     .parallel(false)
//!     .build()?;
//!
//! let result = pruner.prune(&vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0])?;
//! assert_eq!(result.x, vec![1.0, 3.0, 5.0, 7.0]);
//! # Result::<(), PruneError>::Ok(())
//! ```
//!
//! ## Input Types
//!
//! `prune` accepts slices, arrays, `Vec` and contiguous one-dimensional
//! `ndarray` arrays (see [`prelude::PruneInput`]). Non-contiguous views are
//! rejected with `PruneError::InvalidInput`.
//!
//! ## Features
//!
//! - **`cpu`** (default): parallel search with `rayon`. Without it every run
//!   falls back to the sequential search.

#![allow(non_snake_case)]

// Layer 4: Engine - parallel execution.
mod engine;

// Layer 5: Adapters - parallel strategy adapters.
mod adapters;

// High-level fluent API for uniform pruning.
mod api;

// Input data handling.
mod input;

// Standard fastUniprune prelude.
pub mod prelude {
    pub use crate::api::{
        combinations, prune_uniform_exhaustive, score, MaskedView, ParallelExhaustivePruner,
        PruneError, PruneInput, PruneResult, PrunerBuilder as Pruner, Strategy::Exhaustive,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
