//! Layer 4: Engine
//!
//! This layer provides the parallel execution engine for exhaustive pruning.
//! It distributes the candidate partitions across CPU cores.

// Parallel execution engine using CPU threads
#[cfg(feature = "cpu")]
pub mod executor;
