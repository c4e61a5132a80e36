//! Layer 5: Adapters
//!
//! This layer provides user-facing processors that adapt the parallel engine
//! to the `uniprune` builders:
//!
//! - **Exhaustive**: Brute-force search with optional parallel partitions

// Exhaustive adapter with parallel search.
pub mod exhaustive;
