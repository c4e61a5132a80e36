//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides the user-facing processors for each pruning strategy:
//!
//! - **Exhaustive**: brute-force search over every interior removal set
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Exhaustive pruning adapter.
pub mod exhaustive;
