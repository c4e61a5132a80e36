//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the pruning search itself: candidate enumeration over
//! interior indices, scoring, and best-result reduction.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Exhaustive removal search.
pub mod exhaustive;
