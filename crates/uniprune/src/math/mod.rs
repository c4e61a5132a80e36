//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions over ordered sequences,
//! currently the discrete-curvature score used to rank pruning candidates.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Curvature score.
pub mod curvature;
