//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates configuration and input, selects the search pass to
//! run, and packages results.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Search execution.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for pruning operations.
pub mod output;
