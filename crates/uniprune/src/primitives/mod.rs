//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the combination generator, the masked view and the
//! shared error type. It has zero internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Lexicographic combination enumeration.
pub mod combinations;

/// Order-preserving masked views.
pub mod masked;

/// Shared error types.
pub mod errors;
