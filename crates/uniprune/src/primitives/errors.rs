//! Error types for pruning operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while enumerating
//! combinations, building masked views, or running a pruning search.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending sizes or a short description.
//! * **Up-front**: Every variant is a precondition violation detected before
//!   any search work begins, so no partial result is ever produced.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Size preconditions**: selection size, output size.
//! 2. **Removal preconditions**: out-of-range or duplicate removal indices.
//! 3. **Builder configuration**: missing or duplicated parameters, search caps.
//! 4. **Input validation**: non-finite samples, non-contiguous containers.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery; all errors are deterministic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for pruning operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PruneError {
    /// Requested more elements per combination than the collection holds.
    InvalidSelectionSize {
        /// Number of indices per combination (k).
        selection_size: usize,
        /// Number of indices available (n).
        collection_size: usize,
    },

    /// Removal indices are out of range or contain duplicates.
    InvalidRemovalSet(String),

    /// Output size must lie in `[2, input_size]` and the input must hold at least 2 points.
    InvalidOutputSize {
        /// Requested number of retained points (m).
        output_size: usize,
        /// Number of points in the input (n).
        input_size: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Input container cannot be viewed as a contiguous slice.
    InvalidInput(String),

    /// The number of candidate removal sets exceeds the configured cap.
    SearchSpaceTooLarge {
        /// Number of candidates the search would evaluate (`None` on overflow).
        candidates: Option<usize>,
        /// Configured maximum.
        limit: usize,
    },

    /// A required builder parameter was never set.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PruneError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidSelectionSize {
                selection_size,
                collection_size,
            } => {
                write!(
                    f,
                    "Invalid selection size: {selection_size} (must be at most collection size {collection_size})"
                )
            }
            Self::InvalidRemovalSet(msg) => write!(f, "Invalid removal set: {msg}"),
            Self::InvalidOutputSize {
                output_size,
                input_size,
            } => {
                write!(
                    f,
                    "Invalid output size: {output_size} (must be between 2 and input size {input_size})"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidInput(s) => write!(f, "Invalid input: {s}"),
            Self::SearchSpaceTooLarge { candidates, limit } => match candidates {
                Some(count) => write!(
                    f,
                    "Search space too large: {count} candidates (limit is {limit})"
                ),
                None => write!(
                    f,
                    "Search space too large: candidate count overflows usize (limit is {limit})"
                ),
            },
            Self::MissingParameter { parameter } => {
                write!(f, "Parameter '{parameter}' is required but was not set")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PruneError {}
