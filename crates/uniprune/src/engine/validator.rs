//! Input validation for pruning configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before any search work
//! begins: input finiteness, output-size bounds, search-space caps and builder
//! bookkeeping.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not perform the search itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::combinations::binomial;
use crate::primitives::errors::PruneError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for pruning configuration and input data.
///
/// Provides static methods returning `Result<(), PruneError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate that every sample is finite.
    pub fn validate_inputs<T: Float>(x: &[T]) -> Result<(), PruneError> {
        for (i, &xi) in x.iter().enumerate() {
            if !xi.is_finite() {
                return Err(PruneError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    xi.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate the requested output size against the input length.
    ///
    /// Requires `input_size >= 2` and `2 <= output_size <= input_size`.
    pub fn validate_output_size(input_size: usize, output_size: usize) -> Result<(), PruneError> {
        if input_size < 2 || output_size < 2 || output_size > input_size {
            return Err(PruneError::InvalidOutputSize {
                output_size,
                input_size,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Search Validation
    // ========================================================================

    /// Validate that the number of candidates stays within `limit`.
    ///
    /// Must be called after [`Validator::validate_output_size`].
    pub fn validate_search_space(
        input_size: usize,
        output_size: usize,
        limit: Option<usize>,
    ) -> Result<(), PruneError> {
        let Some(limit) = limit else {
            return Ok(());
        };

        let candidates = binomial(input_size - 2, input_size - output_size);
        match candidates {
            Some(count) if count <= limit => Ok(()),
            _ => Err(PruneError::SearchSpaceTooLarge { candidates, limit }),
        }
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that a required parameter was provided.
    pub fn validate_required<V>(value: Option<V>, parameter: &'static str) -> Result<V, PruneError> {
        value.ok_or(PruneError::MissingParameter { parameter })
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), PruneError> {
        if let Some(param) = duplicate_param {
            return Err(PruneError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
