//! Input abstractions for uniform pruning.
//!
//! ## Purpose
//!
//! This module lets `prune` accept several container types (slices, vectors,
//! ndarray) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Every supported container is borrowed as a slice; the
//!   search never copies the samples.
//! * **Fail-fast validation**: Non-contiguous ndarray views are rejected before
//!   any search work starts.
//!
//! ## Invariants
//!
//! * Returned slices cover every element of the input container, in order.
//!
//! ## Non-goals
//!
//! * This module does not reorder or clean input data.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from uniprune crate
use uniprune::internals::primitives::errors::PruneError;

/// Trait for types that can be pruned.
pub trait PruneInput<T: Float> {
    /// Borrow the input as a contiguous slice.
    fn as_prune_slice(&self) -> Result<&[T], PruneError>;
}

impl<T: Float> PruneInput<T> for [T] {
    fn as_prune_slice(&self) -> Result<&[T], PruneError> {
        Ok(self)
    }
}

impl<T: Float, const N: usize> PruneInput<T> for [T; N] {
    fn as_prune_slice(&self) -> Result<&[T], PruneError> {
        Ok(self.as_slice())
    }
}

impl<T: Float> PruneInput<T> for Vec<T> {
    fn as_prune_slice(&self) -> Result<&[T], PruneError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> PruneInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_prune_slice(&self) -> Result<&[T], PruneError> {
        self.as_slice().ok_or_else(|| {
            PruneError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
