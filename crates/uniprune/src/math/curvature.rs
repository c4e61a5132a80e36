//! Discrete-curvature scoring of ordered sequences.
//!
//! ## Purpose
//!
//! This module measures how far an ordered sequence is from an arithmetic
//! progression. The score is the sum of the magnitudes of the discrete
//! second differences, so evenly spaced samples score exactly zero and every
//! change in spacing adds to the total.
//!
//! ## Design notes
//!
//! * **Streaming**: A single forward pass with a three-element window; works on
//!   slices, vectors and masked views alike.
//! * **Pure**: No allocation (except in [`second_differences`]) and no side effects.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! ```text
//! score(x) = Σ_{i=1}^{n-2} | x[i+1] + x[i-1] - 2·x[i] |
//! ```
//!
//! ## Invariants
//!
//! * The score is non-negative.
//! * Sequences with fewer than 3 elements score zero.
//! * The score is zero iff consecutive spacings are all equal.
//!
//! ## Non-goals
//!
//! * This module does not normalize scores across sequences of different length.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Scoring
// ============================================================================

/// Sum of absolute discrete second differences of `sequence`.
///
/// Returns zero for sequences with fewer than three elements.
#[inline]
pub fn score<'a, T, I>(sequence: I) -> T
where
    T: Float + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut iter = sequence.into_iter();
    let (mut prev, mut curr) = match (iter.next(), iter.next()) {
        (Some(&a), Some(&b)) => (a, b),
        _ => return T::zero(),
    };

    let two = T::one() + T::one();
    let mut sum = T::zero();
    for &next in iter {
        sum = sum + (next + prev - two * curr).abs();
        prev = curr;
        curr = next;
    }

    sum
}

/// Signed second differences `x[i+1] + x[i-1] - 2·x[i]` for every interior point.
///
/// The result has `len - 2` entries (empty for fewer than three elements);
/// the sum of their magnitudes equals [`score`].
pub fn second_differences<'a, T, I>(sequence: I) -> Vec<T>
where
    T: Float + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut iter = sequence.into_iter();
    let (mut prev, mut curr) = match (iter.next(), iter.next()) {
        (Some(&a), Some(&b)) => (a, b),
        _ => return Vec::new(),
    };

    let two = T::one() + T::one();
    let mut out = Vec::with_capacity(iter.size_hint().0);
    for &next in iter {
        out.push(next + prev - two * curr);
        prev = curr;
        curr = next;
    }

    out
}
