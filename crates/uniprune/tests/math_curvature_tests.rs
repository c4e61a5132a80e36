//! Tests for the curvature score.
//!
//! These tests verify the discrete-curvature objective minimized by pruning:
//! - Known values for short sequences
//! - Zero score for arithmetic progressions
//! - Degenerate lengths
//! - Scoring masked views and f32 sequences
//!
//! ## Test Organization
//!
//! 1. **Known Values** - Hand-computed scores
//! 2. **Properties** - Invariance and non-negativity
//! 3. **Edge Cases** - Fewer than three elements
//! 4. **Input Types** - Views, vectors, f32
//! 5. **Second Differences** - Signed per-point terms

use approx::assert_relative_eq;
use uniprune::prelude::*;

// ============================================================================
// Known Value Tests
// ============================================================================

/// Test a single bend.
///
/// (4 + 1 - 2·2) = 1.
#[test]
fn test_score_single_bend() {
    assert_relative_eq!(score(&[1.0, 2.0, 4.0]), 1.0);
}

/// Test evenly spaced samples score zero.
#[test]
fn test_score_arithmetic_progression() {
    assert_eq!(score(&[1.0, 2.0, 3.0, 4.0]), 0.0);
    assert_eq!(score(&[-3.0, -1.0, 1.0, 3.0, 5.0]), 0.0);
    assert_eq!(score(&[7.0, 7.0, 7.0]), 0.0);
}

/// Test bends in both directions add in magnitude.
///
/// Terms: (3 + 0 - 2) = 1, (3 + 1 - 6) = -2, (7 + 3 - 6) = 4.
#[test]
fn test_score_mixed_signs() {
    assert_relative_eq!(score(&[0.0, 1.0, 3.0, 3.0, 7.0]), 7.0);
}

/// Test the score of the documented 8-point trace.
#[test]
fn test_score_trace() {
    let x = [1.0, 4.5, 4.6, 5.0, 5.1, 5.2, 6.0, 9.0];

    // 3.4 + 0.3 + 0.3 + 0.0 + 0.7 + 2.2
    assert_relative_eq!(score(&x), 6.9, epsilon = 1e-12);
}

// ============================================================================
// Property Tests
// ============================================================================

/// Test the score is invariant under shifting all samples.
#[test]
fn test_score_shift_invariant() {
    let x = [0.3, 1.7, 2.2, 4.9, 5.0, 8.4];
    let shifted: Vec<f64> = x.iter().map(|v| v + 100.0).collect();

    assert_relative_eq!(score(&x), score(&shifted), epsilon = 1e-9);
}

/// Test the score scales linearly and ignores reversal.
#[test]
fn test_score_scale_and_reverse() {
    let x = [0.0, 0.5, 2.5, 3.0, 6.0];
    let scaled: Vec<f64> = x.iter().map(|v| v * -3.0).collect();
    let reversed: Vec<f64> = x.iter().rev().copied().collect();

    assert_relative_eq!(score(&scaled), 3.0 * score(&x), epsilon = 1e-12);
    assert_relative_eq!(score(&reversed), score(&x), epsilon = 1e-12);
}

/// Test the score is never negative.
#[test]
fn test_score_non_negative() {
    let x = [5.0, -2.0, 8.0, -9.0, 0.0, 3.0];
    assert!(score(&x) > 0.0);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test sequences shorter than three score zero.
#[test]
fn test_score_short_sequences() {
    let empty: [f64; 0] = [];
    assert_eq!(score(&empty), 0.0);
    assert_eq!(score(&[42.0]), 0.0);
    assert_eq!(score(&[1.0, 100.0]), 0.0);
}

// ============================================================================
// Input Type Tests
// ============================================================================

/// Test scoring a masked view matches scoring its materialized copy.
#[test]
fn test_score_masked_view() {
    let base = [1.0, 4.5, 4.6, 5.0, 5.1, 5.2, 6.0, 9.0];
    let view = MaskedView::new(&base, vec![1, 2, 4, 5, 6]).unwrap();

    assert_eq!(view, [1.0, 5.0, 9.0]);
    assert_eq!(score(&view), 0.0);
    assert_eq!(score(&view), score(&view.to_vec()));
}

/// Test scoring an iterator of references and f32 samples.
#[test]
fn test_score_iter_and_f32() {
    let x = vec![1.0f64, 2.0, 4.0, 7.0];
    assert_relative_eq!(score(x.iter()), 2.0);

    let y = [0.0f32, 1.0, 3.0];
    assert_relative_eq!(score(&y), 1.0f32);
}

// ============================================================================
// Second Difference Tests
// ============================================================================

/// Test signed second differences and their relation to the score.
#[test]
fn test_second_differences() {
    let x = [0.0, 1.0, 3.0, 3.0, 7.0];
    let d = second_differences(&x);

    assert_eq!(d, vec![1.0, -2.0, 4.0]);
    assert_relative_eq!(d.iter().map(|v: &f64| v.abs()).sum::<f64>(), score(&x));
}

/// Test second differences are empty for short sequences.
#[test]
fn test_second_differences_short() {
    assert!(second_differences(&[1.0, 2.0]).is_empty());
    assert!(second_differences::<f64, _>(&[]).is_empty());
}
