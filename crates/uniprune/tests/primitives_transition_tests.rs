#![cfg(feature = "dev")]
//! Tests for the combination transition function and binomial helper.
//!
//! These tests drive `next_combination` directly, independent of the
//! iterator wrapper:
//! - Single-position increments
//! - Backtracking across several positions with forward refill
//! - Terminal state detection
//! - Binomial coefficients and overflow
//!
//! ## Test Organization
//!
//! 1. **Transitions** - Successor computation
//! 2. **Terminal State** - Last combination and degenerate inputs
//! 3. **Binomial** - Counts and overflow

use uniprune::internals::primitives::combinations::{binomial, next_combination};

// ============================================================================
// Transition Tests
// ============================================================================

/// Test the last position is raised when it has room.
#[test]
fn test_next_increments_last_position() {
    let mut c = vec![0, 1, 2];
    assert!(next_combination(&mut c, 5));
    assert_eq!(c, vec![0, 1, 3]);
}

/// Test backtracking by one position refills the tail.
#[test]
fn test_next_backtracks_one_position() {
    let mut c = vec![0, 1, 4];
    assert!(next_combination(&mut c, 5));
    assert_eq!(c, vec![0, 2, 3]);
}

/// Test backtracking across every later position.
///
/// Positions 1 and 2 sit at their ceilings (3 and 4), so position 0 rises
/// and the tail is refilled with the next consecutive values.
#[test]
fn test_next_backtracks_many_positions() {
    let mut c = vec![0, 3, 4];
    assert!(next_combination(&mut c, 5));
    assert_eq!(c, vec![1, 2, 3]);

    let mut c = vec![1, 5, 6, 7];
    assert!(next_combination(&mut c, 8));
    assert_eq!(c, vec![2, 3, 4, 5]);
}

/// Test a full walk visits C(n, k) states.
#[test]
fn test_next_walk_count() {
    let mut c: Vec<usize> = (0..3).collect();
    let mut visited = 1;
    while next_combination(&mut c, 7) {
        visited += 1;
    }

    assert_eq!(visited, 35);
    assert_eq!(c, vec![4, 5, 6], "Last state should be left untouched");
}

/// Test a tail slice can be advanced while the head stays pinned.
#[test]
fn test_next_on_tail_slice() {
    let mut c = vec![2, 3, 4];
    let mut tails = vec![c[1..].to_vec()];
    while next_combination(&mut c[1..], 6) {
        tails.push(c[1..].to_vec());
    }

    assert_eq!(c[0], 2);
    assert_eq!(
        tails,
        vec![vec![3, 4], vec![3, 5], vec![4, 5]],
        "Tail should enumerate pairs above the pinned head"
    );
}

// ============================================================================
// Terminal State Tests
// ============================================================================

/// Test the final combination has no successor.
#[test]
fn test_next_terminal() {
    let mut c = vec![2, 3, 4];
    assert!(!next_combination(&mut c, 5));
    assert_eq!(c, vec![2, 3, 4]);
}

/// Test the empty combination has no successor.
#[test]
fn test_next_empty() {
    let mut c: Vec<usize> = Vec::new();
    assert!(!next_combination(&mut c, 3));
}

/// Test oversized combinations are treated as terminal.
#[test]
fn test_next_oversized() {
    let mut c = vec![0, 1, 2];
    assert!(!next_combination(&mut c, 2));
}

// ============================================================================
// Binomial Tests
// ============================================================================

/// Test binomial coefficients for known values.
#[test]
fn test_binomial_values() {
    assert_eq!(binomial(0, 0), Some(1));
    assert_eq!(binomial(5, 0), Some(1));
    assert_eq!(binomial(5, 5), Some(1));
    assert_eq!(binomial(6, 2), Some(15));
    assert_eq!(binomial(6, 7), Some(0));
    assert_eq!(binomial(38, 20), Some(33_578_000_610));
    assert_eq!(binomial(64, 32), Some(1_832_624_140_942_590_534));
}

/// Test binomial overflow returns None.
#[test]
fn test_binomial_overflow() {
    assert_eq!(binomial(200, 100), None);
}
