//! Tests for masked views.
//!
//! These tests verify the order-preserving masked view used for pruning
//! candidates and results:
//! - Iteration with removed positions skipped
//! - Positional access and arbitrary-offset iterators
//! - Size bookkeeping and subsequence properties
//! - Equality against slices, vectors, arrays and other views
//! - Removal-set validation
//!
//! ## Test Organization
//!
//! 1. **Iteration** - Basic skip behavior
//! 2. **Positional Access** - get, index, base_index, iter_from
//! 3. **Properties** - Size and subsequence invariants
//! 4. **Equality** - sequence_eq and PartialEq
//! 5. **Validation** - InvalidRemovalSet

use uniprune::prelude::*;

// ============================================================================
// Iteration Tests
// ============================================================================

/// Test removing alternating positions.
///
/// Base [1..6] without {0, 2, 4} is [2, 4, 6].
#[test]
fn test_view_skips_removed() {
    let base = vec![1u32, 2, 3, 4, 5, 6];
    let view = MaskedView::new(&base, vec![0, 2, 4]).unwrap();

    let actual: Vec<u32> = view.iter().copied().collect();
    assert_eq!(actual, vec![2, 4, 6]);
}

/// Test an empty removal set reproduces the base.
#[test]
fn test_view_empty_removal() {
    let base = vec![0.5, 1.5, -2.0, 8.0];
    let view = MaskedView::new(&base, Vec::new()).unwrap();

    assert_eq!(view, base);
    assert_eq!(view.len(), base.len());
}

/// Test removal runs at the start, middle and end.
#[test]
fn test_view_consecutive_runs() {
    let base: Vec<i32> = (0..10).collect();
    let view = MaskedView::new(&base, vec![0, 1, 4, 5, 6, 9]).unwrap();

    assert_eq!(view.to_vec(), vec![2, 3, 7, 8]);
}

/// Test removal order does not matter.
#[test]
fn test_view_unsorted_removal() {
    let base = vec!['a', 'b', 'c', 'd', 'e'];
    let view = MaskedView::new(&base, vec![3, 0]).unwrap();

    assert_eq!(view.removed(), &[0, 3]);
    assert_eq!(view.to_vec(), vec!['b', 'c', 'e']);
}

/// Test removing everything leaves an empty view.
#[test]
fn test_view_remove_all() {
    let base = vec![1.0, 2.0, 3.0];
    let view = MaskedView::new(&base, vec![0, 1, 2]).unwrap();

    assert!(view.is_empty());
    assert_eq!(view.iter().next(), None);
    assert_eq!(view.get(0), None);
}

/// Test the iterator reports an exact length as it advances.
#[test]
fn test_view_iter_exact_size() {
    let base: Vec<i32> = (0..8).collect();
    let view = MaskedView::new(&base, vec![1, 2, 6]).unwrap();

    let mut iter = view.iter();
    assert_eq!(iter.len(), 5);
    iter.next();
    iter.next();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.copied().collect::<Vec<_>>(), vec![4, 5, 7]);
}

/// Test the Debug output lists retained elements.
#[test]
fn test_view_debug() {
    let base = vec![1, 2, 3];
    let view = MaskedView::new(&base, vec![1]).unwrap();

    assert_eq!(format!("{:?}", view), "[1, 3]");
}

// ============================================================================
// Positional Access Tests
// ============================================================================

/// Test get() and indexing walk past removed positions.
#[test]
fn test_view_get() {
    let base = vec![10, 20, 30, 40, 50, 60];
    let view = MaskedView::new(&base, vec![0, 2, 4]).unwrap();

    assert_eq!(view.get(0), Some(&20));
    assert_eq!(view.get(1), Some(&40));
    assert_eq!(view.get(2), Some(&60));
    assert_eq!(view.get(3), None);
    assert_eq!(view[1], 40);
}

/// Test base_index() maps logical to base positions.
#[test]
fn test_view_base_index() {
    let base: Vec<i32> = (0..7).collect();
    let view = MaskedView::new(&base, vec![1, 2, 5]).unwrap();

    let mapped: Vec<Option<usize>> = (0..5).map(|p| view.base_index(p)).collect();
    assert_eq!(mapped, vec![Some(0), Some(3), Some(4), Some(6), None]);
}

/// Test indexing out of range panics.
#[test]
#[should_panic(expected = "index out of bounds")]
fn test_view_index_out_of_range() {
    let base = vec![1, 2, 3];
    let view = MaskedView::new(&base, vec![2]).unwrap();

    let _ = view[2];
}

/// Test iter_from() starts at every logical offset.
///
/// A leading removed run must be skipped even at offset 0.
#[test]
fn test_view_iter_from_all_offsets() {
    let base: Vec<i32> = (0..9).collect();
    let view = MaskedView::new(&base, vec![0, 1, 3, 7, 8]).unwrap();
    let full = view.to_vec();
    assert_eq!(full, vec![2, 4, 5, 6]);

    for offset in 0..=full.len() + 1 {
        let tail: Vec<i32> = view.iter_from(offset).copied().collect();
        let expected: Vec<i32> = full.iter().skip(offset).copied().collect();
        assert_eq!(tail, expected, "offset {offset}");
    }
}

/// Test kept_indices() is the complement of the removal set.
#[test]
fn test_view_kept_indices() {
    let base = vec![0.0; 6];
    let view = MaskedView::new(&base, vec![1, 4]).unwrap();

    assert_eq!(view.kept_indices().collect::<Vec<_>>(), vec![0, 2, 3, 5]);
}

// ============================================================================
// Property Tests
// ============================================================================

/// Test size and subsequence invariants over every removal set of a small base.
#[test]
fn test_view_properties_all_removals() {
    let base: Vec<i32> = vec![3, -1, 4, 1, -5, 9, 2];
    let n = base.len();

    for k in 0..=n {
        for removal in combinations(n, k).unwrap() {
            let view = MaskedView::new(&base, removal.clone()).unwrap();

            assert_eq!(view.len(), n - k);

            let expected: Vec<i32> = (0..n)
                .filter(|i| !removal.contains(i))
                .map(|i| base[i])
                .collect();
            assert_eq!(view.to_vec(), expected, "removal {removal:?}");

            for (pos, value) in expected.iter().enumerate() {
                assert_eq!(view.get(pos), Some(value));
            }
        }
    }
}

// ============================================================================
// Equality Tests
// ============================================================================

/// Test equality against different container types.
#[test]
fn test_view_equality_containers() {
    let base = vec![1.0, 2.0, 3.0, 4.0];
    let view = MaskedView::new(&base, vec![1]).unwrap();

    assert_eq!(view, vec![1.0, 3.0, 4.0]);
    assert_eq!(view, [1.0, 3.0, 4.0]);
    assert_eq!(view, &[1.0, 3.0, 4.0][..]);
    assert!(view.sequence_eq([1.0, 3.0, 4.0]));
    assert!(view.sequence_eq(&vec![1.0, 3.0, 4.0]));
}

/// Test inequality on length or content mismatch.
#[test]
fn test_view_inequality() {
    let base = vec![1, 2, 3, 4];
    let view = MaskedView::new(&base, vec![0]).unwrap();

    assert_ne!(view, vec![2, 3]);
    assert_ne!(view, vec![2, 3, 4, 5]);
    assert_ne!(view, vec![2, 3, 5]);
    assert!(!view.sequence_eq(Vec::<i32>::new()));
}

/// Test views over different bases compare by content.
#[test]
fn test_view_equality_between_views() {
    let a = vec![0, 1, 2, 3];
    let b = vec![9, 1, 2, 3, 9];
    let va = MaskedView::new(&a, vec![0]).unwrap();
    let vb = MaskedView::new(&b, vec![0, 4]).unwrap();

    assert_eq!(va, vb);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test out-of-range removal indices are rejected.
#[test]
fn test_view_out_of_range() {
    let base = vec![1, 2, 3];
    let err = MaskedView::new(&base, vec![3]).unwrap_err();

    assert!(matches!(err, PruneError::InvalidRemovalSet(_)));
    assert!(err.to_string().contains("out of range"));
}

/// Test duplicate removal indices are rejected.
#[test]
fn test_view_duplicates() {
    let base = vec![1, 2, 3, 4];
    let err = MaskedView::new(&base, vec![2, 1, 2]).unwrap_err();

    assert!(matches!(err, PruneError::InvalidRemovalSet(_)));
    assert!(err.to_string().contains("duplicate"));
}

/// Test a non-empty removal set over an empty base is rejected.
#[test]
fn test_view_empty_base() {
    let base: Vec<f64> = Vec::new();

    assert!(MaskedView::new(&base, vec![0]).is_err());
    assert!(MaskedView::new(&base, Vec::new()).unwrap().is_empty());
}

/// Test the view outlives the caller's removal buffer.
#[test]
fn test_view_owns_removal() {
    let base = vec![1, 2, 3, 4];
    let view = {
        let removal = vec![1, 2];
        MaskedView::new(&base, removal.iter().copied()).unwrap()
    };

    assert_eq!(view, vec![1, 4]);
}
