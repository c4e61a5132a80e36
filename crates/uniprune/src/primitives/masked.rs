//! Order-preserving masked views over borrowed sequences.
//!
//! ## Purpose
//!
//! This module provides [`MaskedView`], a read-only projection of a base
//! sequence with a set of positions removed. Pruning candidates and the final
//! pruning result are both expressed as masked views, so no sample data is
//! ever copied during the search.
//!
//! ## Design notes
//!
//! * **Borrowed base, owned mask**: The view borrows the base slice and owns a
//!   sorted copy of the removal indices. The caller's removal buffer can be
//!   dropped or reused as soon as the view is built.
//! * **Skip walk**: Iteration advances a base cursor and a removal cursor
//!   together, skipping every base position that is present in the mask.
//! * **Arbitrary offsets**: Iterators positioned at a logical offset replay the
//!   skip walk from the start; logical and base positions are not assumed to
//!   be in bijection.
//!
//! ## Key concepts
//!
//! For base `[1, 2, 3, 4, 5, 6]` and removal set `{0, 2, 4}` the view is
//! `[2, 4, 6]`; logical position `1` maps to base position `3`.
//!
//! ## Invariants
//!
//! * Removal indices are sorted ascending, unique and below `base.len()`.
//! * `view.len() == base.len() - removed.len()`.
//! * Retained elements appear in base order.
//!
//! ## Non-goals
//!
//! * This module does not mutate or copy the base sequence.
//! * This module does not choose which positions to remove.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::borrow::Borrow;
use core::fmt::{Debug, Formatter, Result as FmtResult};
use core::iter::FusedIterator;
use core::ops::Index;

// Internal dependencies
use crate::primitives::errors::PruneError;

// ============================================================================
// Masked View
// ============================================================================

/// Read-only view of `base` with the positions in a removal set skipped.
pub struct MaskedView<'a, T> {
    base: &'a [T],
    removed: Vec<usize>,
}

impl<'a, T> MaskedView<'a, T> {
    /// Build a view of `base` without the positions listed in `removal`.
    ///
    /// The removal indices may be given in any order; they are collected and
    /// sorted. Any index at or beyond `base.len()`, or any repeated index,
    /// yields [`PruneError::InvalidRemovalSet`].
    pub fn new<R>(base: &'a [T], removal: R) -> Result<Self, PruneError>
    where
        R: IntoIterator<Item = usize>,
    {
        let mut removed: Vec<usize> = removal.into_iter().collect();
        removed.sort_unstable();
        check_removal_set(base.len(), &removed)?;
        Ok(Self { base, removed })
    }

    /// Build a view from indices already known to be sorted, unique and in range.
    pub(crate) fn from_sorted(base: &'a [T], removed: Vec<usize>) -> Self {
        debug_assert!(check_removal_set(base.len(), &removed).is_ok());
        Self { base, removed }
    }

    /// Number of retained elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.base.len() - self.removed.len()
    }

    /// Whether every element of the base has been removed (or the base is empty).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The borrowed base sequence.
    #[inline]
    pub fn base(&self) -> &'a [T] {
        self.base
    }

    /// Sorted removal indices.
    #[inline]
    pub fn removed(&self) -> &[usize] {
        &self.removed
    }

    /// Consume the view, returning its sorted removal indices.
    pub fn into_removed(self) -> Vec<usize> {
        self.removed
    }

    /// Iterate over the retained elements in base order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::over(self.base, &self.removed)
    }

    /// Iterate over the retained elements starting at logical position `offset`.
    ///
    /// An offset at or past `len()` yields an empty iterator.
    pub fn iter_from(&self, offset: usize) -> Iter<'_, T> {
        Iter::at(self.base, &self.removed, offset)
    }

    /// Base indices of the retained elements, ascending.
    pub fn kept_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.base.len()).filter(move |i| self.removed.binary_search(i).is_err())
    }

    /// Base position of the element at logical `position`.
    ///
    /// Walks the sorted removal set, stepping past every removed index at or
    /// before the running base position.
    pub fn base_index(&self, position: usize) -> Option<usize> {
        if position >= self.len() {
            return None;
        }

        let mut idx = position;
        for &r in &self.removed {
            if r <= idx {
                idx += 1;
            } else {
                break;
            }
        }

        Some(idx)
    }

    /// Element at logical `position`, or `None` when out of range.
    #[inline]
    pub fn get(&self, position: usize) -> Option<&'a T> {
        let base = self.base;
        self.base_index(position).map(|i| &base[i])
    }

    /// Element-wise equality against any iterable sequence.
    ///
    /// True when `other` has exactly `len()` elements and each equals the
    /// retained element at the same position.
    pub fn sequence_eq<I>(&self, other: I) -> bool
    where
        T: PartialEq,
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let mut other = other.into_iter();
        for item in self.iter() {
            match other.next() {
                Some(o) if o.borrow() == item => {}
                _ => return false,
            }
        }
        other.next().is_none()
    }

    /// Copy the retained elements into a new vector.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// Check that `removed` is sorted, duplicate-free and within `0..len`.
pub fn check_removal_set(len: usize, removed: &[usize]) -> Result<(), PruneError> {
    for pair in removed.windows(2) {
        if pair[0] == pair[1] {
            return Err(PruneError::InvalidRemovalSet(format!(
                "duplicate index {}",
                pair[0]
            )));
        }
        if pair[0] > pair[1] {
            return Err(PruneError::InvalidRemovalSet(format!(
                "indices not sorted: {} precedes {}",
                pair[0], pair[1]
            )));
        }
    }

    if let Some(&last) = removed.last() {
        if last >= len {
            return Err(PruneError::InvalidRemovalSet(format!(
                "index {} out of range for sequence of length {}",
                last, len
            )));
        }
    }

    Ok(())
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T> Clone for MaskedView<'_, T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base,
            removed: self.removed.clone(),
        }
    }
}

impl<T: Debug> Debug for MaskedView<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for MaskedView<'_, T> {
    type Output = T;

    fn index(&self, position: usize) -> &T {
        match self.get(position) {
            Some(item) => item,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                position
            ),
        }
    }
}

impl<'v, 'a, T> IntoIterator for &'v MaskedView<'a, T> {
    type Item = &'v T;
    type IntoIter = Iter<'v, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'b, T: PartialEq> PartialEq<MaskedView<'b, T>> for MaskedView<'_, T> {
    fn eq(&self, other: &MaskedView<'b, T>) -> bool {
        self.len() == other.len() && self.sequence_eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<[T]> for MaskedView<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.sequence_eq(other)
    }
}

impl<T: PartialEq> PartialEq<&[T]> for MaskedView<'_, T> {
    fn eq(&self, other: &&[T]) -> bool {
        self == *other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for MaskedView<'_, T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self == other.as_slice()
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for MaskedView<'_, T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self == other.as_slice()
    }
}

// ============================================================================
// Iterator
// ============================================================================

/// Forward iterator over the retained elements of a masked sequence.
pub struct Iter<'a, T> {
    base: &'a [T],
    removed: &'a [usize],

    // Next base position to yield (already past any removed run).
    base_pos: usize,

    // Index into `removed` of the first removal at or after `base_pos`.
    removal_pos: usize,

    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    /// Walk `base` skipping the sorted, unique, in-range positions in `removed`.
    #[inline]
    pub(crate) fn over(base: &'a [T], removed: &'a [usize]) -> Self {
        Self::at(base, removed, 0)
    }

    pub(crate) fn at(base: &'a [T], removed: &'a [usize], offset: usize) -> Self {
        debug_assert!(removed.len() <= base.len());
        let total = base.len() - removed.len();

        if offset >= total {
            return Self {
                base,
                removed,
                base_pos: base.len(),
                removal_pos: removed.len(),
                remaining: 0,
            };
        }

        let mut iter = Self {
            base,
            removed,
            base_pos: 0,
            removal_pos: 0,
            remaining: total,
        };
        iter.skip_removed();
        for _ in 0..offset {
            iter.base_pos += 1;
            iter.skip_removed();
        }
        iter.remaining = total - offset;
        iter
    }

    #[inline]
    fn skip_removed(&mut self) {
        while self.removal_pos < self.removed.len()
            && self.removed[self.removal_pos] == self.base_pos
        {
            self.removal_pos += 1;
            self.base_pos += 1;
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base,
            removed: self.removed,
            base_pos: self.base_pos,
            removal_pos: self.removal_pos,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let item = &self.base[self.base_pos];
        self.base_pos += 1;
        self.remaining -= 1;
        self.skip_removed();
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
