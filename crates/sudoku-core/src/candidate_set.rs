//! A bitset of candidate values for one cell.

use std::fmt::{self, Debug};

/// The set of values still possible for an empty cell, or the empty set for
/// an assigned one.
///
/// Backed by a single `u16`, since the largest supported puzzle (16×16) has
/// 16 possible values and `u16` covers all of 4, 9, and 16 in one
/// representation. Unlike a fixed 9-digit bitset, the "full" mask is not a
/// compile-time constant: it is derived from the puzzle's `size` at
/// construction time, and every operation that could otherwise silently
/// accept an out-of-range value is checked against that `size`.
///
/// Bit `n - 1` represents value `n`, for `n` in `1..=size`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateSet {
    bits: u16,
    size: u8,
}

impl CandidateSet {
    /// Returns the empty set for a puzzle of the given size.
    #[must_use]
    pub const fn empty(size: u8) -> Self {
        Self { bits: 0, size }
    }

    /// Returns the full set (every value `1..=size`) for a puzzle of the given size.
    #[must_use]
    pub const fn full(size: u8) -> Self {
        Self {
            bits: Self::full_mask(size),
            size,
        }
    }

    const fn full_mask(size: u8) -> u16 {
        if size >= 16 {
            0xFFFF
        } else {
            (1u16 << size) - 1
        }
    }

    /// The puzzle size this set was constructed for.
    #[must_use]
    pub const fn size(self) -> u8 {
        self.size
    }

    const fn is_valid(self, value: u8) -> bool {
        value >= 1 && value <= self.size
    }

    const fn bit(self, value: u8) -> u16 {
        1 << (value - 1)
    }

    /// Returns `true` if `value` is in the set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is `0` or greater than this set's `size`.
    #[must_use]
    pub fn contains(self, value: u8) -> bool {
        assert!(self.is_valid(value), "value {value} out of range");
        self.bits & self.bit(value) != 0
    }

    /// Inserts `value` into the set, returning `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `value` is `0` or greater than this set's `size`.
    pub fn insert(&mut self, value: u8) -> bool {
        assert!(self.is_valid(value), "value {value} out of range");
        let bit = self.bit(value);
        let changed = self.bits & bit == 0;
        self.bits |= bit;
        changed
    }

    /// Removes `value` from the set, returning `true` if it was present.
    ///
    /// # Panics
    ///
    /// Panics if `value` is `0` or greater than this set's `size`.
    pub fn remove(&mut self, value: u8) -> bool {
        assert!(self.is_valid(value), "value {value} out of range");
        let bit = self.bit(value);
        let changed = self.bits & bit != 0;
        self.bits &= !bit;
        changed
    }

    /// Removes every value in the set.
    pub const fn clear(&mut self) {
        self.bits = 0;
    }

    /// Returns `true` if the set has no values.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the number of values in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.bits.count_ones()
    }

    /// Returns the smallest value in the set, or `None` if empty.
    #[must_use]
    pub const fn first(self) -> Option<u8> {
        if self.bits == 0 {
            None
        } else {
            Some(self.bits.trailing_zeros() as u8 + 1)
        }
    }

    /// Returns `true` if `self` and `other` share no values.
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.bits & other.bits == 0
    }

    /// Returns `true` if every value in `self` is also in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// Returns `true` if every value in `other` is also in `self`.
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        other.is_subset(self)
    }

    /// Returns the union of `self` and `other`.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
            size: self.size,
        }
    }

    /// Returns the intersection of `self` and `other`.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
            size: self.size,
        }
    }

    /// Returns the values in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
            size: self.size,
        }
    }

    /// Returns an iterator over the values in the set, in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        let bits = self.bits;
        (1..=self.size).filter(move |&v| bits & (1 << (v - 1)) != 0)
    }
}

impl Debug for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl IntoIterator for CandidateSet {
    type Item = u8;
    type IntoIter = Box<dyn Iterator<Item = u8>>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl FromIterator<u8> for CandidateSet {
    /// Builds a set from an iterator of values, inferring `size` as the
    /// largest power-of-two-minus-one bound (9 or 16) that fits every
    /// yielded value; callers that need an exact `size` (including sizes
    /// smaller than the largest value, e.g. size 4) should build with
    /// [`CandidateSet::empty`] and `insert` instead.
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let values: Vec<u8> = iter.into_iter().collect();
        let max = values.iter().copied().max().unwrap_or(1);
        let size = if max <= 4 { 4 } else if max <= 9 { 9 } else { 16 };
        let mut set = Self::empty(size);
        for v in values {
            set.insert(v);
        }
        set
    }
}
