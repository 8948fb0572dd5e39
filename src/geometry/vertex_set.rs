// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! VertexSet type for representing sets of vertices as bitsets.
//!
//! A VertexSet is a compact representation of a set of vertex handles using a
//! bitset, where bit i represents the presence of vertex i. Pedigrees routinely
//! have more than 64 vertices once mating and sibship units are added, so the
//! set is spread over as many u64 words as the instance needs.
//!
//! Two sets with the same members compare and hash equal regardless of the
//! order in which the members were inserted, which makes a VertexSet the
//! memo key for "same placed vertices, different placement order".
//!
//! # Examples
//!
//! ```
//! use pedigree_sandwich::geometry::{VertexId, VertexSet};
//!
//! let mut set = VertexSet::with_capacity(100);
//! set.insert(VertexId::new(0));
//! set.insert(VertexId::new(70));
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(VertexId::new(70)));
//! assert!(!set.contains(VertexId::new(3)));
//! assert_eq!(format!("{}", set), "{0, 70}");
//! ```

use crate::geometry::VertexId;
use std::fmt;

/// A set of vertices represented as a bitset.
///
/// Uses a vector of u64 words sized for `capacity` vertex handles.
/// Bit i (across all words) is set if vertex i is in the set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexSet {
    words: Vec<u64>,
    capacity: usize,
}

impl VertexSet {
    /// Create an empty set able to hold handles `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(64)],
            capacity,
        }
    }

    /// Create a set containing all handles `0..capacity`.
    pub fn full(capacity: usize) -> Self {
        let mut set = Self::with_capacity(capacity);

        let complete_words = capacity / 64;
        for word in set.words.iter_mut().take(complete_words) {
            *word = u64::MAX;
        }

        let remaining_bits = capacity % 64;
        if remaining_bits > 0 {
            set.words[complete_words] = (1u64 << remaining_bits) - 1;
        }

        set
    }

    /// Create a set from a slice of handles.
    ///
    /// # Panics
    ///
    /// Panics if any handle is `>= capacity`.
    pub fn from_vertices(capacity: usize, vertices: &[VertexId]) -> Self {
        let mut set = Self::with_capacity(capacity);
        for &vertex in vertices {
            set.insert(vertex);
        }
        set
    }

    /// Number of handles this set can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if the set contains a specific vertex.
    ///
    /// Handles beyond the capacity are never contained.
    pub fn contains(&self, vertex: VertexId) -> bool {
        let index = vertex.index();
        if index >= self.capacity {
            return false;
        }
        (self.words[index / 64] >> (index % 64)) & 1 != 0
    }

    /// Insert a vertex into the set.
    ///
    /// # Panics
    ///
    /// Panics if `vertex.index() >= capacity`.
    pub fn insert(&mut self, vertex: VertexId) {
        let index = self.checked_index(vertex);
        self.words[index / 64] |= 1u64 << (index % 64);
    }

    /// Remove a vertex from the set.
    ///
    /// # Panics
    ///
    /// Panics if `vertex.index() >= capacity`.
    pub fn remove(&mut self, vertex: VertexId) {
        let index = self.checked_index(vertex);
        self.words[index / 64] &= !(1u64 << (index % 64));
    }

    fn checked_index(&self, vertex: VertexId) -> usize {
        let index = vertex.index();
        assert!(
            index < self.capacity,
            "VertexId out of range: {} >= {}",
            index,
            self.capacity
        );
        index
    }

    /// Get the number of vertices in the set (population count).
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Iterate over all vertices in the set.
    ///
    /// Handles are yielded in ascending order (0, 1, 2, ...).
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.words.iter().enumerate().flat_map(|(word_idx, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let bit_idx = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(VertexId::new(word_idx * 64 + bit_idx))
            })
        })
    }

    /// Returns the smallest vertex in the set.
    pub fn first(&self) -> Option<VertexId> {
        self.iter().next()
    }

    /// Compute the union of two sets.
    pub fn union(&self, other: &Self) -> Self {
        self.zip_words(other, |a, b| a | b)
    }

    /// Compute the intersection of two sets.
    pub fn intersection(&self, other: &Self) -> Self {
        self.zip_words(other, |a, b| a & b)
    }

    /// Compute the difference of two sets (self - other).
    pub fn difference(&self, other: &Self) -> Self {
        self.zip_words(other, |a, b| a & !b)
    }

    /// Returns `true` if the two sets share at least one vertex.
    pub fn intersects(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .any(|(a, b)| a & b != 0)
    }

    /// Returns `true` if every vertex of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.words.iter().enumerate().all(|(i, &a)| {
            let b = other.words.get(i).copied().unwrap_or(0);
            a & !b == 0
        })
    }

    // The result has the capacity of `self`; missing words of `other` read as 0.
    fn zip_words(&self, other: &Self, op: impl Fn(u64, u64) -> u64) -> Self {
        let words = self
            .words
            .iter()
            .enumerate()
            .map(|(i, &a)| op(a, other.words.get(i).copied().unwrap_or(0)))
            .collect();
        Self {
            words,
            capacity: self.capacity,
        }
    }
}

impl fmt::Display for VertexSet {
    /// Format a vertex set as "{0, 5, 12}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for vertex in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", vertex.index())?;
            first = false;
        }
        write!(f, "}}")
    }
}
