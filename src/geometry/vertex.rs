// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vertex handles.
//!
//! The solver never looks at the caller's vertex values. Each instance maps
//! its vertices onto dense identifiers `0..n`, assigned in ascending order of
//! the vertices' string form, so iterating identifiers in ascending order is
//! the deterministic search order.

use std::fmt;

/// Opaque handle of a vertex inside one [`SandwichInstance`](crate::SandwichInstance).
///
/// This is a newtype wrapper to keep vertex handles apart from the other
/// integers floating around the search (counts, widths, bit positions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    /// Create a handle from its index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the index (for array indexing).
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for VertexId {
    /// Format a handle as "v3".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}
