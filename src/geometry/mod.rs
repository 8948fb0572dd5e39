// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric primitives for pedigree layout.
//!
//! This module contains type-safe representations of the layout primitives:
//! - VertexId: Opaque handle of a pedigree vertex
//! - VertexSet: Bitset of vertex handles
//! - Interval: Half-open span on the shared order axis
//! - IntervalForVertex: The span claimed by one vertex

pub mod interval;
pub mod vertex;
pub mod vertex_set;

// Re-export for convenience
pub use interval::{Interval, IntervalForVertex};
pub use vertex::VertexId;
pub use vertex_set::VertexSet;
