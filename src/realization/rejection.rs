// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reasons a realization refuses to take a vertex.

use crate::geometry::VertexId;
use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// Why [`Realization::check_extend`](super::Realization::check_extend) rejected a vertex.
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, PartialEq, Eq, EnumCountMacro)]
pub enum ExtendRejection {
    /// The vertex is already in the domain.
    AlreadyPlaced { vertex: VertexId },

    /// Too many vertices would be active after placing the vertex.
    WidthExceeded {
        vertex: VertexId,
        active: usize,
        max_width: usize,
    },

    /// A forbidden partner of the vertex is still active.
    ForbiddenEdge { vertex: VertexId, partner: VertexId },

    /// Placing the vertex would change the dangling edges of an active vertex
    /// by more than the vertex itself.
    OldDanglingChanged { vertex: VertexId, active: VertexId },

    /// The vertex would connect to a placed neighbour that is no longer active.
    NewDanglingInvalid { vertex: VertexId },

    /// The active set after placing the vertex is not explained by dangling edges alone.
    NewActiveInvalid { vertex: VertexId },
}

impl ExtendRejection {
    /// Position of the variant, for per-reason counters.
    pub fn index(&self) -> usize {
        match self {
            ExtendRejection::AlreadyPlaced { .. } => 0,
            ExtendRejection::WidthExceeded { .. } => 1,
            ExtendRejection::ForbiddenEdge { .. } => 2,
            ExtendRejection::OldDanglingChanged { .. } => 3,
            ExtendRejection::NewDanglingInvalid { .. } => 4,
            ExtendRejection::NewActiveInvalid { .. } => 5,
        }
    }

    /// The vertex that was rejected.
    pub fn vertex(&self) -> VertexId {
        match *self {
            ExtendRejection::AlreadyPlaced { vertex }
            | ExtendRejection::WidthExceeded { vertex, .. }
            | ExtendRejection::ForbiddenEdge { vertex, .. }
            | ExtendRejection::OldDanglingChanged { vertex, .. }
            | ExtendRejection::NewDanglingInvalid { vertex }
            | ExtendRejection::NewActiveInvalid { vertex } => vertex,
        }
    }
}

impl fmt::Display for ExtendRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtendRejection::AlreadyPlaced { vertex } => {
                write!(f, "Vertex {} is already placed", vertex)
            }
            ExtendRejection::WidthExceeded {
                vertex,
                active,
                max_width,
            } => {
                write!(
                    f,
                    "Placing {} leaves {} active vertices (max width {})",
                    vertex, active, max_width
                )
            }
            ExtendRejection::ForbiddenEdge { vertex, partner } => {
                write!(f, "Forbidden partner {} of {} is still active", partner, vertex)
            }
            ExtendRejection::OldDanglingChanged { vertex, active } => {
                write!(
                    f,
                    "Placing {} changes the dangling edges of active vertex {}",
                    vertex, active
                )
            }
            ExtendRejection::NewDanglingInvalid { vertex } => {
                write!(f, "Vertex {} has a placed neighbour that is no longer active", vertex)
            }
            ExtendRejection::NewActiveInvalid { vertex } => {
                write!(f, "Placing {} changes the active set unexpectedly", vertex)
            }
        }
    }
}
