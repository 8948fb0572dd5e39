// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Partial placements of an interval sandwich instance.
//!
//! A [`Realization`] places vertices one at a time on the shared order axis.
//! Each placed vertex owns an interval; the list of placed vertices (the
//! domain) keeps insertion order, which need not match left-to-right order.
//!
//! # Active and dangling
//!
//! A placed vertex is *active* while some required neighbour is still
//! unplaced. Those unplaced neighbours are its *dangling* edges. Active
//! vertices are the ones whose intervals still have to reach further right,
//! so their number is the width of the drawing at the current frontier.
//!
//! # Copy on branch
//!
//! Realizations borrow both graphs from the instance and own their domain and
//! intervals. Cloning is the branching primitive of the search: a clone can
//! be extended freely without disturbing its parent.

pub mod rejection;

pub use rejection::ExtendRejection;

use crate::geometry::{IntervalForVertex, VertexId, VertexSet};
use crate::graph::AdjacencyGraph;
use std::fmt;

/// Default bound on simultaneously active vertices.
pub const DEFAULT_MAX_WIDTH: usize = 3;

/// A partial assignment of vertices to intervals.
///
/// Invariant: `intervals[i]` is the interval of `domain[i]`.
#[derive(Debug, Clone)]
pub struct Realization<'g> {
    /// Required graph (shared with the instance and every other branch).
    graph: &'g AdjacencyGraph,

    /// Forbidden graph (shared with the instance and every other branch).
    forbidden_graph: &'g AdjacencyGraph,

    /// Intervals, parallel to `domain`.
    intervals: Vec<IntervalForVertex<VertexId>>,

    /// Placed vertices in insertion order.
    domain: Vec<VertexId>,

    /// The domain as a set.
    placed: VertexSet,

    /// Upper bound (exclusive) on the number of active vertices.
    max_width: usize,
}

impl<'g> Realization<'g> {
    /// Create an empty realization.
    pub fn new(
        graph: &'g AdjacencyGraph,
        forbidden_graph: &'g AdjacencyGraph,
        max_width: usize,
    ) -> Self {
        Self {
            graph,
            forbidden_graph,
            intervals: Vec::new(),
            domain: Vec::new(),
            placed: VertexSet::with_capacity(graph.len()),
            max_width,
        }
    }

    /// Create a realization holding one vertex on the unit interval.
    ///
    /// No admission check is made: every vertex may start a search.
    pub fn singleton(
        graph: &'g AdjacencyGraph,
        forbidden_graph: &'g AdjacencyGraph,
        vertex: VertexId,
        max_width: usize,
    ) -> Self {
        let mut realization = Self::new(graph, forbidden_graph, max_width);
        realization.push(IntervalForVertex::unplaced(vertex));
        realization
    }

    fn push(&mut self, interval: IntervalForVertex<VertexId>) {
        self.placed.insert(interval.vertex);
        self.domain.push(interval.vertex);
        self.intervals.push(interval);
    }

    pub fn graph(&self) -> &'g AdjacencyGraph {
        self.graph
    }

    pub fn forbidden_graph(&self) -> &'g AdjacencyGraph {
        self.forbidden_graph
    }

    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Placed vertices in insertion order.
    pub fn domain(&self) -> &[VertexId] {
        &self.domain
    }

    /// The placed vertices as a set, independent of insertion order.
    pub fn placed(&self) -> &VertexSet {
        &self.placed
    }

    /// Intervals in insertion order.
    pub fn intervals(&self) -> &[IntervalForVertex<VertexId>] {
        &self.intervals
    }

    pub fn into_intervals(self) -> Vec<IntervalForVertex<VertexId>> {
        self.intervals
    }

    pub fn len(&self) -> usize {
        self.domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// `true` once every vertex of the graph is placed.
    pub fn is_complete(&self) -> bool {
        self.domain.len() == self.graph.len()
    }

    pub fn is_placed(&self, vertex: VertexId) -> bool {
        self.placed.contains(vertex)
    }

    /// Interval of a placed vertex, or `None` if it is not placed.
    pub fn interval(&self, vertex: VertexId) -> Option<&IntervalForVertex<VertexId>> {
        if !self.placed.contains(vertex) {
            return None;
        }
        self.domain
            .iter()
            .position(|&v| v == vertex)
            .map(|index| &self.intervals[index])
    }

    /// Interval of a placed vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not placed. Asking for the interval of an
    /// unplaced vertex is a bug in the caller.
    pub fn get_interval(&self, vertex: VertexId) -> &IntervalForVertex<VertexId> {
        match self.interval(vertex) {
            Some(interval) => interval,
            None => panic!("Vertex {} is not placed in realization {}", vertex, self),
        }
    }

    fn get_interval_mut(&mut self, vertex: VertexId) -> &mut IntervalForVertex<VertexId> {
        let index = self
            .domain
            .iter()
            .position(|&v| v == vertex)
            .unwrap_or_else(|| panic!("Vertex {} is not placed", vertex));
        &mut self.intervals[index]
    }

    /// `true` if `v1`'s interval ends strictly before `v2`'s begins.
    pub fn is_in_interval_order(&self, v1: VertexId, v2: VertexId) -> bool {
        self.get_interval(v1)
            .interval
            .precedes(&self.get_interval(v2).interval)
    }

    /// `true` if no other placed vertex lies strictly to the right of `vertex`.
    pub fn is_maximal(&self, vertex: VertexId) -> bool {
        let interval = self.get_interval(vertex).interval;
        self.intervals
            .iter()
            .filter(|other| other.vertex != vertex)
            .all(|other| !interval.precedes(&other.interval))
    }

    /// Vertices at the right frontier of the layout.
    pub fn maximal_set(&self) -> VertexSet {
        let mut set = VertexSet::with_capacity(self.graph.len());
        for &vertex in &self.domain {
            if self.is_maximal(vertex) {
                set.insert(vertex);
            }
        }
        set
    }

    /// Required neighbours of `vertex` that are not placed yet.
    pub fn active_vertex_edges(&self, vertex: VertexId) -> VertexSet {
        self.graph.neighbors(vertex).difference(&self.placed)
    }

    /// Alias of [`active_vertex_edges`](Self::active_vertex_edges).
    pub fn dangling(&self, vertex: VertexId) -> VertexSet {
        self.active_vertex_edges(vertex)
    }

    /// `true` if `vertex` still has a dangling edge.
    pub fn is_active_vertex(&self, vertex: VertexId) -> bool {
        !self.graph.neighbors(vertex).is_subset(&self.placed)
    }

    /// All placed vertices that still have dangling edges.
    pub fn active_vertices(&self) -> VertexSet {
        let mut set = VertexSet::with_capacity(self.graph.len());
        for &vertex in &self.domain {
            if self.is_active_vertex(vertex) {
                set.insert(vertex);
            }
        }
        set
    }

    /// Every unplaced vertex some active vertex is waiting for.
    pub fn dangling_set(&self) -> VertexSet {
        let mut set = VertexSet::with_capacity(self.graph.len());
        for vertex in self.active_vertices().iter() {
            set = set.union(&self.dangling(vertex));
        }
        set
    }

    /// Number of other placed intervals overlapping the interval of `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not placed.
    pub fn degree(&self, vertex: VertexId) -> usize {
        let interval = self.get_interval(vertex).interval;
        self.intervals
            .iter()
            .filter(|other| other.vertex != vertex)
            .filter(|other| interval.intersection(&other.interval).is_some())
            .count()
    }

    /// `true` if `vertex` can be appended to this realization.
    pub fn can_extend(&self, vertex: VertexId) -> bool {
        self.check_extend(vertex).is_ok()
    }

    /// Admission check for appending `new_vertex`.
    ///
    /// The checks run against a temporary realization that holds
    /// `new_vertex` on a bare unit interval, so that active and dangling
    /// sets of the extended domain are defined. Some checks compare against
    /// the current realization and some against the temporary one.
    pub fn check_extend(&self, new_vertex: VertexId) -> Result<(), ExtendRejection> {
        if self.placed.contains(new_vertex) {
            return Err(ExtendRejection::AlreadyPlaced { vertex: new_vertex });
        }

        let mut temp = self.clone();
        temp.push(IntervalForVertex::unplaced(new_vertex));

        let current_active = self.active_vertices();
        let temp_active = temp.active_vertices();

        if temp_active.len() >= self.max_width {
            return Err(ExtendRejection::WidthExceeded {
                vertex: new_vertex,
                active: temp_active.len(),
                max_width: self.max_width,
            });
        }

        if let Some(partner) = self
            .forbidden_graph
            .neighbors(new_vertex)
            .intersection(&current_active)
            .first()
        {
            return Err(ExtendRejection::ForbiddenEdge {
                vertex: new_vertex,
                partner,
            });
        }

        // Placing the vertex may only resolve the vertex itself.
        let mut only_new = VertexSet::with_capacity(self.graph.len());
        only_new.insert(new_vertex);
        for active in current_active.iter() {
            let expected = self.dangling(active).difference(&only_new);
            if temp.dangling(active) != expected {
                return Err(ExtendRejection::OldDanglingChanged {
                    vertex: new_vertex,
                    active,
                });
            }
        }

        let new_edges = self
            .graph
            .neighbors(new_vertex)
            .difference(&current_active);
        if temp.dangling(new_vertex) != new_edges {
            return Err(ExtendRejection::NewDanglingInvalid { vertex: new_vertex });
        }

        let mut expected_active = VertexSet::with_capacity(self.graph.len());
        for vertex in current_active.union(&only_new).iter() {
            if !temp.dangling(vertex).is_empty() {
                expected_active.insert(vertex);
            }
        }
        if temp_active != expected_active {
            return Err(ExtendRejection::NewActiveInvalid { vertex: new_vertex });
        }

        Ok(())
    }

    /// Append `vertex` if [`can_extend`](Self::can_extend) allows it.
    ///
    /// Returns `false`, leaving the realization untouched, on rejection.
    pub fn extend(&mut self, vertex: VertexId) -> bool {
        if !self.can_extend(vertex) {
            return false;
        }
        self.force_extend(vertex);
        true
    }

    /// Append `vertex` without admission checks.
    ///
    /// The new interval starts half a unit right of the frontier and is one
    /// unit long. Every active vertex is stretched to end with it.
    ///
    /// `vertex` must not be placed yet; debug builds check this.
    pub fn force_extend(&mut self, vertex: VertexId) {
        debug_assert!(
            !self.placed.contains(vertex),
            "Vertex {} is already placed in realization {}",
            vertex,
            self
        );
        let p = if self.domain.is_empty() {
            0.0
        } else {
            let max_right = self
                .maximal_set()
                .iter()
                .map(|v| self.get_interval(v).right())
                .fold(f64::NEG_INFINITY, f64::max);
            max_right + 0.5
        };

        for active in self.active_vertices().iter() {
            self.get_interval_mut(active).interval.right = p + 1.0;
        }

        self.push(IntervalForVertex::new(vertex, p, p + 1.0));
    }
}

impl<'g> Realization<'g> {
    /// The domain as a set, each handle shown through `name`.
    ///
    /// Same layout as `Display`, but lets a caller print its own vertices,
    /// e.g. `realization.describe(|id| instance.vertex(id))`.
    pub fn describe<D: fmt::Display>(&self, name: impl Fn(VertexId) -> D) -> String {
        self.placed
            .iter()
            .map(|vertex| name(vertex).to_string())
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl fmt::Display for Realization<'_> {
    /// Format the domain as a set, e.g. "v0;v2;v5".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe(|vertex| vertex))
    }
}
