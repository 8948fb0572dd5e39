// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Undirected adjacency-set graphs over vertex handles.
//!
//! Each instance carries two of these over the same vertex handles: the
//! required graph and the forbidden graph. Neighbour sets are
//! [`VertexSet`]s so the realization can take set differences against its
//! domain without allocating per element.

use crate::geometry::{VertexId, VertexSet};
use std::fmt;

/// An undirected edge, stored with the smaller handle first.
///
/// The derived ordering is lexicographic on `(lo, hi)`, which is the
/// enumeration order of the relaxation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    lo: VertexId,
    hi: VertexId,
}

impl Edge {
    /// Create an edge; endpoint order does not matter.
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub fn endpoints(self) -> (VertexId, VertexId) {
        (self.lo, self.hi)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lo, self.hi)
    }
}

/// An undirected graph over the handles `0..len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: Vec<VertexSet>,
}

impl AdjacencyGraph {
    /// Create a graph with `len` isolated vertices.
    pub fn new(len: usize) -> Self {
        Self {
            adjacency: vec![VertexSet::with_capacity(len); len],
        }
    }

    /// Create a graph with `len` vertices and the given edges.
    ///
    /// # Panics
    ///
    /// Panics if an endpoint is `>= len`.
    pub fn from_edges(len: usize, edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut graph = Self::new(len);
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Add a vertex and return its handle.
    pub fn add_node(&mut self) -> VertexId {
        let id = VertexId::new(self.adjacency.len());
        let capacity = self.adjacency.len() + 1;
        for neighbors in self.adjacency.iter_mut() {
            grow(neighbors, capacity);
        }
        self.adjacency.push(VertexSet::with_capacity(capacity));
        id
    }

    /// Add an undirected edge. Adding an existing edge is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if an endpoint is not a vertex of this graph.
    pub fn add_edge(&mut self, edge: Edge) {
        let (a, b) = edge.endpoints();
        self.adjacency[a.index()].insert(b);
        self.adjacency[b.index()].insert(a);
    }

    /// Remove an undirected edge. Removing a missing edge is a no-op.
    pub fn remove_edge(&mut self, edge: Edge) {
        let (a, b) = edge.endpoints();
        if b.index() < self.len() {
            self.adjacency[a.index()].remove(b);
            self.adjacency[b.index()].remove(a);
        }
    }

    /// A copy of this graph without the given edges.
    pub fn without_edges(&self, edges: &[Edge]) -> Self {
        let mut graph = self.clone();
        for &edge in edges {
            graph.remove_edge(edge);
        }
        graph
    }

    pub fn contains_edge(&self, edge: Edge) -> bool {
        let (a, b) = edge.endpoints();
        a.index() < self.len() && self.adjacency[a.index()].contains(b)
    }

    /// Neighbours of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a vertex of this graph.
    pub fn neighbors(&self, vertex: VertexId) -> &VertexSet {
        &self.adjacency[vertex.index()]
    }

    /// All edges, each reported once, in ascending order.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for (index, neighbors) in self.adjacency.iter().enumerate() {
            let vertex = VertexId::new(index);
            for other in neighbors.iter().filter(|&other| other >= vertex) {
                edges.push(Edge::new(vertex, other));
            }
        }
        edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }
}

// Widen a set built for a smaller graph so it can hold the new handle.
fn grow(set: &mut VertexSet, capacity: usize) {
    if set.capacity() < capacity {
        let members: Vec<VertexId> = set.iter().collect();
        *set = VertexSet::from_vertices(capacity, &members);
    }
}
