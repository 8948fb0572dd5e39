// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Interval sandwich instances.
//!
//! An instance is the immutable input of the solver: the vertices of one
//! family (persons, mating units and sibship units, or anything else the
//! caller wants laid out), the required graph and the forbidden graph.
//!
//! Vertices are mapped onto dense [`VertexId`] handles in ascending order of
//! their `Display` string. Everything below the instance works on handles;
//! the caller's vertices only come back in a [`Solution`](crate::Solution).
//!
//! # Example
//!
//! ```
//! use pedigree_sandwich::SandwichInstance;
//!
//! let instance = SandwichInstance::from_sets(
//!     ["mom", "dad", "mu"],
//!     [("mom", "mu"), ("dad", "mu")],
//!     [("mom", "dad")],
//! )
//! .unwrap();
//!
//! assert_eq!(instance.len(), 3);
//! assert_eq!(instance.required_graph().edge_count(), 2);
//! assert_eq!(instance.forbidden_graph().edge_count(), 1);
//! ```

pub mod file;

pub use file::InstanceFile;

use crate::error::SandwichError;
use crate::geometry::VertexId;
use crate::graph::{AdjacencyGraph, Edge};
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::Arc;

/// Vertices, required graph and forbidden graph of one layout problem.
///
/// Relaxed copies made by the solver share the vertex table and the required
/// graph with the instance they were made from.
#[derive(Debug, Clone)]
pub struct SandwichInstance<V> {
    vertices: Arc<[V]>,
    index: Arc<HashMap<V, VertexId>>,
    required_graph: Arc<AdjacencyGraph>,
    forbidden_graph: AdjacencyGraph,
}

impl<V> SandwichInstance<V>
where
    V: Clone + Eq + Hash + Display,
{
    /// Build an instance from a vertex collection and two edge lists.
    ///
    /// Repeated vertices are kept once. Every edge endpoint must be one of
    /// `all_vertices`.
    ///
    /// # Errors
    ///
    /// Returns [`SandwichError::UnknownVertex`] for an edge whose endpoint is
    /// not in `all_vertices`.
    pub fn from_sets<I, R, F>(
        all_vertices: I,
        required_edges: R,
        forbidden_edges: F,
    ) -> Result<Self, SandwichError>
    where
        I: IntoIterator<Item = V>,
        R: IntoIterator<Item = (V, V)>,
        F: IntoIterator<Item = (V, V)>,
    {
        let mut keyed: Vec<(String, V)> = Vec::new();
        let mut seen = std::collections::HashSet::new();
        for vertex in all_vertices {
            if seen.insert(vertex.clone()) {
                keyed.push((vertex.to_string(), vertex));
            }
        }
        // Stable: vertices with equal strings keep their input order.
        keyed.sort_by(|a, b| a.0.cmp(&b.0));

        let vertices: Vec<V> = keyed.into_iter().map(|(_, vertex)| vertex).collect();
        let index: HashMap<V, VertexId> = vertices
            .iter()
            .enumerate()
            .map(|(i, vertex)| (vertex.clone(), VertexId::new(i)))
            .collect();

        let required_graph = build_graph(&index, vertices.len(), required_edges)?;
        let forbidden_graph = build_graph(&index, vertices.len(), forbidden_edges)?;

        Ok(Self {
            vertices: vertices.into(),
            index: Arc::new(index),
            required_graph: Arc::new(required_graph),
            forbidden_graph,
        })
    }

    /// Handle of a vertex, if it belongs to this instance.
    pub fn id_of(&self, vertex: &V) -> Option<VertexId> {
        self.index.get(vertex).copied()
    }

    /// The handle pair of an edge between two vertices of this instance.
    pub fn edge(&self, a: &V, b: &V) -> Option<Edge> {
        Some(Edge::new(self.id_of(a)?, self.id_of(b)?))
    }
}

impl<V: Clone> SandwichInstance<V> {
    /// The caller's vertex behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this instance.
    pub fn vertex(&self, id: VertexId) -> &V {
        &self.vertices[id.index()]
    }

    /// All vertices, indexed by handle.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// All handles in ascending order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::new)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn required_graph(&self) -> &AdjacencyGraph {
        &self.required_graph
    }

    pub fn forbidden_graph(&self) -> &AdjacencyGraph {
        &self.forbidden_graph
    }

    /// The caller's vertices at both ends of an edge.
    pub fn endpoints(&self, edge: Edge) -> (V, V) {
        let (a, b) = edge.endpoints();
        (self.vertex(a).clone(), self.vertex(b).clone())
    }

    /// The same vertices and required graph with some forbidden edges dropped.
    pub fn without_forbidden_edges(&self, edges: &[Edge]) -> Self {
        Self {
            vertices: Arc::clone(&self.vertices),
            index: Arc::clone(&self.index),
            required_graph: Arc::clone(&self.required_graph),
            forbidden_graph: self.forbidden_graph.without_edges(edges),
        }
    }
}

fn build_graph<V>(
    index: &HashMap<V, VertexId>,
    len: usize,
    edges: impl IntoIterator<Item = (V, V)>,
) -> Result<AdjacencyGraph, SandwichError>
where
    V: Eq + Hash + Display,
{
    let mut graph = AdjacencyGraph::new(len);
    for (a, b) in edges {
        let lookup = |vertex: &V| {
            index
                .get(vertex)
                .copied()
                .ok_or_else(|| SandwichError::UnknownVertex {
                    vertex: vertex.to_string(),
                    first: a.to_string(),
                    second: b.to_string(),
                })
        };
        graph.add_edge(Edge::new(lookup(&a)?, lookup(&b)?));
    }
    Ok(graph)
}
