// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Work-list search for a complete realization.
//!
//! The engine looks for one placement order of all vertices that every
//! intermediate [`Realization`] admits. It does not backtrack in place:
//! each extension is tried on a clone of its parent, so abandoned branches
//! simply get dropped.
//!
//! # Algorithm
//!
//! 1. Seed a stack with one singleton realization per vertex, in ascending
//!    handle order (the last one is explored first).
//! 2. Pop a realization. For every unplaced vertex, in ascending handle
//!    order, check whether the realization admits it. If so, extend a clone.
//! 3. A clone covering all vertices is the answer. Otherwise push it, unless
//!    a realization with the same *set* of placed vertices was pushed before.
//! 4. Stop with no answer when the stack runs dry, or after
//!    [`MAX_ITERATIONS`] pops. An empty graph has no answer; a one-vertex
//!    graph is answered by its singleton.
//!
//! The memo is keyed by the placed set only; two realizations that placed
//! the same vertices in a different order count as the same state.

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::geometry::{IntervalForVertex, VertexId, VertexSet};
use crate::graph::AdjacencyGraph;
use crate::realization::{Realization, DEFAULT_MAX_WIDTH};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Maximum number of realizations popped by one search.
pub const MAX_ITERATIONS: usize = 10_000;

/// How a search ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// All vertices placed; intervals in placement order.
    Found(Vec<IntervalForVertex<VertexId>>),

    /// Every reachable realization was explored without covering all vertices.
    Exhausted { iterations: usize },

    /// The iteration cap was reached first.
    IterationLimit { iterations: usize },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn into_intervals(self) -> Option<Vec<IntervalForVertex<VertexId>>> {
        match self {
            SearchOutcome::Found(intervals) => Some(intervals),
            _ => None,
        }
    }
}

/// Search engine for one pair of required and forbidden graphs.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    /// Width bound handed to every realization.
    max_width: usize,

    /// Pops allowed before giving up.
    max_iterations: usize,

    statistics: Statistics,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WIDTH, MAX_ITERATIONS)
    }
}

impl SearchEngine {
    pub fn new(max_width: usize, max_iterations: usize) -> Self {
        Self {
            max_width,
            max_iterations,
            statistics: Statistics::new(),
        }
    }

    pub fn max_width(&self) -> usize {
        self.max_width
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Counters accumulated over every search run by this engine.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn statistics_mut(&mut self) -> &mut Statistics {
        &mut self.statistics
    }

    /// Search for a realization covering every vertex of `graph`.
    ///
    /// Both graphs must have the same number of vertices.
    pub fn search(&mut self, graph: &AdjacencyGraph, forbidden_graph: &AdjacencyGraph) -> SearchOutcome {
        debug_assert_eq!(graph.len(), forbidden_graph.len());
        self.statistics.increment_counter(Counters::Searches);

        // Nothing to seed the work list with.
        let len = graph.len();
        if len == 0 {
            return SearchOutcome::Exhausted { iterations: 0 };
        }

        let mut stack: Vec<Realization<'_>> = (0..len)
            .map(|index| {
                Realization::singleton(graph, forbidden_graph, VertexId::new(index), self.max_width)
            })
            .collect();

        if len == 1 {
            return SearchOutcome::Found(stack.remove(0).into_intervals());
        }

        let all = VertexSet::full(len);
        let mut visited: HashSet<VertexSet> = HashSet::new();
        let mut iterations = 0;

        loop {
            let Some(realization) = stack.pop() else {
                return SearchOutcome::Exhausted { iterations };
            };
            if iterations >= self.max_iterations {
                warn!("bailing at {} iterations...", iterations);
                self.statistics.increment_counter(Counters::Bailouts);
                return SearchOutcome::IterationLimit { iterations };
            }
            iterations += 1;
            self.statistics.increment_counter(Counters::Iterations);

            for vertex in all.difference(realization.placed()).iter() {
                if let Err(rejection) = realization.check_extend(vertex) {
                    self.statistics.record_rejection(&rejection);
                    continue;
                }

                let mut extended = realization.clone();
                extended.force_extend(vertex);
                self.statistics.increment_counter(Counters::Extensions);

                if extended.is_complete() {
                    debug!("sandwich iterations count: {}", iterations);
                    return SearchOutcome::Found(extended.into_intervals());
                }

                if visited.insert(extended.placed().clone()) {
                    stack.push(extended);
                } else {
                    self.statistics.increment_counter(Counters::DuplicateDomains);
                }
            }
        }
    }
}
