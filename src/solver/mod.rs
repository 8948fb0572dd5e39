// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sandwich solver with forbidden-edge relaxation.
//!
//! The forbidden graph handed in by a pedigree builder is sometimes stricter
//! than any drawable layout allows. Rather than give up, the solver treats
//! forbidden edges as soft: when the instance as given has no realization it
//! retries with 1, 2, ... forbidden edges removed, enumerating the removed
//! sets in lexicographic order of the sorted edge list, and returns the first
//! success. The result therefore removes as few forbidden edges as possible.
//!
//! # Example
//!
//! ```
//! use pedigree_sandwich::{SandwichInstance, SandwichSolver};
//!
//! let instance = SandwichInstance::from_sets(
//!     ["A", "B", "C"],
//!     [("A", "B"), ("B", "C")],
//!     Vec::<(&str, &str)>::new(),
//! )
//! .unwrap();
//!
//! let mut solver = SandwichSolver::default();
//! let solution = solver.solve(&instance).unwrap();
//! assert_eq!(solution.intervals.len(), 3);
//! assert!(solution.removed_edges.is_empty());
//! ```

pub mod config;

pub use config::SolverConfig;

use crate::engine::{Counters, SearchEngine, Statistics};
use crate::geometry::IntervalForVertex;
use crate::graph::Edge;
use crate::instance::SandwichInstance;
use itertools::Itertools;
use std::fmt::Display;
use tracing::{debug, info};

/// A layout found by [`SandwichSolver::solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<V> {
    /// One interval per vertex, in placement order.
    pub intervals: Vec<IntervalForVertex<V>>,

    /// Forbidden edges that had to be dropped, empty if none.
    pub removed_edges: Vec<(V, V)>,
}

impl<V> Solution<V> {
    /// Vertices in placement order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.intervals.iter().map(|interval| &interval.vertex)
    }

    pub fn is_relaxed(&self) -> bool {
        !self.removed_edges.is_empty()
    }

    pub fn into_intervals(self) -> Vec<IntervalForVertex<V>> {
        self.intervals
    }
}

/// Finds realizations of sandwich instances.
#[derive(Debug, Clone)]
pub struct SandwichSolver {
    config: SolverConfig,
    engine: SearchEngine,
}

impl Default for SandwichSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl SandwichSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            engine: SearchEngine::new(config.max_width, config.max_iterations),
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Counters of the last [`solve`](Self::solve) or [`try_solve`](Self::try_solve).
    pub fn statistics(&self) -> &Statistics {
        self.engine.statistics()
    }

    /// Lay out `instance`, relaxing forbidden edges if needed.
    ///
    /// Returns `None` when no realization exists even with every allowed
    /// removal of forbidden edges tried.
    pub fn solve<V: Clone + Display>(&mut self, instance: &SandwichInstance<V>) -> Option<Solution<V>> {
        self.engine.statistics_mut().reset();

        if let Some(intervals) = self.search(instance) {
            return Some(Solution {
                intervals,
                removed_edges: Vec::new(),
            });
        }
        if !self.config.relax_forbidden_edges {
            return None;
        }

        let edges = instance.forbidden_graph().edges();
        info!(
            "sandwich forbidden graph edges: {}; {}",
            edges.len(),
            describe_edges(instance, &edges)
        );

        let max_count = self
            .config
            .max_removed_edges
            .map_or(edges.len(), |limit| limit.min(edges.len()));

        for count in 1..=max_count {
            // Lexicographic in the sorted edge list.
            for removed in edges.iter().copied().combinations(count) {
                debug!("trying to remove edges: {}", describe_edges(instance, &removed));
                self.engine
                    .statistics_mut()
                    .increment_counter(Counters::Relaxations);

                let relaxed = instance.without_forbidden_edges(&removed);
                if let Some(intervals) = self.search(&relaxed) {
                    info!("removed {} forbidden edges", count);
                    return Some(Solution {
                        intervals,
                        removed_edges: removed.iter().map(|&edge| instance.endpoints(edge)).collect(),
                    });
                }
            }
        }

        None
    }

    /// Lay out `instance` as given, without relaxation.
    pub fn try_solve<V: Clone>(&mut self, instance: &SandwichInstance<V>) -> Option<Vec<IntervalForVertex<V>>> {
        self.engine.statistics_mut().reset();
        self.search(instance)
    }

    fn search<V: Clone>(&mut self, instance: &SandwichInstance<V>) -> Option<Vec<IntervalForVertex<V>>> {
        let intervals = self
            .engine
            .search(instance.required_graph(), instance.forbidden_graph())
            .into_intervals()?;
        Some(
            intervals
                .into_iter()
                .map(|interval| interval.map_vertex(|id| instance.vertex(id).clone()))
                .collect(),
        )
    }
}

fn describe_edges<V: Clone + Display>(instance: &SandwichInstance<V>, edges: &[Edge]) -> String {
    edges
        .iter()
        .map(|&edge| {
            let (a, b) = instance.endpoints(edge);
            format!("({}, {})", a, b)
        })
        .collect::<Vec<_>>()
        .join(", ")
}
