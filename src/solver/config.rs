// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solver settings.

use crate::engine::MAX_ITERATIONS;
use crate::realization::DEFAULT_MAX_WIDTH;
use serde::{Deserialize, Serialize};

/// Settings for [`SandwichSolver`](super::SandwichSolver).
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Placing a vertex is refused once this many vertices would be active.
    pub max_width: usize,

    /// Pop limit of each inner search.
    pub max_iterations: usize,

    /// Retry with forbidden edges removed when the full instance fails.
    pub relax_forbidden_edges: bool,

    /// Largest number of forbidden edges removed at once (`None`: all of them).
    pub max_removed_edges: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_iterations: MAX_ITERATIONS,
            relax_forbidden_edges: true,
            max_removed_edges: None,
        }
    }
}

impl SolverConfig {
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_relaxation(mut self, relax_forbidden_edges: bool) -> Self {
        self.relax_forbidden_edges = relax_forbidden_edges;
        self
    }

    pub fn with_max_removed_edges(mut self, max_removed_edges: Option<usize>) -> Self {
        self.max_removed_edges = max_removed_edges;
        self
    }
}
