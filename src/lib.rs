// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Interval sandwich solver for pedigree layout.
//!
//! A family pedigree is drawn by placing every person, mating unit and
//! sibship unit on a horizontal order line. Each of them claims an interval
//! on that line; intervals that overlap are drawn next to each other. The
//! layout must make every *required* pair adjacent and must never let a
//! *forbidden* pair be open at the same time. Finding such intervals is an
//! instance of the interval graph sandwich problem.
//!
//! # Architecture
//!
//! ## Immutable input
//!
//! - [`SandwichInstance`] - vertices, required graph, forbidden graph
//! - [`AdjacencyGraph`] - undirected graph over dense [`VertexId`] handles
//!
//! ## Search state
//!
//! - [`Realization`] - a partial placement, cloned on every branch
//! - [`SearchEngine`] - work-list search over realizations with a memo of
//!   visited placed-vertex sets and a hard iteration cap
//!
//! ## Driver
//!
//! - [`SandwichSolver`] - runs the engine, and when the instance as given
//!   fails, retries with the fewest possible forbidden edges removed
//!
//! # Example
//!
//! ```
//! use pedigree_sandwich::{SandwichInstance, SandwichSolver};
//!
//! // Two parents joined by a mating unit, one child in a sibship unit.
//! let instance = SandwichInstance::from_sets(
//!     ["dad", "mom", "m", "s", "kid"],
//!     [("dad", "m"), ("mom", "m"), ("m", "s"), ("s", "kid")],
//!     [("dad", "kid"), ("mom", "kid")],
//! )
//! .unwrap();
//!
//! let solution = SandwichSolver::default().solve(&instance).unwrap();
//! assert_eq!(solution.intervals.len(), 5);
//! for interval in &solution.intervals {
//!     println!("{}", interval);
//! }
//! ```
//!
//! # References
//!
//! - Tores, F. & Barillot, E. (2001). "The art of pedigree drawing: algorithmic
//!   aspects." Bioinformatics 17(2), 174-179.

pub mod engine;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod instance;
pub mod realization;
pub mod solver;

// Re-export commonly used types
pub use engine::{SearchEngine, SearchOutcome, Statistics, MAX_ITERATIONS};
pub use error::SandwichError;
pub use geometry::{Interval, IntervalForVertex, VertexId, VertexSet};
pub use graph::{AdjacencyGraph, Edge};
pub use instance::{InstanceFile, SandwichInstance};
pub use realization::{ExtendRejection, Realization, DEFAULT_MAX_WIDTH};
pub use solver::{SandwichSolver, Solution, SolverConfig};
