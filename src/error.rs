// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Errors raised while building sandwich instances.
//!
//! Failing to find a layout is not an error: the solver reports it as `None`.

use thiserror::Error;

/// Instance construction errors
#[derive(Debug, Error)]
pub enum SandwichError {
    /// An edge names a vertex that is not in the vertex set
    #[error("Edge ({first}, {second}) uses vertex '{vertex}' which is not in the vertex set")]
    UnknownVertex {
        /// The missing endpoint
        vertex: String,
        /// First endpoint of the offending edge
        first: String,
        /// Second endpoint of the offending edge
        second: String,
    },

    /// IO error reading an instance file
    #[error("Failed to read instance file: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse instance JSON: {0}")]
    Json(#[from] serde_json::Error),
}
