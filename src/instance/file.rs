// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! JSON instance files.
//!
//! ```json
//! {
//!   "vertices": ["dad", "mom", "kid", "m{dad,mom}", "s{kid}"],
//!   "required": [["dad", "m{dad,mom}"], ["mom", "m{dad,mom}"],
//!                ["m{dad,mom}", "s{kid}"], ["kid", "s{kid}"]],
//!   "forbidden": [["dad", "mom"]]
//! }
//! ```
//!
//! `forbidden` may be omitted.

use crate::error::SandwichError;
use crate::instance::SandwichInstance;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Serialized form of an instance with string vertices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceFile {
    pub vertices: Vec<String>,
    pub required: Vec<(String, String)>,
    #[serde(default)]
    pub forbidden: Vec<(String, String)>,
}

impl InstanceFile {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SandwichError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(text: &str) -> Result<Self, SandwichError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read an instance file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SandwichError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn to_json(&self) -> Result<String, SandwichError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the instance, validating every edge endpoint.
    pub fn into_instance(self) -> Result<SandwichInstance<String>, SandwichError> {
        SandwichInstance::from_sets(self.vertices, self.required, self.forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_forbidden() {
        let file = InstanceFile::from_json(
            r#"{"vertices": ["a", "b"], "required": [["a", "b"]]}"#,
        )
        .unwrap();
        assert!(file.forbidden.is_empty());
        let instance = file.into_instance().unwrap();
        assert_eq!(instance.required_graph().edge_count(), 1);
    }

    #[test]
    fn test_json_round_trip() {
        let file = InstanceFile {
            vertices: vec!["x".into(), "y".into()],
            required: vec![],
            forbidden: vec![("x".into(), "y".into())],
        };
        let text = file.to_json().unwrap();
        assert_eq!(InstanceFile::from_json(&text).unwrap(), file);
    }

    #[test]
    fn test_bad_json() {
        let result = InstanceFile::from_json(r#"{"vertices": 3}"#);
        assert!(matches!(result, Err(SandwichError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = InstanceFile::load("/nonexistent/instance.json");
        assert!(matches!(result, Err(SandwichError::Io(_))));
    }

    #[test]
    fn test_unknown_vertex_in_file() {
        let file = InstanceFile::from_json(
            r#"{"vertices": ["a"], "required": [["a", "b"]]}"#,
        )
        .unwrap();
        assert!(matches!(
            file.into_instance(),
            Err(SandwichError::UnknownVertex { .. })
        ));
    }
}
