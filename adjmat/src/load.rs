//! Loading graphs from text
//!
//! The bracketed-row form produced by [`Graph::render`] parses back with
//! [`str::parse`]. With the `serde` feature a graph also (de)serializes as a
//! bare JSON array of rows, e.g. `[[0,1],[1,0]]`.

use crate::Graph;
use adjmat_core::{parse_rows, ParseGraphError};
use std::str::FromStr;

impl FromStr for Graph {
    type Err = ParseGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = parse_rows(s).inspect_err(|err| log::debug!("rejecting graph text: {err}"))?;
        Ok(Graph::from_rows(rows))
    }
}

#[cfg(feature = "serde")]
impl Graph {
    /// Load a graph from a JSON array of integer rows
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize the graph as a JSON array of integer rows
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
