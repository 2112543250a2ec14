//! Abstract interfaces for adjacency matrices
//!
//! Traits here are pure interfaces. The concrete value type lives in the
//! `adjmat` crate.

pub mod matrix;

pub use matrix::AdjacencyMatrix;
#[cfg(feature = "alloc")]
pub use matrix::GridOperations;
