//! adjmat - Dense Integer Adjacency Matrices
//!
//! This library provides [`Graph`], a value type holding a graph's adjacency
//! matrix as rows of `i32` cells, with arithmetic, comparison and
//! increment/decrement operators that treat the matrix as a mathematical
//! object.
//!
//! ## Architecture
//!
//! - **adjmat-core**: error kinds, access traits, the bracketed-row text
//!   format and operand validation (`no_std`)
//! - **adjmat**: the concrete [`Graph`] value type and its operators
//!
//! ## Quick Start
//!
//! ```rust
//! use adjmat::{Graph, GraphError};
//!
//! fn example() -> Result<(), GraphError> {
//!     let mut g1 = Graph::new();
//!     g1.load(vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);
//!     let g2 = Graph::from_rows(vec![vec![0, 1, 1], vec![1, 0, 2], vec![1, 2, 0]]);
//!
//!     let sum = (&g1 + &g2)?;
//!     assert_eq!(sum.to_string(), "[0, 2, 1]\n[2, 0, 3]\n[1, 3, 0]");
//!
//!     g1.try_add_assign(&g2)?;
//!     assert_eq!(g1, sum);
//!     assert!(g1 > g2);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **serde** (default): `Serialize`/`Deserialize` for [`Graph`] as an array
//!   of rows, plus [`Graph::from_json_str`] and [`Graph::to_json_string`]

// Re-export core abstractions
pub use adjmat_core::{
    // Core traits
    AdjacencyMatrix, GridOperations,
    // Shapes and error handling
    Dimensions, GraphError, Result,
    // Text format
    parse_rows, write_rows, ParseErrorKind, ParseGraphError, RowsDisplay,
};

pub mod graph;
pub mod load;
pub mod ops;
pub mod ordering;

pub use graph::Graph;
