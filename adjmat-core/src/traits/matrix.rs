//! Core matrix access traits
//!
//! This module defines the read-only interface every adjacency matrix
//! implementation provides, independent of how the cells are stored.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::error::Dimensions;

/// Read-only access to a dense integer adjacency matrix
pub trait AdjacencyMatrix {
    /// Get the cell at the specified position
    ///
    /// Returns `None` if the position is out of bounds. Zero cells are
    /// returned as `Some(0)`, since storage is dense.
    fn get_element(&self, row: usize, col: usize) -> Option<i32>;

    /// Get matrix dimensions, with columns taken from the first row
    fn dimensions(&self) -> Dimensions;

    /// Number of non-zero cells
    fn edge_count(&self) -> usize;

    /// Sum of every cell, accumulated without overflow
    fn weight_sum(&self) -> i64;
}

/// Extension trait for row/column extraction (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait GridOperations: AdjacencyMatrix {
    /// Get all cells in a row, in column order
    ///
    /// Returns an empty vector when the row does not exist.
    fn get_row(&self, row_index: usize) -> Vec<i32>;

    /// Get all cells in a column, in row order
    ///
    /// Rows too short to reach the column are skipped.
    fn get_col(&self, col_index: usize) -> Vec<i32>;
}
