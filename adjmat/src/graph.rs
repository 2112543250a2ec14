//! Dense integer adjacency matrix value type
//!
//! `Graph` owns its grid outright. Every copy is a deep copy and every
//! binary operator builds its result in a fresh grid, so a failed operation
//! never leaves a half-updated operand behind.

use adjmat_core::{
    check_divisor, check_same_dimensions, write_rows, AdjacencyMatrix, Dimensions, GraphError,
    GridOperations, Result,
};
use std::fmt;

/// Adjacency matrix of a graph, stored densely as rows of `i32` cells
///
/// Rows are expected to share one length but this is not enforced by
/// [`Graph::load`]. Cell arithmetic wraps on `i32` overflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Graph {
    cells: Vec<Vec<i32>>,
}

impl Graph {
    /// Create an empty graph with zero rows
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Create a graph holding `rows` verbatim
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Self {
        Self { cells: rows }
    }

    /// Replace the whole grid with `data`
    ///
    /// Prior content is discarded. No shape validation happens here.
    pub fn load(&mut self, data: Vec<Vec<i32>>) {
        log::trace!(
            "loading graph {} (previously {})",
            Dimensions::of(&data),
            self.dimensions()
        );
        self.cells = data;
    }

    /// Render the grid as `[a, b]\n[c, d]`, without a trailing newline
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Borrow the grid for inspection
    pub fn get_matrix(&self) -> &[Vec<i32>] {
        &self.cells
    }

    /// Take ownership of the grid
    pub fn into_rows(self) -> Vec<Vec<i32>> {
        self.cells
    }

    /// Whether the graph has no rows
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether every row is as long as the number of rows
    pub fn is_square(&self) -> bool {
        let n = self.cells.len();
        self.cells.iter().all(|row| row.len() == n)
    }

    /// Whether the graph is square and `cells[i][j] == cells[j][i]` throughout
    pub fn is_symmetric(&self) -> bool {
        self.is_square()
            && self.cells.iter().enumerate().all(|(i, row)| {
                row.iter()
                    .enumerate()
                    .skip(i + 1)
                    .all(|(j, &cell)| self.cells[j][i] == cell)
            })
    }

    /// Elementwise sum
    pub fn add(&self, other: &Graph) -> Result<Graph> {
        self.zip_with(other, "add", i32::wrapping_add)
    }

    /// Elementwise difference
    pub fn subtract(&self, other: &Graph) -> Result<Graph> {
        self.zip_with(other, "subtract", i32::wrapping_sub)
    }

    /// Elementwise (Hadamard) product
    pub fn elementwise_multiply(&self, other: &Graph) -> Result<Graph> {
        self.zip_with(other, "elementwise multiply", i32::wrapping_mul)
    }

    /// Every cell negated
    pub fn negate(&self) -> Graph {
        self.map_cells(i32::wrapping_neg)
    }

    /// Every cell scaled by `factor`
    pub fn scalar_multiply(&self, factor: i32) -> Graph {
        self.map_cells(|cell| cell.wrapping_mul(factor))
    }

    /// Every cell divided by `divisor`, truncating toward zero
    pub fn divide(&self, divisor: i32) -> Result<Graph> {
        let divisor = check_divisor(divisor).inspect_err(|err| log::debug!("divide: {err}"))?;
        Ok(self.map_cells(|cell| cell.wrapping_div(divisor)))
    }

    /// In-place elementwise sum
    ///
    /// On error `self` is left unchanged.
    pub fn try_add_assign(&mut self, other: &Graph) -> Result<&mut Self> {
        *self = self.add(other)?;
        Ok(self)
    }

    /// In-place elementwise difference
    ///
    /// On error `self` is left unchanged.
    pub fn try_sub_assign(&mut self, other: &Graph) -> Result<&mut Self> {
        *self = self.subtract(other)?;
        Ok(self)
    }

    /// In-place scalar multiplication
    pub fn scalar_multiply_assign(&mut self, factor: i32) -> &mut Self {
        self.update_cells(|cell| cell.wrapping_mul(factor))
    }

    /// In-place scalar division
    ///
    /// A zero divisor is rejected before any cell changes.
    pub fn try_div_assign(&mut self, divisor: i32) -> Result<&mut Self> {
        let divisor = check_divisor(divisor).inspect_err(|err| log::debug!("divide: {err}"))?;
        Ok(self.update_cells(|cell| cell.wrapping_div(divisor)))
    }

    /// Prefix increment: add one to every cell
    pub fn increment(&mut self) -> &mut Self {
        self.update_cells(|cell| cell.wrapping_add(1))
    }

    /// Prefix decrement: subtract one from every cell
    pub fn decrement(&mut self) -> &mut Self {
        self.update_cells(|cell| cell.wrapping_sub(1))
    }

    /// Postfix increment: returns the graph as it was before incrementing
    pub fn post_increment(&mut self) -> Graph {
        let previous = self.clone();
        self.increment();
        previous
    }

    /// Postfix decrement: returns the graph as it was before decrementing
    pub fn post_decrement(&mut self) -> Graph {
        let previous = self.clone();
        self.decrement();
        previous
    }

    fn zip_with(&self, other: &Graph, op: &str, f: impl Fn(i32, i32) -> i32) -> Result<Graph> {
        let dims = check_same_dimensions(self.dimensions(), other.dimensions())
            .inspect_err(|err| log::debug!("{op}: {err}"))?;

        let mut cells = self.cells.clone();
        for (row, (lhs, rhs)) in cells.iter_mut().zip(&other.cells).enumerate() {
            // Only the first row is checked up front
            if lhs.len() != rhs.len() {
                let err = GraphError::DimensionMismatch {
                    left: Dimensions::new(dims.rows, lhs.len()),
                    right: Dimensions::new(dims.rows, rhs.len()),
                };
                log::debug!("{op}: ragged row {row}: {err}");
                return Err(err);
            }
            for (cell, &value) in lhs.iter_mut().zip(rhs) {
                *cell = f(*cell, value);
            }
        }

        Ok(Graph { cells })
    }

    fn map_cells(&self, f: impl Fn(i32) -> i32) -> Graph {
        let mut result = self.clone();
        result.update_cells(f);
        result
    }

    fn update_cells(&mut self, f: impl Fn(i32) -> i32) -> &mut Self {
        for cell in self.cells.iter_mut().flatten() {
            *cell = f(*cell);
        }
        self
    }
}

impl AdjacencyMatrix for Graph {
    fn get_element(&self, row: usize, col: usize) -> Option<i32> {
        self.cells.get(row)?.get(col).copied()
    }

    fn dimensions(&self) -> Dimensions {
        Dimensions::of(&self.cells)
    }

    fn edge_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell != 0).count()
    }

    fn weight_sum(&self) -> i64 {
        self.cells.iter().flatten().map(|&cell| i64::from(cell)).sum()
    }
}

impl GridOperations for Graph {
    fn get_row(&self, row_index: usize) -> Vec<i32> {
        self.cells.get(row_index).cloned().unwrap_or_default()
    }

    fn get_col(&self, col_index: usize) -> Vec<i32> {
        self.cells
            .iter()
            .filter_map(|row| row.get(col_index).copied())
            .collect()
    }
}

impl From<Vec<Vec<i32>>> for Graph {
    fn from(rows: Vec<Vec<i32>>) -> Self {
        Self::from_rows(rows)
    }
}

impl From<Graph> for Vec<Vec<i32>> {
    fn from(graph: Graph) -> Self {
        graph.into_rows()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, &self.cells)
    }
}
