//! Error types for adjacency matrix operations

/// Shape of a matrix as seen by the binary operators
///
/// `cols` is the length of the first row, or 0 when there are no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    /// Number of rows
    pub rows: usize,
    /// Number of columns in the first row
    pub cols: usize,
}

impl Dimensions {
    /// Create a new dimension pair
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Dimensions of a grid given as rows of cells
    pub fn of<R: AsRef<[i32]>>(rows: &[R]) -> Self {
        Self {
            rows: rows.len(),
            cols: rows.first().map_or(0, |row| row.as_ref().len()),
        }
    }

    /// Whether the grid has the same number of rows and columns
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl core::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Errors that can occur during matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// Operands of an elementwise operator differ in row count or row length
    DimensionMismatch {
        /// Shape of the left operand
        left: Dimensions,
        /// Shape of the right operand
        right: Dimensions,
    },
    /// Scalar division by zero
    DivideByZero,
}

impl core::fmt::Display for GraphError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GraphError::DimensionMismatch { left, right } => {
                write!(f, "Graphs must be of the same dimensions ({left} vs {right})")
            }
            GraphError::DivideByZero => write!(f, "Division by zero is not allowed"),
        }
    }
}

impl core::error::Error for GraphError {}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, GraphError>;
