//! Operand checks for the binary and scalar operators

use crate::{Dimensions, GraphError};

/// Validate that two operands can be combined elementwise
///
/// Both the row counts and the first-row lengths must match. Later rows are
/// not inspected here.
pub const fn check_same_dimensions(
    left: Dimensions,
    right: Dimensions,
) -> Result<Dimensions, GraphError> {
    if left.rows != right.rows || left.cols != right.cols {
        return Err(GraphError::DimensionMismatch { left, right });
    }

    Ok(left)
}

/// Validate a scalar divisor before any cell is touched
pub const fn check_divisor(divisor: i32) -> Result<i32, GraphError> {
    if divisor == 0 {
        return Err(GraphError::DivideByZero);
    }

    Ok(divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_same_dimensions() {
        assert_eq!(
            check_same_dimensions(Dimensions::new(3, 3), Dimensions::new(3, 3)),
            Ok(Dimensions::new(3, 3))
        );
        assert_eq!(
            check_same_dimensions(Dimensions::new(0, 0), Dimensions::new(0, 0)),
            Ok(Dimensions::new(0, 0))
        );

        // Column mismatch
        assert_eq!(
            check_same_dimensions(Dimensions::new(3, 3), Dimensions::new(3, 4)),
            Err(GraphError::DimensionMismatch {
                left: Dimensions::new(3, 3),
                right: Dimensions::new(3, 4),
            })
        );

        // Row mismatch
        assert!(check_same_dimensions(Dimensions::new(2, 3), Dimensions::new(3, 3)).is_err());
    }

    #[test]
    fn test_check_divisor() {
        assert_eq!(check_divisor(2), Ok(2));
        assert_eq!(check_divisor(-1), Ok(-1));
        assert_eq!(check_divisor(0), Err(GraphError::DivideByZero));
    }
}
