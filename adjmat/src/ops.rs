//! Operator overloads for [`Graph`]
//!
//! Elementwise `+`, `-` and `*` between graphs, and `/` by a scalar, can fail,
//! so their `Output` is [`Result<Graph>`]. Scalar `*` and unary `-` always
//! succeed. The fallible compound assignments have no operator form; use
//! [`Graph::try_add_assign`], [`Graph::try_sub_assign`] and
//! [`Graph::try_div_assign`].

use crate::Graph;
use adjmat_core::Result;
use std::ops::{Add, Div, Mul, MulAssign, Neg, Sub};

/// Implements a binary operator for every owned/borrowed operand pairing by
/// delegating to the `&Graph op &Graph` form.
macro_rules! forward_graph_binop {
    ($trait:ident, $method:ident, $inherent:path) => {
        impl $trait<&Graph> for &Graph {
            type Output = Result<Graph>;

            fn $method(self, rhs: &Graph) -> Self::Output {
                $inherent(self, rhs)
            }
        }

        impl $trait<Graph> for Graph {
            type Output = Result<Graph>;

            fn $method(self, rhs: Graph) -> Self::Output {
                $inherent(&self, &rhs)
            }
        }

        impl $trait<&Graph> for Graph {
            type Output = Result<Graph>;

            fn $method(self, rhs: &Graph) -> Self::Output {
                $inherent(&self, rhs)
            }
        }

        impl $trait<Graph> for &Graph {
            type Output = Result<Graph>;

            fn $method(self, rhs: Graph) -> Self::Output {
                $inherent(self, &rhs)
            }
        }
    };
}

forward_graph_binop!(Add, add, Graph::add);
forward_graph_binop!(Sub, sub, Graph::subtract);
forward_graph_binop!(Mul, mul, Graph::elementwise_multiply);

impl Neg for &Graph {
    type Output = Graph;

    fn neg(self) -> Graph {
        self.negate()
    }
}

impl Neg for Graph {
    type Output = Graph;

    fn neg(self) -> Graph {
        self.negate()
    }
}

impl Mul<i32> for &Graph {
    type Output = Graph;

    fn mul(self, factor: i32) -> Graph {
        self.scalar_multiply(factor)
    }
}

impl Mul<i32> for Graph {
    type Output = Graph;

    fn mul(mut self, factor: i32) -> Graph {
        self.scalar_multiply_assign(factor);
        self
    }
}

impl Mul<&Graph> for i32 {
    type Output = Graph;

    fn mul(self, graph: &Graph) -> Graph {
        graph * self
    }
}

impl Mul<Graph> for i32 {
    type Output = Graph;

    fn mul(self, graph: Graph) -> Graph {
        graph * self
    }
}

impl MulAssign<i32> for Graph {
    fn mul_assign(&mut self, factor: i32) {
        self.scalar_multiply_assign(factor);
    }
}

impl Div<i32> for &Graph {
    type Output = Result<Graph>;

    fn div(self, divisor: i32) -> Result<Graph> {
        self.divide(divisor)
    }
}

impl Div<i32> for Graph {
    type Output = Result<Graph>;

    fn div(self, divisor: i32) -> Result<Graph> {
        self.divide(divisor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adjmat_core::{Dimensions, GraphError};

    fn sample() -> (Graph, Graph) {
        (
            Graph::from_rows(vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]),
            Graph::from_rows(vec![vec![0, 1, 1], vec![1, 0, 2], vec![1, 2, 0]]),
        )
    }

    #[test]
    fn test_add_operator() {
        let (a, b) = sample();
        let sum = (&a + &b).unwrap();
        assert_eq!(sum.render(), "[0, 2, 1]\n[2, 0, 3]\n[1, 3, 0]");
        assert_eq!((a + b).unwrap(), sum);
    }

    #[test]
    fn test_hadamard_operator() {
        let (a, b) = sample();
        let product = (&a * &b).unwrap();
        assert_eq!(product.render(), "[0, 1, 0]\n[1, 0, 2]\n[0, 2, 0]");
    }

    #[test]
    fn test_sub_and_neg_operators() {
        let (a, b) = sample();
        let diff = (&a - &b).unwrap();
        assert_eq!(diff, (&a + &(-&b)).unwrap());
        assert_eq!(-(-a.clone()), a);
    }

    #[test]
    fn test_scalar_operators() {
        let (a, _) = sample();
        assert_eq!(&a * 4, 4 * &a);
        assert_eq!((&a * 4).render(), "[0, 4, 0]\n[4, 0, 4]\n[0, 4, 0]");
        assert_eq!((a.clone() * 4 / 4).unwrap(), a);

        let mut scaled = a.clone();
        scaled *= -2;
        assert_eq!(scaled.render(), "[0, -2, 0]\n[-2, 0, -2]\n[0, -2, 0]");
        assert_eq!(scaled, -2 * a);
    }

    #[test]
    fn test_operator_errors() {
        let (a, _) = sample();
        let wide = Graph::from_rows(vec![vec![1, 2, 3, 4]; 3]);

        assert_eq!(
            &a + &wide,
            Err(GraphError::DimensionMismatch {
                left: Dimensions::new(3, 3),
                right: Dimensions::new(3, 4),
            })
        );
        assert!((&a - &wide).is_err());
        assert!((&a * &wide).is_err());
        assert_eq!(&a / 0, Err(GraphError::DivideByZero));
    }
}
