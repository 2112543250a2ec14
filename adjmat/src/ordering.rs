//! Ordering of graphs by total edge weight, then row count
//!
//! `a > b` holds when the graphs differ and either `a` has the larger cell
//! sum, or the sums tie and `a` has more rows. Distinct graphs that tie on
//! both are neither greater nor less than each other, yet `>=` and `<=` both
//! hold for them, because those are defined as `!(a < b)` and `!(a > b)`.
//! `PartialOrd` below follows the same rules so the operators and the named
//! methods always agree.

use crate::Graph;
use adjmat_core::AdjacencyMatrix;
use std::cmp::Ordering;

impl Graph {
    /// Strictly greater: larger cell sum, or equal sum and more rows
    pub fn is_greater(&self, other: &Graph) -> bool {
        if self == other {
            return false;
        }

        let (lhs, rhs) = (self.weight_sum(), other.weight_sum());
        if lhs != rhs {
            return lhs > rhs;
        }

        self.get_matrix().len() > other.get_matrix().len()
    }

    /// Strictly less, defined as `other.is_greater(self)`
    pub fn is_less(&self, other: &Graph) -> bool {
        other.is_greater(self)
    }

    /// Defined as `!self.is_less(other)`
    pub fn is_greater_or_equal(&self, other: &Graph) -> bool {
        !self.is_less(other)
    }

    /// Defined as `!self.is_greater(other)`
    pub fn is_less_or_equal(&self, other: &Graph) -> bool {
        !self.is_greater(other)
    }
}

impl PartialOrd for Graph {
    /// `None` for distinct graphs with equal cell sum and row count
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.is_greater(other) {
            Some(Ordering::Greater)
        } else if self.is_less(other) {
            Some(Ordering::Less)
        } else {
            None
        }
    }

    fn gt(&self, other: &Self) -> bool {
        self.is_greater(other)
    }

    fn lt(&self, other: &Self) -> bool {
        self.is_less(other)
    }

    // Ties on sum and row count satisfy both `>=` and `<=`
    fn ge(&self, other: &Self) -> bool {
        self.is_greater_or_equal(other)
    }

    fn le(&self, other: &Self) -> bool {
        self.is_less_or_equal(other)
    }
}
