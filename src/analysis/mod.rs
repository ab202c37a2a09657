//! Statistics over a [UniqueTree].
//!
//! All operations visit every node exactly once using the explicit-stack
//! iterators of [UniqueTree], so deep (degenerate) trees are fine.
//! Every operation is total: on an empty tree each statistic is `0`.
//!
//! # Parity
//! A value is odd iff `value % 2 != 0`. With Rust's truncating remainder
//! this classifies negative values as expected, e.g. `-3` is odd and `-4`
//! is even.
//!
//! # Overview
//! | Operation | Result |
//! |-----------|--------|
//! | [`double_even_values`](UniqueTree::double_even_values) | mutates in place |
//! | [`sum_of_right_children`](UniqueTree::sum_of_right_children) | `i128` |
//! | [`count_leaf_parents`](UniqueTree::count_leaf_parents) | `usize` |
//! | [`average_of_odd_values`](UniqueTree::average_of_odd_values) | `f64` |
//! | [`greatest_difference`](UniqueTree::greatest_difference) | `u64` |

use crate::model::{Node, UniqueTree};
use std::fmt;
use tracing::trace;

/// Returns `true` if `value` is odd.
pub fn is_odd(value: i64) -> bool {
    value % 2 != 0
}

// ============================================================================
// Mutation
// ============================================================================
impl UniqueTree {
    /// Doubles every even value in the tree, including the root.
    ///
    /// Not idempotent: a node holding `4` holds `8` after one call and
    /// `16` after two. Doubling wraps on `i64` overflow.
    pub fn double_even_values(&mut self) {
        let mut doubled = 0usize;
        for value in self.values_mut().filter(|v| !is_odd(**v)) {
            *value = value.wrapping_mul(2);
            doubled += 1;
        }
        trace!(doubled, "Doubled even values");
    }
}

// ============================================================================
// Statistics
// ============================================================================
impl UniqueTree {
    /// Returns the sum of all values of nodes that are a right child of
    /// their parent. The root is never counted.
    pub fn sum_of_right_children(&self) -> i128 {
        self.pre_order_iter()
            .filter_map(Node::right)
            .map(|n| i128::from(n.value()))
            .sum()
    }

    /// Returns the number of nodes with at least one child that is a leaf.
    ///
    /// A node with two leaf children is counted once.
    pub fn count_leaf_parents(&self) -> usize {
        self.pre_order_iter().filter(|n| n.has_leaf_child()).count()
    }

    /// Returns the arithmetic mean of all odd values,
    /// or `0.0` if there are none.
    pub fn average_of_odd_values(&self) -> f64 {
        let (sum, count) = self
            .pre_order_iter()
            .map(Node::value)
            .filter(|&v| is_odd(v))
            .fold((0i128, 0usize), |(sum, count), v| (sum + i128::from(v), count + 1));

        if count == 0 {
            return 0.0;
        }
        sum as f64 / count as f64
    }

    /// Returns the difference between the largest and the smallest value,
    /// or `0` for an empty tree.
    pub fn greatest_difference(&self) -> u64 {
        self.min_max()
            .map(|(min, max)| max.abs_diff(min))
            .unwrap_or(0)
    }

    /// Returns the smallest and largest value, or `None` for an empty tree.
    pub fn min_max(&self) -> Option<(i64, i64)> {
        self.pre_order_iter()
            .map(Node::value)
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((min, max)) => Some((min.min(v), max.max(v))),
            })
    }

    /// Computes all read-only statistics at once.
    pub fn summary(&self) -> TreeSummary {
        TreeSummary {
            num_nodes: self.num_nodes(),
            leaf_parents: self.count_leaf_parents(),
            odd_average: self.average_of_odd_values(),
            right_children_sum: self.sum_of_right_children(),
            greatest_difference: self.greatest_difference(),
        }
    }
}

// =#========================================================================#=
// TREE SUMMARY
// =#========================================================================#=
/// Snapshot of the statistics of a [UniqueTree].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeSummary {
    /// Number of nodes
    pub num_nodes: usize,
    /// See [`UniqueTree::count_leaf_parents`]
    pub leaf_parents: usize,
    /// See [`UniqueTree::average_of_odd_values`]
    pub odd_average: f64,
    /// See [`UniqueTree::sum_of_right_children`]
    pub right_children_sum: i128,
    /// See [`UniqueTree::greatest_difference`]
    pub greatest_difference: u64,
}

impl fmt::Display for TreeSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Count of leaf parents: {}", self.leaf_parents)?;
        writeln!(f, "Average of all odd numbers: {}", self.odd_average)?;
        writeln!(f, "Sum of all right children (excluding root): {}", self.right_children_sum)?;
        write!(f, "Greatest difference between two numbers in the tree: {}", self.greatest_difference)
    }
}
