#![allow(dead_code)]

use uniquetree::model::{Node, Record, UniqueTree};

/// The 17-node example tree.
///
/// ```text
///                 52
///          /              \
///        23                87
///      /    \            /    \
///    34      45        67      78
///   /  \    /  \      /       /  \
///  12  19  33  49    56      69  85
///         /  \              /
///        62  13            24
/// ```
pub fn example_records() -> Vec<Option<Record>> {
    vec![
        Some(Record::new(52, Some(1), Some(2))),
        Some(Record::new(23, Some(3), Some(4))),
        Some(Record::new(87, Some(5), Some(6))),
        Some(Record::new(34, Some(7), Some(8))),
        Some(Record::new(45, Some(9), Some(10))),
        Some(Record::new(67, Some(11), None)),
        Some(Record::new(78, Some(12), Some(13))),
        Some(Record::leaf(12)),
        Some(Record::leaf(19)),
        Some(Record::new(33, Some(14), Some(15))),
        Some(Record::leaf(49)),
        Some(Record::leaf(56)),
        Some(Record::new(69, Some(16), None)),
        Some(Record::leaf(85)),
        Some(Record::leaf(62)),
        Some(Record::leaf(13)),
        Some(Record::leaf(24)),
    ]
}

pub fn example_tree() -> UniqueTree {
    UniqueTree::from_records(&example_records()).unwrap()
}

/// Records of the binary search tree obtained by inserting `values` in order.
/// Equal values are inserted to the right.
pub fn bst_records(values: &[i64]) -> Vec<Option<Record>> {
    let mut records: Vec<Option<Record>> = Vec::with_capacity(values.len());
    for (index, &value) in values.iter().enumerate() {
        if index > 0 {
            let mut current = 0;
            loop {
                let record = records[current].as_mut().unwrap();
                let slot = if value < record.value { &mut record.left } else { &mut record.right };
                match *slot {
                    Some(next) => current = next,
                    None => {
                        *slot = Some(index);
                        break;
                    }
                }
            }
        }
        records.push(Some(Record::leaf(value)));
    }
    records
}

// ============================================================================
// Recursive reference implementations
// ============================================================================
pub fn ref_values(node: Option<&Node>, out: &mut Vec<i64>) {
    if let Some(n) = node {
        out.push(n.value());
        ref_values(n.left(), out);
        ref_values(n.right(), out);
    }
}

pub fn ref_sum_right(node: Option<&Node>) -> i128 {
    match node {
        None => 0,
        Some(n) => {
            let own = n.right().map_or(0, |r| i128::from(r.value()));
            own + ref_sum_right(n.left()) + ref_sum_right(n.right())
        }
    }
}

pub fn ref_leaf_parents(node: Option<&Node>) -> usize {
    match node {
        None => 0,
        Some(n) => {
            let is_leaf = |c: Option<&Node>| c.is_some_and(|c| c.left().is_none() && c.right().is_none());
            let own = usize::from(is_leaf(n.left()) || is_leaf(n.right()));
            own + ref_leaf_parents(n.left()) + ref_leaf_parents(n.right())
        }
    }
}

pub fn ref_odd_average(node: Option<&Node>) -> f64 {
    let mut values = Vec::new();
    ref_values(node, &mut values);
    let odd: Vec<i64> = values.into_iter().filter(|v| v % 2 != 0).collect();
    if odd.is_empty() {
        0.0
    } else {
        odd.iter().map(|&v| v as f64).sum::<f64>() / odd.len() as f64
    }
}

pub fn ref_greatest_difference(node: Option<&Node>) -> u64 {
    let mut values = Vec::new();
    ref_values(node, &mut values);
    match (values.iter().min(), values.iter().max()) {
        (Some(min), Some(max)) => (max - min) as u64,
        _ => 0,
    }
}
