//! Uniquetree is a library for binary trees with unique integer values.
//!
//! Trees are built from a flattened sequence of records, each holding a
//! value and the positions of its left and right child record, and then
//! analysed with a handful of traversal statistics.
//! Core functionality provided:
//! - Tree builder: Converts `[Option<Record>]` into an owned [UniqueTree],
//!   rejecting empty input and duplicate values.
//! - Tree model: Nodes own their children directly, no arena and no
//!   reference counting. See [crate::model] for more details.
//! - Statistics: doubling of even values, sum of right children, number of
//!   leaf parents, average of odd values and greatest difference.
//!   See [crate::analysis].
//!
//! Limitations:
//! - Only binary trees
//! - Structure is fixed after construction
//!
//! # Usage
//! ```
//! use uniquetree::{build_tree, model::Record};
//!
//! let records = [
//!     Some(Record::new(52, Some(1), Some(2))),
//!     Some(Record::leaf(23)),
//!     Some(Record::leaf(87)),
//! ];
//! let mut tree = build_tree(&records)?;
//! tree.double_even_values();
//!
//! assert_eq!(tree.root().map(|r| r.value()), Some(104));
//! assert_eq!(tree.sum_of_right_children(), 87);
//! assert_eq!(tree.count_leaf_parents(), 1);
//! assert_eq!(tree.average_of_odd_values(), 55.0);
//! assert_eq!(tree.greatest_difference(), 81);
//! # Ok::<(), uniquetree::model::BuildError>(())
//! ```

pub mod analysis;
pub mod model;

use crate::model::{BuildResult, Record, UniqueTree};

/// Builds a [UniqueTree] from a flattened record sequence.
///
/// See [`model::tree_builder::build`] for full documentation.
pub fn build_tree(records: &[Option<Record>]) -> BuildResult<UniqueTree> {
    model::tree_builder::build(records)
}
