//! Construction of a [UniqueTree] from a flattened sequence of [Record]s.
//!
//! The input is a slice of optional records. Record `0` is the root and each
//! record refers to its children by position in the slice:
//!
//! ```text
//! index: 0            1              2
//!        [52, 1, 2]   [23, -, -]     [87, -, -]
//!
//!              52
//!            /    \
//!          23      87
//! ```
//!
//! Construction resolves records top-down in pre-order (node, left subtree,
//! right subtree). Every node's value is checked against the values seen so
//! far in *this* construction; the first repeat aborts with
//! [BuildError::DuplicateValue].
//!
//! Since a record that is referenced twice would produce two nodes with the
//! same value, such inputs are rejected as duplicates as well. In particular,
//! construction terminates on every input, including self-referencing ones.

use crate::model::build_error::{BuildError, BuildResult};
use crate::model::node::Node;
use crate::model::record::{Record, RecordIndex};
use crate::model::tree::UniqueTree;
use std::collections::HashSet;
use tracing::{debug, instrument, trace};

/// Builds a [UniqueTree] from the given records.
///
/// # Arguments
/// * `records` - Flattened tree; `None` entries denote "no node here"
///
/// # Errors
/// * [BuildError::InvalidInput] if `records` is empty
/// * [BuildError::DuplicateValue] if a value occurs in more than one node
///
/// # Example
/// ```
/// use uniquetree::model::{Record, tree_builder};
///
/// let records = [
///     Some(Record::new(52, Some(1), Some(2))),
///     Some(Record::leaf(23)),
///     Some(Record::leaf(87)),
/// ];
/// let tree = tree_builder::build(&records)?;
/// assert_eq!(tree.num_nodes(), 3);
/// # Ok::<(), uniquetree::model::BuildError>(())
/// ```
#[instrument(level = "debug", skip(records), fields(num_records = records.len()))]
pub fn build(records: &[Option<Record>]) -> BuildResult<UniqueTree> {
    let mut builder = RecordTreeBuilder::new(records)?;
    let root = builder.build_subtree(Some(0))?;
    debug!(num_nodes = builder.seen.len(), "Built tree");

    Ok(UniqueTree::from_root(root))
}

// =#========================================================================#=
// RECORD TREE BUILDER
// =#========================================================================#=
/// State of a single construction run.
///
/// The set of seen values lives only as long as the builder, so repeated
/// constructions are independent of each other.
struct RecordTreeBuilder<'a> {
    records: &'a [Option<Record>],
    seen: HashSet<i64>,
}

impl<'a> RecordTreeBuilder<'a> {
    fn new(records: &'a [Option<Record>]) -> BuildResult<Self> {
        if records.is_empty() {
            return Err(BuildError::InvalidInput);
        }

        Ok(Self {
            records,
            seen: HashSet::with_capacity(records.len()),
        })
    }

    /// Returns the record at `index`, or `None` if the index is absent,
    /// out of range, or points at an absent record.
    fn record_at(&self, index: Option<RecordIndex>) -> Option<&'a Record> {
        let records = self.records;
        index.and_then(|i| records.get(i)).and_then(Option::as_ref)
    }

    /// Builds the subtree rooted at the record with the given index.
    fn build_subtree(&mut self, index: Option<RecordIndex>) -> BuildResult<Option<Box<Node>>> {
        let Some(record) = self.record_at(index) else {
            return Ok(None);
        };

        if !self.seen.insert(record.value) {
            debug!(value = record.value, "Rejecting duplicate value");
            return Err(BuildError::DuplicateValue {
                value: record.value,
            });
        }
        trace!(value = record.value, ?index, "Adding node");

        let mut node = Node::new(record.value);
        node.left = self.build_subtree(record.left)?;
        node.right = self.build_subtree(record.right)?;

        Ok(Some(Box::new(node)))
    }
}
