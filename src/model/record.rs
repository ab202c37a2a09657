//! Flattened input records from which a [UniqueTree](crate::model::UniqueTree) is built.

/// Position of a record in the input sequence.
pub type RecordIndex = usize;

/// One entry of the flattened tree representation.
///
/// A record holds the value of a node together with the positions of the
/// records describing its left and right child. Position `0` of the input
/// sequence is the root. A child index of `None`, or one pointing past the
/// end of the sequence, means there is no child on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    /// Value stored in the node
    pub value: i64,
    /// Index of the record describing the left child
    pub left: Option<RecordIndex>,
    /// Index of the record describing the right child
    pub right: Option<RecordIndex>,
}

impl Record {
    /// Creates a new record.
    ///
    /// # Arguments
    /// * `value` - Value of the node
    /// * `left` - Index of the left child record, if any
    /// * `right` - Index of the right child record, if any
    pub fn new(value: i64, left: Option<RecordIndex>, right: Option<RecordIndex>) -> Self {
        Record { value, left, right }
    }

    /// Creates a record without children.
    pub fn leaf(value: i64) -> Self {
        Record::new(value, None, None)
    }
}
