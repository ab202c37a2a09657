//! Node module for the owned binary tree representation.

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// A node of a [UniqueTree](crate::model::UniqueTree).
///
/// Each child is owned exclusively by its parent, so the structure is
/// always a tree: no shared subtrees, no cycles.
///
/// # Invariants
/// - `value` is unique across the whole tree (enforced by the builder)
/// - `left`/`right` are `None` iff there is no child on that side
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Node {
    pub(crate) value: i64,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
}

impl Node {
    /// Creates a new node without children.
    pub fn new(value: i64) -> Self {
        Node {
            value,
            left: None,
            right: None,
        }
    }

    /// Returns the value of this node.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Returns the left child, if any.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// Returns the right child, if any.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the number of children (0, 1 or 2).
    pub fn num_children(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// Returns `true` if at least one child of this node is a leaf.
    pub fn has_leaf_child(&self) -> bool {
        self.left().is_some_and(Node::is_leaf) || self.right().is_some_and(Node::is_leaf)
    }
}
