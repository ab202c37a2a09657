//! Provides the owned binary tree representation.
//!
//! * [UniqueTree] - Binary tree with pairwise distinct `i64` values
//! * [PreOrderIter] - Shared traversal (parents before children)
//! * [ValuesMut] - Mutable traversal over node values

use crate::model::build_error::BuildResult;
use crate::model::node::Node;
use crate::model::record::Record;
use crate::model::tree_builder;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A binary tree whose node values are pairwise distinct.
///
/// Nodes own their children directly ([`Option<Box<Node>>`]), so each node
/// has exactly one parent and the structure cannot contain cycles.
/// The tree may be empty if the root record of the input was absent.
///
/// # Construction
/// Use [`UniqueTree::from_records`] (or [`tree_builder::build`]), which
/// enforces uniqueness of values. After construction, the structure never
/// changes; only [`double_even_values`](UniqueTree::double_even_values)
/// changes values in place.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct UniqueTree {
    root: Option<Box<Node>>,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl UniqueTree {
    /// Builds a tree from a flattened record sequence.
    ///
    /// See [`tree_builder::build`] for details and errors.
    pub fn from_records(records: &[Option<Record>]) -> BuildResult<Self> {
        tree_builder::build(records)
    }

    pub(crate) fn from_root(root: Option<Box<Node>>) -> Self {
        UniqueTree { root }
    }

    /// Returns a reference to the root, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of nodes in this tree.
    pub fn num_nodes(&self) -> usize {
        self.pre_order_iter().count()
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        self.pre_order_iter().filter(|n| n.is_leaf()).count()
    }

    /// Returns the height of this tree, counted in nodes
    /// (0 for the empty tree, 1 for a single root).
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> = self.root().map(|r| (r, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|c| (c, depth + 1)));
            stack.extend(node.right().map(|c| (c, depth + 1)));
        }

        height
    }

    /// Returns all values in pre-order.
    pub fn values(&self) -> Vec<i64> {
        self.pre_order_iter().map(Node::value).collect()
    }

    /// Returns `true` if some node holds `value`.
    pub fn contains(&self, value: i64) -> bool {
        self.pre_order_iter().any(|n| n.value() == value)
    }
}

// ============================================================================
// Printing (pub)
// ============================================================================
impl UniqueTree {
    /// Prints a visual representation of the tree to the console.
    ///
    /// # Example Output
    /// ```text
    /// Tree with 3 nodes:
    /// 52
    ///   ├─ L: 23
    ///   └─ R: 87
    /// ```
    pub fn print_tree(&self) {
        print!("{}", self.render());
    }

    /// Returns the representation printed by [`print_tree`](Self::print_tree).
    pub fn render(&self) -> String {
        let mut out = format!("Tree with {} nodes:\n", self.num_nodes());
        match self.root() {
            Some(root) => {
                out.push_str(&format!("{}\n", root.value()));
                Self::render_children(root, "  ", &mut out);
            }
            None => out.push_str("(empty)\n"),
        }

        out
    }

    /// Helper function to recursively render the children of a node.
    fn render_children(node: &Node, prefix: &str, out: &mut String) {
        let children: Vec<(&str, &Node)> = [("L", node.left()), ("R", node.right())]
            .into_iter()
            .filter_map(|(side, child)| child.map(|c| (side, c)))
            .collect();

        for (i, (side, child)) in children.iter().enumerate() {
            let is_last = i + 1 == children.len();
            let connector = if is_last { "└─ " } else { "├─ " };
            out.push_str(&format!("{prefix}{connector}{side}: {}\n", child.value()));

            let new_prefix = format!("{}{}  ", prefix, if is_last { " " } else { "│" });
            Self::render_children(child, &new_prefix, out);
        }
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl UniqueTree {
    /// Returns an iterator over the nodes in pre-order (parents before children,
    /// left before right).
    ///
    /// # Example
    /// ```
    /// use uniquetree::model::{Record, UniqueTree};
    ///
    /// let tree = UniqueTree::from_records(&[
    ///     Some(Record::new(2, Some(1), Some(2))),
    ///     Some(Record::leaf(1)),
    ///     Some(Record::leaf(3)),
    /// ])?;
    /// let values: Vec<_> = tree.pre_order_iter().map(|n| n.value()).collect();
    /// assert_eq!(values, vec![2, 1, 3]);
    /// # Ok::<(), uniquetree::model::BuildError>(())
    /// ```
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }

    /// Returns an iterator over mutable references to all node values.
    ///
    /// Visits nodes in pre-order. Only values are exposed, so the structure
    /// of the tree cannot be altered through it.
    pub fn values_mut(&mut self) -> ValuesMut<'_> {
        ValuesMut::new(self)
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each node is visited before any of its descendants.
pub struct PreOrderIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a UniqueTree) -> Self {
        PreOrderIter {
            stack: tree.root().into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // Push right first, so left is processed first
        self.stack.extend(node.right());
        self.stack.extend(node.left());

        Some(node)
    }
}

/// Iterator over mutable node values in pre-order.
pub struct ValuesMut<'a> {
    stack: Vec<&'a mut Node>,
}

impl<'a> ValuesMut<'a> {
    fn new(tree: &'a mut UniqueTree) -> Self {
        ValuesMut {
            stack: tree.root.as_deref_mut().into_iter().collect(),
        }
    }
}

impl<'a> Iterator for ValuesMut<'a> {
    type Item = &'a mut i64;

    fn next(&mut self) -> Option<Self::Item> {
        let Node { value, left, right } = self.stack.pop()?;

        self.stack.extend(right.as_deref_mut());
        self.stack.extend(left.as_deref_mut());

        Some(value)
    }
}
