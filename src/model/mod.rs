//! Data model for binary trees with unique integer values.
//!
//! # Tree representation
//! Trees are represented by [UniqueTree], which owns its [Node]s directly:
//! each node holds an optional boxed left and right child. There is no
//! sharing of subtrees, so every node has exactly one parent.
//!
//! # Building trees
//! Trees are constructed from a flattened sequence of [Record]s, see the
//! [tree_builder] module docs. Construction fails with a [BuildError] if the
//! input is empty or a value occurs twice.

pub mod build_error;
pub mod node;
pub mod record;
pub mod tree;
pub mod tree_builder;

pub use build_error::BuildError;
pub use build_error::BuildResult;
pub use node::Node;
pub use record::Record;
pub use record::RecordIndex;
pub use tree::UniqueTree;
