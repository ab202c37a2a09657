//! Error types for tree construction.
//!
//! Construction either yields a complete [UniqueTree](crate::model::UniqueTree)
//! or one of the [BuildError] variants; no partial tree is ever returned.

use thiserror::Error;

// =#========================================================================#=
// BUILD ERROR
// =#========================================================================#=
/// Errors that can occur while building a tree from records.
#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum BuildError {
    /// The record sequence was empty.
    #[error("Tree data cannot be empty")]
    InvalidInput,

    /// A value occurs in more than one node reachable from the root.
    #[error("Duplicate value found: {value}")]
    DuplicateValue {
        /// The offending value
        value: i64,
    },
}

/// Result type of tree construction.
pub type BuildResult<T> = Result<T, BuildError>;
