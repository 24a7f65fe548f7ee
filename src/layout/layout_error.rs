//! Error type for the layout pipeline.
//!
//! All failures are detected during preprocessing or the first traversal
//! pass and abort the run; the engine never substitutes a default tree or
//! returns a partial result.

/// Errors produced while preparing or laying out a tree.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// No terminal vertices remain after pruning and extraction.
    #[error("tree has no terminal vertices to lay out")]
    EmptyTree,

    /// A negative display level was requested.
    #[error("display level must be non-negative, got {level}")]
    InvalidDisplayLevel { level: i64 },

    /// A node violates the input contract, e.g. a negative branch length
    /// or a duplicate name.
    #[error("malformed node `{name}`: {reason}")]
    MalformedNode { name: String, reason: String },
}

impl LayoutError {
    /// Convenience constructor for [LayoutError::MalformedNode].
    pub(crate) fn malformed<S: Into<String>, R: Into<String>>(name: S, reason: R) -> Self {
        LayoutError::MalformedNode {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
