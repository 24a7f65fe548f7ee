//! Input tree value as handed over by an external parser.
//!
//! The layout engine does not parse tree-description formats itself. A parser
//! collaborator (Newick, Nexus, whatever) materializes the tree as a [Node]
//! value: an optional name, an optional branch length and an ordered list of
//! children. Ownership of children guarantees the structure is a proper tree,
//! so no cycle checks are needed at this level.

use serde::{Deserialize, Serialize};

/// A node of the raw input tree.
///
/// # Invariants
/// - `branch_length`, if present, is non-negative and finite; violations are
///   rejected with a `MalformedNode` error during preprocessing, not here.
/// - `children` order is meaningful: it fixes the visual order of leaves.
///
/// Nodes without a name get a synthetic `internal_<n>` name assigned during
/// preprocessing; input names must be unique across the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Name of this node; `None` for unnamed internal nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Length of the incoming edge; `None` means "use the unit default"
    /// and is distinct from an explicit `0.0`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_length: Option<f64>,
    /// Ordered child nodes; empty for terminal nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Creates an unnamed node with no branch length and no children.
    pub fn unnamed() -> Self {
        Node {
            name: None,
            branch_length: None,
            children: Vec::new(),
        }
    }

    /// Creates a named node with no branch length and no children.
    pub fn named<S: Into<String>>(name: S) -> Self {
        Node {
            name: Some(name.into()),
            branch_length: None,
            children: Vec::new(),
        }
    }

    /// Creates a named terminal node with a branch length, the common case
    /// for leaves coming out of a parser.
    pub fn leaf<S: Into<String>>(name: S, branch_length: f64) -> Self {
        Node {
            name: Some(name.into()),
            branch_length: Some(branch_length),
            children: Vec::new(),
        }
    }

    /// Sets the branch length of this node.
    pub fn with_branch_length(mut self, branch_length: f64) -> Self {
        self.branch_length = Some(branch_length);
        self
    }

    /// Sets the children of this node, replacing any existing ones.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Appends a child to this node.
    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Returns `true` if this node has no children.
    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of nodes in the subtree rooted here (inclusive).
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Node::subtree_size)
            .sum::<usize>()
    }
}
