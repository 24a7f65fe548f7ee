//! Data model for tree layout.
//!
//! # Two tree representations
//! The layout pipeline moves between two shapes of tree:
//!
//! | Type | Role | Mutability |
//! |------|------|------------|
//! | [Node] | Raw input from an external parser | Owned by the caller, read-only here |
//! | [LayoutTree] | Normalized arena built by preprocessing | Private to one layout run |
//!
//! [Node] is a plain recursive value (optional name, optional branch length,
//! ordered children). Preprocessing copies the relevant subtree into a
//! [LayoutTree], whose vertices are referenced by [VertexIndex] and carry
//! unique names, so the caller's tree can safely feed concurrent layout runs.
//!
//! See the [tree] module docs for the traversal operations the layout
//! passes are built on.

pub mod node;
pub mod tree;
pub mod vertex;

pub use node::Node;
pub use tree::LayoutTree;
pub use tree::VertexIndex;
pub use vertex::BranchLength;
pub use vertex::Vertex;
