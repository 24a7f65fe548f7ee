//! Phylotrace computes 2-D layouts for rooted phylogenetic trees,
//! independent of any charting library.
//!
//! Given an already-parsed tree (named/unnamed nodes with optional branch
//! lengths and ordered child lists, polytomies permitted), the crate
//! produces the geometric primitives and axis metadata needed to render a
//! cladogram figure. Core functionality provided:
//! - Preprocessing: synthetic names for unnamed nodes, root
//!   canonicalization, extraction of a detached "unclassified" clade,
//!   depth-limited display.
//! - Coordinate engine: branch-length-aware depths (cumulative from the
//!   root, missing lengths default to 1), leaf ranks in traversal order,
//!   internal nodes vertically centered over their children.
//! - Trace emission: one marker per node and a two-segment right-angle
//!   elbow per edge, projected into screen space for any of the four
//!   orientations.
//! - Axis glue: tick positions/labels and per-axis signs for the external
//!   figure assembler ([AxisHints]).
//!
//! Parsing tree-description text formats, rendering pixels and chart
//! interactivity are explicitly out of scope; an external parser supplies
//! the [Node] tree and an external figure assembler consumes the
//! [TreeLayout].
//!
//! One layout run is a pure function of its inputs. The caller's tree is
//! only read, never mutated, and synthetic-name state is local to the run,
//! so the same parsed tree can feed concurrent runs.
//!
//! # Usage patterns
//! Lay a tree out with defaults (unbounded depth, growing right):
//! ```
//! use phylotrace::layout_tree;
//! use phylotrace::model::Node;
//!
//! let root = Node::unnamed()
//!     .with_branch_length(0.0)
//!     .with_children(vec![
//!         Node::leaf("A", 1.0),
//!         Node::leaf("B", 2.0),
//!         Node::leaf("C", 3.0),
//!     ]);
//!
//! let layout = layout_tree(&root).unwrap();
//! assert_eq!(layout.leaf_names, vec!["A", "B", "C"]);
//! assert_eq!(layout.primitives.len(), 10); // 4 markers + 3 elbows of 2
//! ```
//!
//! For more control, configure the run:
//! ```
//! use phylotrace::{DisplayLevel, LayoutOptions, Orientation, layout_tree_with};
//! use phylotrace::model::Node;
//!
//! let root = Node::named("root").with_children(vec![
//!     Node::leaf("kea", 1.0),
//!     Node::named("nestor").with_children(vec![
//!         Node::leaf("kaka", 0.5),
//!         Node::leaf("kakapo", 0.5),
//!     ]),
//! ]);
//!
//! let options = LayoutOptions::new()
//!     .with_display_level(DisplayLevel::limit(1)?)
//!     .with_orientation(Orientation::Left);
//! let layout = layout_tree_with(&root, &options)?;
//!
//! // Level 1 cuts below "nestor"; it is drawn as a terminal
//! assert_eq!(layout.leaf_names, vec!["kea", "nestor"]);
//! # Ok::<(), phylotrace::LayoutError>(())
//! ```

pub mod axis;
pub mod layout;
pub mod model;

pub use axis::AxisHints;
pub use layout::{
    AxisSigns, DisplayLevel, LayoutError, LayoutOptions, Orientation, Primitive, TreeLayout,
};
pub use model::Node;

// ============================================================================
// Quick layout API
// ============================================================================
/// Lays out a tree with default options
/// (unbounded display level, [Orientation::Right]).
///
/// See [`layout::layout`] for full documentation.
pub fn layout_tree(root: &Node) -> Result<TreeLayout, LayoutError> {
    layout::layout(root, &LayoutOptions::default())
}

/// Lays out a tree with the given options.
///
/// See [`layout::layout`] for full documentation.
pub fn layout_tree_with(root: &Node, options: &LayoutOptions) -> Result<TreeLayout, LayoutError> {
    layout::layout(root, options)
}
