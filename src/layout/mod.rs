//! Layout pipeline: preprocessing, coordinate assignment and trace
//! emission.
//!
//! One layout run is a pure function from (tree, options) to [TreeLayout]:
//! no I/O, no shared mutable state, no suspension points. The pipeline is
//!
//! ```text
//! raw Node tree → preprocess → compute_positions → emit → TreeLayout
//! ```
//!
//! Configure a run through [LayoutOptions]:
//! * [`LayoutOptions::with_display_level`] - depth-limited display
//!   (default unbounded)
//! * [`LayoutOptions::with_orientation`] - growth direction
//!   (default [Orientation::Right])
//!
//! See [crate] docs for the quick API.

pub mod coordinates;
pub mod layout_error;
pub mod orientation;
pub mod preprocess;
pub mod trace;

pub use coordinates::{DEFAULT_BRANCH_LENGTH, NodePositions};
pub use layout_error::LayoutError;
pub use orientation::{AxisSigns, Orientation};
pub use trace::Primitive;

use crate::model::node::Node;
use serde::Serialize;
use tracing::debug;

// ============================================================================
// DISPLAY LEVEL
// ============================================================================
/// Maximum tree level to display; the root is at level 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayLevel {
    /// Show the whole tree
    #[default]
    Unbounded,
    /// Discard children of nodes at or beyond this level
    Levels(u32),
}

impl DisplayLevel {
    /// Validates a caller-supplied level.
    ///
    /// # Errors
    /// [LayoutError::InvalidDisplayLevel] if `level` is negative.
    pub fn limit(level: i64) -> Result<Self, LayoutError> {
        if level < 0 {
            return Err(LayoutError::InvalidDisplayLevel { level });
        }
        Ok(DisplayLevel::Levels(level as u32))
    }
}

// ============================================================================
// OPTIONS
// ============================================================================
/// Configuration surface of a layout run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutOptions {
    display_level: DisplayLevel,
    orientation: Orientation,
}

impl LayoutOptions {
    /// Creates options with the defaults: unbounded level, growing right.
    pub fn new() -> Self {
        LayoutOptions::default()
    }

    /// Limits the displayed tree depth.
    pub fn with_display_level(mut self, display_level: DisplayLevel) -> Self {
        self.display_level = display_level;
        self
    }

    /// Sets the growth direction of the drawn tree.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Returns the configured display level.
    pub fn display_level(&self) -> DisplayLevel {
        self.display_level
    }

    /// Returns the configured orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

// ============================================================================
// RESULT
// ============================================================================
/// Output of one layout run.
///
/// `ordered_labels` and `leaf_names` always have identical length and order
/// (top-to-bottom / left-to-right visual order); the unclassified
/// pseudo-leaf, if present, is last in both.
#[derive(Clone, Debug, Serialize)]
pub struct TreeLayout {
    /// Drawable primitives, in emission order
    pub primitives: Vec<Primitive>,
    /// Leaf labels in visual order
    pub ordered_labels: Vec<String>,
    /// Leaf names in visual order
    pub leaf_names: Vec<String>,
    /// Orientation the primitives were projected with
    pub orientation: Orientation,
    /// Per-axis direction signs for the figure collaborator
    pub signs: AxisSigns,
    /// Rank-axis tick positions, one per label
    pub tick_positions: Vec<f64>,
}

// ============================================================================
// PIPELINE (pub)
// ============================================================================
/// Runs the full layout pipeline on `root`.
///
/// # Errors
/// See [LayoutError]; any error aborts the run with no partial result.
pub fn layout(root: &Node, options: &LayoutOptions) -> Result<TreeLayout, LayoutError> {
    let (tree, unclassified) = preprocess::preprocess(root, options.display_level())?;
    let positions = coordinates::compute_positions(&tree)?;
    let (primitives, ordered_labels, leaf_names) = trace::emit(
        &tree,
        &positions,
        options.orientation(),
        unclassified.as_deref(),
    );

    debug!(
        primitives = primitives.len(),
        leaves = leaf_names.len(),
        orientation = ?options.orientation(),
        "layout complete"
    );

    let tick_positions = (0..ordered_labels.len()).map(|rank| rank as f64).collect();
    Ok(TreeLayout {
        primitives,
        ordered_labels,
        leaf_names,
        orientation: options.orientation(),
        signs: options.orientation().signs(),
        tick_positions,
    })
}
