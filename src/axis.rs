//! Axis-metadata glue for the external figure-assembly collaborator.
//!
//! Building an actual chart figure (axis styling defaults, colorscales,
//! hover configuration) is out of scope here; this module only derives the
//! few numbers the collaborator cannot compute without the layout: tick
//! positions on the rank axis, their labels, the per-axis signs and the
//! inverted rank range.

use crate::layout::{AxisSigns, TreeLayout};
use serde::Serialize;

/// Tick and range metadata for the rank axis of a laid-out tree.
#[derive(Clone, Debug, Serialize)]
pub struct AxisHints {
    /// Direction signs the primitives were projected with
    pub signs: AxisSigns,
    /// Sign-adjusted tick positions, one per leaf label
    pub tick_values: Vec<f64>,
    /// Tick labels in visual order
    pub tick_labels: Vec<String>,
    /// Rank-axis range, inverted so rank 0 is drawn at the top
    pub rank_range: [f64; 2],
}

impl AxisHints {
    /// Derives axis metadata from a layout result.
    pub fn for_layout(layout: &TreeLayout) -> Self {
        let tick_values = layout
            .tick_positions
            .iter()
            .map(|rank| rank * layout.signs.rank)
            .collect();

        AxisHints {
            signs: layout.signs,
            tick_values,
            tick_labels: layout.ordered_labels.clone(),
            rank_range: [layout.ordered_labels.len() as f64 + 1.0, -1.0],
        }
    }
}
