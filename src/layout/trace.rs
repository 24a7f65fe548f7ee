//! Trace emission: turns a coordinate-annotated tree into drawable
//! primitives.
//!
//! The emitter walks the tree in level order. Every vertex becomes a
//! [Primitive::NodeMarker]; every parent→child edge becomes exactly two
//! [Primitive::BranchSegment]s forming a right-angle elbow - a run along the
//! rank axis at the parent's depth, then a run along the depth axis at the
//! child's rank. Single diagonal connectors are never emitted; the elbow is
//! what makes the figure read as a cladogram rather than a scatter plot.
//!
//! All coordinates are projected from (depth, rank) space into screen (x, y)
//! here, per the requested [Orientation]; the engine upstream is
//! orientation-agnostic.

use crate::layout::coordinates::NodePositions;
use crate::layout::orientation::Orientation;
use crate::model::tree::LayoutTree;
use serde::{Deserialize, Serialize};

/// A drawable primitive of the tree figure.
///
/// Closed tagged variant so downstream consumers can match exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    /// A point marker at a node's position. Leaves carry their name as a
    /// permanently visible label; for internal nodes the label is hover-only
    /// metadata (`is_leaf` distinguishes the two).
    NodeMarker {
        x: f64,
        y: f64,
        label: String,
        is_leaf: bool,
    },
    /// One straight run of an elbow connector between a parent and a child.
    BranchSegment { x0: f64, y0: f64, x1: f64, y1: f64 },
}

/// Emits the ordered primitives and label sequences for `tree`.
///
/// # Arguments
/// * `tree` - Preprocessed tree
/// * `positions` - Output of the coordinate engine for the same tree
/// * `orientation` - Screen mapping for depth and rank
/// * `unclassified` - Name of the extracted unclassified clade, if any;
///   emitted as one detached marker at depth 0, one rank slot before the
///   root, and appended last to both label sequences
///
/// # Returns
/// `(primitives, ordered_labels, leaf_names)`; the two label sequences have
/// identical length and order.
pub fn emit(
    tree: &LayoutTree,
    positions: &NodePositions,
    orientation: Orientation,
    unclassified: Option<&str>,
) -> (Vec<Primitive>, Vec<String>, Vec<String>) {
    let mut primitives = Vec::with_capacity(3 * tree.num_vertices());

    let mut leaf_names: Vec<String> = tree
        .terminal_indices()
        .iter()
        .map(|&index| tree[index].name().to_owned())
        .collect();
    let mut ordered_labels = leaf_names.clone();

    for vertex in tree.level_order_iter() {
        let index = vertex.index();
        let depth = positions.depth_of(index);
        let rank = positions.rank_of(index);

        let (x, y) = orientation.project(depth, rank);
        primitives.push(Primitive::NodeMarker {
            x,
            y,
            label: vertex.name().to_owned(),
            is_leaf: vertex.is_terminal(),
        });

        for &child in vertex.children() {
            let child_depth = positions.depth_of(child);
            let child_rank = positions.rank_of(child);

            // Rank-axis run at the parent's depth, then depth-axis run at
            // the child's rank
            let (x0, y0) = orientation.project(depth, rank);
            let (x1, y1) = orientation.project(depth, child_rank);
            let (x2, y2) = orientation.project(child_depth, child_rank);

            primitives.push(Primitive::BranchSegment { x0, y0, x1, y1 });
            primitives.push(Primitive::BranchSegment {
                x0: x1,
                y0: y1,
                x1: x2,
                y1: y2,
            });
        }
    }

    // The unclassified clade is drawn detached: a single marker one rank
    // slot before the root, never a branch
    if let Some(name) = unclassified {
        let root_rank = positions.rank_of(tree.root_index());
        let (x, y) = orientation.project(0.0, root_rank - 1.0);
        primitives.push(Primitive::NodeMarker {
            x,
            y,
            label: name.to_owned(),
            is_leaf: true,
        });
        ordered_labels.push(name.to_owned());
        leaf_names.push(name.to_owned());
    }

    (primitives, ordered_labels, leaf_names)
}
