//! Coordinate engine: assigns a depth and a rank to every vertex.
//!
//! The canonical, leaf-anchored formulation:
//! 1. Terminals get rank `i` in the order a depth-first traversal reaches
//!    them (0-based), fixing the visual leaf order.
//! 2. Every vertex gets depth = sum of branch lengths along the root path
//!    (missing lengths count as [DEFAULT_BRANCH_LENGTH]); the root is pinned
//!    to depth 0, its own incoming edge ignored.
//! 3. Internal vertices get rank = arithmetic mean of their children's
//!    ranks, resolved in post-order. The mean is over however many children
//!    exist, so polytomies center the same way as binary splits - it is not
//!    weighted by subtree size.

use crate::layout::layout_error::LayoutError;
use crate::model::tree::{LayoutTree, VertexIndex};
use crate::model::vertex::Vertex;

/// Substitute for a missing branch length.
pub const DEFAULT_BRANCH_LENGTH: f64 = 1.0;

/// Depth and rank per vertex, indexed by [VertexIndex].
///
/// Every vertex of the preprocessed tree has exactly one entry in each
/// table before trace emission.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePositions {
    depth: Vec<f64>,
    rank: Vec<f64>,
}

impl NodePositions {
    /// Returns the depth (cumulative branch length from the root) of the
    /// vertex at `index`.
    pub fn depth_of(&self, index: VertexIndex) -> f64 {
        self.depth[index]
    }

    /// Returns the rank (vertical ordering position) of the vertex at
    /// `index`.
    pub fn rank_of(&self, index: VertexIndex) -> f64 {
        self.rank[index]
    }
}

/// Computes depth and rank for every vertex of `tree`.
///
/// # Errors
/// [LayoutError::EmptyTree] if the tree has no terminal vertices.
pub fn compute_positions(tree: &LayoutTree) -> Result<NodePositions, LayoutError> {
    let terminals = tree.terminal_indices();
    if terminals.is_empty() {
        return Err(LayoutError::EmptyTree);
    }

    let num_vertices = tree.num_vertices();
    let mut depth = vec![0.0; num_vertices];
    let mut rank = vec![0.0; num_vertices];

    // Terminal ranks are fixed by visit order
    for (visit_index, &terminal) in terminals.iter().enumerate() {
        rank[terminal] = visit_index as f64;
    }

    // Depths accumulate root-to-leaf; level order guarantees parents are
    // resolved before their children
    for vertex in tree.level_order_iter() {
        if let Some(parent) = vertex.parent() {
            depth[vertex.index()] = depth[parent] + branch_or_default(vertex);
        }
    }

    // A tree reduced to a single terminal keeps its own edge as the whole
    // root-to-leaf path sum
    if num_vertices == 1 {
        depth[tree.root_index()] = branch_or_default(tree.root());
    }

    // Internal ranks center parents over their children
    for vertex in tree.post_order_iter() {
        if !vertex.is_terminal() {
            let children = vertex.children();
            let sum: f64 = children.iter().map(|&child| rank[child]).sum();
            rank[vertex.index()] = sum / children.len() as f64;
        }
    }

    Ok(NodePositions { depth, rank })
}

fn branch_or_default(vertex: &Vertex) -> f64 {
    vertex
        .branch_length()
        .map_or(DEFAULT_BRANCH_LENGTH, |length| *length)
}
