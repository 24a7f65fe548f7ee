//! Tree preprocessing: normalizes a raw input tree before layout.
//!
//! Preprocessing performs, in order:
//! 1. **Root canonicalization** - a node literally named `"root"` (first
//!    match in level order) becomes the designated root; otherwise the
//!    structural root is used and named `"root"` if unnamed.
//! 2. **Unclassified extraction** - a direct root child named
//!    `"unclassified"` is removed and its children spliced onto the end of
//!    the root's child list; the node itself is drawn detached later.
//! 3. **Depth pruning** - children of nodes at or beyond the display level
//!    are discarded, leaving terminals at the cut boundary. Idempotent.
//! 4. **Name synthesis** - unnamed nodes receive `internal_<n>` names from
//!    a counter local to this run: terminals first in visit order, then the
//!    remaining vertices in level order.
//!
//! The caller's tree is read through `&` only; all mutation happens on a
//! private copy that becomes the [LayoutTree] arena.

use crate::layout::DisplayLevel;
use crate::layout::layout_error::LayoutError;
use crate::model::node::Node;
use crate::model::tree::{LayoutTree, VertexIndex};
use crate::model::vertex::{BranchLength, Vertex};
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Name that designates the canonical root in the input.
const ROOT_NAME: &str = "root";

/// Name that designates the detached pseudo-leaf clade.
const UNCLASSIFIED_NAME: &str = "unclassified";

// ============================================================================
// NAME COUNTER
// ============================================================================
/// Counter for synthetic `internal_<n>` names.
///
/// One counter value exists per layout run; it is never global state, so
/// repeated and concurrent runs produce identical names for identical input.
#[derive(Debug)]
pub struct NameCounter {
    next: usize,
}

impl NameCounter {
    /// Creates a fresh counter; the first synthesized name is `internal_1`.
    pub fn new() -> Self {
        NameCounter { next: 1 }
    }

    /// Returns the next synthetic name and advances the counter.
    pub fn next_name(&mut self) -> String {
        let n = self.next;
        self.next += 1;
        format!("internal_{n}")
    }
}

impl Default for NameCounter {
    fn default() -> Self {
        NameCounter::new()
    }
}

// ============================================================================
// PREPROCESSING (pub)
// ============================================================================
/// Normalizes `root` into a [LayoutTree] ready for coordinate assignment.
///
/// # Arguments
/// * `root` - Raw tree from the external parser; never mutated
/// * `display_level` - Maximum level to keep (root is level 0)
///
/// # Returns
/// The normalized arena tree, plus the name of the extracted unclassified
/// clade if the root had one.
///
/// # Errors
/// * [LayoutError::MalformedNode] - negative or non-finite branch length,
///   or duplicate names after synthesis
/// * [LayoutError::EmptyTree] - no terminal vertices remain
pub fn preprocess(
    root: &Node,
    display_level: DisplayLevel,
) -> Result<(LayoutTree, Option<String>), LayoutError> {
    // Private working copy; the designated root may be a subtree
    let mut working = designated_root(root).clone();
    if working.name.is_none() {
        working.name = Some(ROOT_NAME.to_owned());
    }

    let unclassified = extract_unclassified(&mut working);
    prune_to_level(&mut working, display_level);

    let mut counter = NameCounter::new();
    assign_terminal_names(&mut working, &mut counter);
    assign_remaining_names(&mut working, &mut counter);

    let tree = build_arena(&working)?;
    if tree.num_terminals() == 0 {
        return Err(LayoutError::EmptyTree);
    }
    debug_assert!(tree.is_valid());

    debug!(
        vertices = tree.num_vertices(),
        terminals = tree.num_terminals(),
        unclassified = unclassified.is_some(),
        "tree preprocessed"
    );

    Ok((tree, unclassified))
}

// ============================================================================
// Individual passes
// ============================================================================
/// Scans the tree in level order for a node named `"root"`; its subtree
/// becomes the layout tree. Falls back to the structural root.
fn designated_root(root: &Node) -> &Node {
    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        if node.name.as_deref() == Some(ROOT_NAME) {
            return node;
        }
        queue.extend(node.children.iter());
    }
    root
}

/// Removes the first direct root child named `"unclassified"`, splicing its
/// children onto the end of the root's child list in their given order.
/// Returns the extracted node's name.
fn extract_unclassified(root: &mut Node) -> Option<String> {
    let position = root
        .children
        .iter()
        .position(|child| child.name.as_deref() == Some(UNCLASSIFIED_NAME))?;

    let unclassified = root.children.remove(position);
    root.children.extend(unclassified.children);
    unclassified.name
}

/// Discards the children of any node at level >= the display level,
/// keeping the node itself as a terminal at the cut boundary.
fn prune_to_level(root: &mut Node, display_level: DisplayLevel) {
    let DisplayLevel::Levels(max_level) = display_level else {
        return;
    };

    fn prune(node: &mut Node, level: u32, max_level: u32) {
        if level >= max_level {
            node.children.clear();
        } else {
            for child in &mut node.children {
                prune(child, level + 1, max_level);
            }
        }
    }

    prune(root, 0, max_level);
}

/// Names unnamed terminals in depth-first visit order, so synthesized leaf
/// names follow the visual rank order.
fn assign_terminal_names(root: &mut Node, counter: &mut NameCounter) {
    if root.is_terminal() {
        if root.name.is_none() {
            root.name = Some(counter.next_name());
        }
        return;
    }
    for child in &mut root.children {
        assign_terminal_names(child, counter);
    }
}

/// Names any still-unnamed vertices in level order.
fn assign_remaining_names(root: &mut Node, counter: &mut NameCounter) {
    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        if node.name.is_none() {
            node.name = Some(counter.next_name());
        }
        queue.extend(node.children.iter_mut());
    }
}

/// Copies the fully named working tree into a fresh arena, validating
/// branch lengths and name uniqueness on the way.
fn build_arena(root: &Node) -> Result<LayoutTree, LayoutError> {
    let mut tree = LayoutTree::with_capacity(root.subtree_size());
    let mut seen = HashSet::new();

    let root_index = add_subtree(&mut tree, &mut seen, root)?;
    tree.set_root(root_index);

    Ok(tree)
}

fn add_subtree(
    tree: &mut LayoutTree,
    seen: &mut HashSet<String>,
    node: &Node,
) -> Result<VertexIndex, LayoutError> {
    // All nodes are named by the time the arena is built
    let name = node.name.clone().expect("preprocessing names every node");

    if !seen.insert(name.clone()) {
        return Err(LayoutError::malformed(&name, "duplicate name"));
    }

    let branch_length = match node.branch_length {
        None => None,
        Some(value) if value.is_finite() && value >= 0.0 => Some(BranchLength::new(value)),
        Some(value) => {
            return Err(LayoutError::malformed(
                &name,
                format!("branch length must be non-negative and finite, got {value}"),
            ));
        }
    };

    let index = tree.push_vertex(|index| Vertex::new(index, name, branch_length));
    for child in &node.children {
        let child_index = add_subtree(tree, seen, child)?;
        tree.attach_child(index, child_index);
    }

    Ok(index)
}
