//! Normalized tree representation consumed by the layout passes.
//!
//! Provides the core data structure for the layout engine:
//! * [`LayoutTree`] - tree structure using the arena pattern for efficient
//!   memory layout, produced by preprocessing and read-only afterwards.
//! * [VertexIndex] as type used to index vertices in the tree.
//! * Level-order, post-order and terminal traversals plus root-path lookup,
//!   the operations the coordinate engine and trace emitter are built on.

use crate::model::vertex::Vertex;
use std::collections::VecDeque;

/// Index of a vertex in a tree (arena).
pub type VertexIndex = usize;

/// *During construction only*, index for unset root.
const NO_ROOT_SET_INDEX: VertexIndex = usize::MAX;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A rooted, possibly multifurcating phylogenetic tree represented using the
/// arena pattern on [Vertex].
///
/// Vertices are stored in a contiguous vector and referenced by
/// [VertexIndex]. Aim is to avoid referencing troubles as well as to provide
/// efficient memory layout and cache locality for traversal operations.
///
/// # Structure
/// - All vertices (root, internal, and leaves) are stored in the arena.
/// - Index of root is maintained; vertices are added in depth-first order
///   during preprocessing, but traversals never rely on that.
/// - Children are kept as an ordered index list, so polytomies are handled
///   the same way as binary branching.
/// - Branch lengths are optional, but if provided must be non-negative.
///
/// # Construction
/// Trees are built exclusively by [preprocess](crate::layout::preprocess),
/// which normalizes a caller-supplied [Node](crate::model::Node) value into
/// a private arena. The caller's tree is never mutated.
#[derive(Debug, Clone)]
pub struct LayoutTree {
    /// Vertices of this tree (arena pattern)
    vertices: Vec<Vertex>,

    /// Index of the root of this tree
    root_index: VertexIndex,
}

// ============================================================================
// New, Getters / Accessors, etc.
// ============================================================================
impl LayoutTree {
    /// Creates an empty tree with capacity for `capacity` vertices.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        LayoutTree {
            vertices: Vec::with_capacity(capacity),
            root_index: NO_ROOT_SET_INDEX,
        }
    }

    /// Adds a vertex to the arena, assigning a unique index, which gets
    /// returned. Parent and children links are wired up separately.
    pub(crate) fn push_vertex(&mut self, vertex_fn: impl FnOnce(VertexIndex) -> Vertex) -> VertexIndex {
        let index = self.vertices.len();
        self.vertices.push(vertex_fn(index));
        index
    }

    /// Links `child` under `parent`, preserving child order.
    pub(crate) fn attach_child(&mut self, parent: VertexIndex, child: VertexIndex) {
        self.vertices[parent].push_child(child);
        self.vertices[child].set_parent(parent);
    }

    /// Marks the vertex at `index` as the root.
    pub(crate) fn set_root(&mut self, index: VertexIndex) {
        self.root_index = index;
    }

    /// Returns whether root of tree has been set.
    pub fn is_root_set(&self) -> bool {
        self.root_index != NO_ROOT_SET_INDEX
    }

    /// Returns a reference to the root vertex.
    ///
    /// # Panics
    /// Panics if the root hasn't been set and thus the tree hasn't been
    /// fully constructed yet.
    pub fn root(&self) -> &Vertex {
        &self[self.root_index]
    }

    /// Returns the index of the root.
    pub fn root_index(&self) -> VertexIndex {
        self.root_index
    }

    /// Returns a reference to the vertex at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn vertex(&self, index: VertexIndex) -> &Vertex {
        &self[index]
    }

    /// Returns the number of vertices in this tree.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of terminal vertices in this tree.
    pub fn num_terminals(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_terminal()).count()
    }

    /// Returns the indices of all terminal vertices in the order a
    /// depth-first traversal reaches them (children in their given order).
    ///
    /// This order fixes the visual rank of the leaves: the i-th terminal
    /// returned is drawn at rank `i`.
    pub fn terminal_indices(&self) -> Vec<VertexIndex> {
        let mut terminals = Vec::new();
        if !self.is_root_set() {
            return terminals;
        }

        let mut stack = vec![self.root_index];
        while let Some(index) = stack.pop() {
            let vertex = &self[index];
            if vertex.is_terminal() {
                terminals.push(index);
            } else {
                // Push in reverse so the first child is processed first
                for &child in vertex.children().iter().rev() {
                    stack.push(child);
                }
            }
        }

        terminals
    }

    /// Returns the path from the root to the vertex at `index`, both
    /// inclusive, as an ordered ancestor chain.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn path_from_root(&self, index: VertexIndex) -> Vec<VertexIndex> {
        let mut path = vec![index];
        let mut current = index;
        while let Some(parent) = self[current].parent() {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }
}

impl std::ops::Index<VertexIndex> for LayoutTree {
    type Output = Vertex;

    fn index(&self, index: VertexIndex) -> &Self::Output {
        &self.vertices[index]
    }
}

// ============================================================================
// Validation
// ============================================================================
impl LayoutTree {
    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Root index is valid and the root has no parent
    /// - All vertex indices match their position in the arena
    /// - All child indices are valid and point back to the correct parent
    /// - All non-root vertices have a parent that lists them as a child
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        if self.root_index == NO_ROOT_SET_INDEX || self.root_index >= self.vertices.len() {
            return false;
        }

        if !self.vertices[self.root_index].is_root() {
            return false;
        }

        for (index, vertex) in self.vertices.iter().enumerate() {
            // Check vertex index matches its arena position
            if vertex.index() != index {
                return false;
            }

            // Check children references
            for &child in vertex.children() {
                if child >= self.vertices.len() {
                    return false;
                }
                if self.vertices[child].parent() != Some(index) {
                    return false;
                }
            }

            // Check parent references
            match vertex.parent() {
                None => {
                    // Only the root may lack a parent
                    if index != self.root_index {
                        return false;
                    }
                }
                Some(parent_index) => {
                    if parent_index >= self.vertices.len() {
                        return false;
                    }
                    if !self.vertices[parent_index].children().contains(&index) {
                        return false;
                    }
                }
            }
        }

        true
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl LayoutTree {
    /// Returns an iterator over the tree in post-order (children before
    /// parents).
    ///
    /// Post-order traversal visits each vertex's children before visiting
    /// the vertex itself. The coordinate engine uses it to center parents
    /// over already-resolved child ranks.
    pub fn post_order_iter(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self)
    }

    /// Returns an iterator over the tree in level order (breadth-first,
    /// root first).
    ///
    /// The trace emitter walks the tree in this order, so primitives come
    /// out grouped by depth level.
    pub fn level_order_iter(&self) -> LevelOrderIter<'_> {
        LevelOrderIter::new(self)
    }
}

/// Iterator for post-order traversal (children before parents).
///
/// Uses a stack-based approach to traverse the tree without recursion.
/// Each vertex is visited after all its descendants have been visited.
pub struct PostOrderIter<'a> {
    tree: &'a LayoutTree,
    stack: Vec<(VertexIndex, bool)>, // (index, children_visited)
}

impl<'a> PostOrderIter<'a> {
    fn new(tree: &'a LayoutTree) -> Self {
        let mut stack = Vec::new();
        if tree.is_root_set() {
            stack.push((tree.root_index, false));
        }
        PostOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, children_visited)) = self.stack.pop() {
            let vertex = &self.tree[index];

            if children_visited || vertex.is_terminal() {
                // Either we've already processed children, or this is a leaf
                return Some(vertex);
            } else {
                // Mark this vertex as "children will be visited"
                self.stack.push((index, true));

                // Push children (last first, so the first is processed first)
                for &child in vertex.children().iter().rev() {
                    self.stack.push((child, false));
                }
            }
        }
        None
    }
}

/// Iterator for level-order traversal (breadth-first, root first).
pub struct LevelOrderIter<'a> {
    tree: &'a LayoutTree,
    queue: VecDeque<VertexIndex>,
}

impl<'a> LevelOrderIter<'a> {
    fn new(tree: &'a LayoutTree) -> Self {
        let mut queue = VecDeque::new();
        if tree.is_root_set() {
            queue.push_back(tree.root_index);
        }
        LevelOrderIter { tree, queue }
    }
}

impl<'a> Iterator for LevelOrderIter<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.queue.pop_front()?;
        let vertex = &self.tree[index];
        self.queue.extend(vertex.children().iter().copied());
        Some(vertex)
    }
}
