//! Partial trees: growing subtrees of the final MST.

use crate::{arc::Arc, disjoint_set::DisjointSet, error::MstError, graph::VertexId, heap::MinHeap};

/// A connected piece of the MST under construction.
///
/// The tree is identified by its root, which is always the disjoint-set
/// representative of its vertices. Its heap holds candidate arcs whose source
/// lies inside the tree; arcs that have become internal are discarded lazily
/// when they surface.
#[derive(Clone, Debug)]
pub struct PartialTree {
    root: VertexId,
    vertex_count: usize,
    arcs: MinHeap<Arc>,
}

impl PartialTree {
    /// Creates a single-vertex tree with an empty frontier.
    #[must_use]
    pub fn new(root: VertexId) -> Self {
        Self {
            root,
            vertex_count: 1,
            arcs: MinHeap::new(),
        }
    }

    /// Creates a single-vertex tree whose frontier is bulk-built from `arcs`.
    #[must_use]
    pub fn with_arcs(root: VertexId, arcs: Vec<Arc>) -> Self {
        Self {
            root,
            vertex_count: 1,
            arcs: MinHeap::from_vec(arcs),
        }
    }

    /// Returns the root vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn root(&self) -> VertexId { self.root }

    /// Returns the number of vertices spanned by the tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the frontier heap.
    #[must_use]
    pub fn arcs(&self) -> &MinHeap<Arc> {
        &self.arcs
    }

    /// Returns the frontier heap mutably.
    pub fn arcs_mut(&mut self) -> &mut MinHeap<Arc> {
        &mut self.arcs
    }

    /// Absorbs `other` into this tree.
    ///
    /// The two roots are united in `sets`; when `other` spans strictly more
    /// vertices its root becomes the representative and this tree adopts it.
    /// The frontier heaps are concatenated and rebuilt in one pass.
    ///
    /// # Errors
    /// Returns [`MstError::InvariantViolation`] if either root is not tracked
    /// by `sets`.
    pub fn merge(&mut self, other: Self, sets: &mut DisjointSet) -> Result<(), MstError> {
        let root = sets
            .union(self.root, other.root)
            .ok_or(MstError::InvariantViolation {
                invariant: "merged tree roots must be tracked by the disjoint set",
                vertex: other.root.index(),
            })?;
        self.root = root;
        self.vertex_count = self.vertex_count.saturating_add(other.vertex_count);
        self.arcs.append(other.arcs);
        Ok(())
    }
}
