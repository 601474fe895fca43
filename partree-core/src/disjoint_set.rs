//! Disjoint-set (union-find) over vertex indices.
//!
//! Tracks which partial tree each vertex belongs to. The representative of a
//! set is always the root vertex of the corresponding partial tree.

use crate::graph::VertexId;

/// Union-find with path-compressed `find` and union by size.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets, one per vertex.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// Returns the number of tracked vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no vertices are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub fn components(&self) -> usize { self.components }

    /// Returns the direct parent of `vertex`, or `None` if it is not tracked.
    #[must_use]
    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.parent.get(vertex.index()).copied().map(VertexId::new)
    }

    /// Returns the number of vertices in the set rooted at `root`.
    ///
    /// Returns `None` when `root` is untracked or not a root.
    #[must_use]
    pub fn set_size(&self, root: VertexId) -> Option<usize> {
        let index = root.index();
        (self.parent.get(index) == Some(&index))
            .then(|| self.size.get(index).copied())
            .flatten()
    }

    /// Resolves the representative of `vertex`, compressing the path walked.
    pub fn find(&mut self, vertex: VertexId) -> Option<VertexId> {
        let root = self.root_of(vertex)?;

        let mut node = vertex.index();
        while self.parent[node] != root.index() {
            let next = self.parent[node];
            self.parent[node] = root.index();
            node = next;
        }

        Some(root)
    }

    /// Resolves the representative of `vertex` without modifying the set.
    #[must_use]
    pub fn root_of(&self, vertex: VertexId) -> Option<VertexId> {
        let mut node = vertex.index();
        let mut steps = 0_usize;
        loop {
            let parent = *self.parent.get(node)?;
            if parent == node {
                return Some(VertexId::new(node));
            }
            steps += 1;
            if steps > self.parent.len() {
                return None;
            }
            node = parent;
        }
    }

    /// Merges the sets containing `into` and `other`, returning the new
    /// representative.
    ///
    /// The larger set keeps its root; on equal sizes `into`'s root wins.
    /// Returns `None` if either vertex is untracked.
    pub fn union(&mut self, into: VertexId, other: VertexId) -> Option<VertexId> {
        let into_root = self.find(into)?.index();
        let other_root = self.find(other)?.index();
        if into_root == other_root {
            return Some(VertexId::new(into_root));
        }

        let (parent, child) = if self.size[other_root] > self.size[into_root] {
            (other_root, into_root)
        } else {
            (into_root, other_root)
        };

        self.parent[child] = parent;
        self.size[parent] = self.size[parent].saturating_add(self.size[child]);
        self.components -= 1;
        Some(VertexId::new(parent))
    }
}
