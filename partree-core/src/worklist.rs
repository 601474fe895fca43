//! The worklist of active partial trees.
//!
//! Trees are served first-in, first-out. Membership of every vertex is
//! resolved through the list's [`DisjointSet`], so a tree can be located from
//! any of its vertices.

use std::collections::VecDeque;

use crate::{
    disjoint_set::DisjointSet, error::MstError, graph::VertexId, partial_tree::PartialTree,
};

/// Queue of partial trees plus the disjoint set describing their vertices.
///
/// # Examples
/// ```
/// use partree_core::{PartialTree, PartialTreeList, VertexId};
///
/// let mut list = PartialTreeList::new(2);
/// list.append(PartialTree::new(VertexId::new(0)));
/// list.append(PartialTree::new(VertexId::new(1)));
/// let tree = list.remove_tree_containing(VertexId::new(1))?;
/// assert_eq!(tree.root(), VertexId::new(1));
/// assert_eq!(list.remove_front()?.root(), VertexId::new(0));
/// assert!(list.is_empty());
/// # Ok::<(), partree_core::MstError>(())
/// ```
#[derive(Clone, Debug)]
pub struct PartialTreeList {
    trees: VecDeque<PartialTree>,
    sets: DisjointSet,
}

impl PartialTreeList {
    /// Creates an empty list tracking `vertex_count` vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            trees: VecDeque::with_capacity(vertex_count),
            sets: DisjointSet::new(vertex_count),
        }
    }

    /// Returns the number of trees in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Returns `true` when the list holds no trees.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Adds a tree at the back.
    pub fn append(&mut self, tree: PartialTree) {
        self.trees.push_back(tree);
    }

    /// Removes the tree at the front.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyList`] when the list is empty.
    pub fn remove_front(&mut self) -> Result<PartialTree, MstError> {
        self.trees.pop_front().ok_or(MstError::EmptyList)
    }

    /// Removes the tree that contains `vertex`.
    ///
    /// # Errors
    /// Returns [`MstError::NoSuchTree`] if `vertex` is untracked or its tree
    /// is not currently in the list.
    pub fn remove_tree_containing(&mut self, vertex: VertexId) -> Result<PartialTree, MstError> {
        let missing = MstError::NoSuchTree {
            vertex: vertex.index(),
        };
        let root = self.sets.find(vertex).ok_or_else(|| missing.clone())?;
        let position = self
            .trees
            .iter()
            .position(|tree| tree.root() == root)
            .ok_or_else(|| missing.clone())?;
        self.trees.remove(position).ok_or(missing)
    }

    /// Resolves the root of the tree containing `vertex`.
    pub fn find_root(&mut self, vertex: VertexId) -> Option<VertexId> {
        self.sets.find(vertex)
    }

    /// Returns the disjoint set backing the list.
    #[must_use]
    pub fn sets(&self) -> &DisjointSet {
        &self.sets
    }

    /// Merges `other` into `tree` using the list's disjoint set.
    pub(crate) fn merge_trees(
        &mut self,
        tree: &mut PartialTree,
        other: PartialTree,
    ) -> Result<(), MstError> {
        tree.merge(other, &mut self.sets)
    }

    /// Iterates over the trees from front to back.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, PartialTree> {
        self.trees.iter()
    }

    /// Verifies the structural invariants of the list.
    ///
    /// Every tracked vertex must resolve to the root of exactly one tree in
    /// the list, each tree's vertex count must match its set size, and each
    /// frontier must be a valid heap.
    ///
    /// # Errors
    /// Returns [`MstError::InvariantViolation`] naming the first violation.
    pub fn check_invariants(&self) -> Result<(), MstError> {
        let mut owners = vec![0_usize; self.sets.len()];
        for tree in &self.trees {
            let root = tree.root();
            let violation = |invariant: &'static str| MstError::InvariantViolation {
                invariant,
                vertex: root.index(),
            };
            let size = self
                .sets
                .set_size(root)
                .ok_or_else(|| violation("tree root must be a disjoint-set root"))?;
            if size != tree.vertex_count() {
                return Err(violation("tree vertex count must match its set size"));
            }
            if !tree.arcs().is_valid() {
                return Err(violation("tree frontier must satisfy the heap property"));
            }
            let slot = owners
                .get_mut(root.index())
                .ok_or_else(|| violation("tree root must be tracked"))?;
            *slot += 1;
            if *slot > 1 {
                return Err(violation("each root must own exactly one tree"));
            }
        }

        for index in 0..self.sets.len() {
            let vertex = VertexId::new(index);
            let resolved = self
                .sets
                .root_of(vertex)
                .and_then(|root| owners.get(root.index()).copied());
            if resolved != Some(1) {
                return Err(MstError::InvariantViolation {
                    invariant: "every vertex must resolve to a tree in the list",
                    vertex: index,
                });
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PartialTreeList {
    type Item = &'a PartialTree;
    type IntoIter = std::collections::vec_deque::Iter<'a, PartialTree>;

    fn into_iter(self) -> Self::IntoIter {
        self.trees.iter()
    }
}
