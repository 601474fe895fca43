//! Output of a partial-tree MST run.

use crate::{arc::Arc, graph::VertexId};

/// Sums arc weights as `f64` so the total does not depend on arc order.
pub(crate) fn total_weight(arcs: &[Arc]) -> f64 {
    arcs.iter().map(|arc| f64::from(arc.weight())).sum()
}

/// Arcs selected by a run together with the root of every component.
///
/// When the graph is connected the forest is a minimum spanning tree and
/// [`SpanningForest::is_tree`] returns `true`.
///
/// # Examples
/// ```
/// use partree_core::{Graph, PartialTreeMstBuilder};
///
/// let graph = Graph::from_edges(3, &[(0, 1, 2.0), (1, 2, 3.0), (0, 2, 5.0)])?;
/// let forest = PartialTreeMstBuilder::new().build().solve(&graph)?;
/// assert!(forest.is_tree());
/// assert_eq!(forest.arcs().len(), 2);
/// assert_eq!(forest.total_weight(), 5.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    arcs: Vec<Arc>,
    roots: Vec<VertexId>,
}

impl SpanningForest {
    pub(crate) fn new(arcs: Vec<Arc>, roots: Vec<VertexId>) -> Self {
        Self { arcs, roots }
    }

    /// Returns the selected arcs in selection order.
    #[must_use]
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// Consumes the forest, returning the selected arcs.
    #[must_use]
    pub fn into_arcs(self) -> Vec<Arc> {
        self.arcs
    }

    /// Returns the root vertex of each component.
    #[must_use]
    pub fn component_roots(&self) -> &[VertexId] {
        &self.roots
    }

    /// Returns the number of connected components spanned.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.roots.len()
    }

    /// Returns `true` when the forest spans a single component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.roots.len() == 1
    }

    /// Returns the summed weight of the selected arcs.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        total_weight(&self.arcs)
    }

    /// Returns `true` if the undirected edge `{left, right}` was selected.
    #[must_use]
    pub fn contains_edge(&self, left: VertexId, right: VertexId) -> bool {
        let wanted = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        self.arcs.iter().any(|arc| arc.endpoints() == wanted)
    }
}
