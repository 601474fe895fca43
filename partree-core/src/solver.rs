//! Configured entry point for running the partial-tree MST.

use tracing::instrument;

use crate::{
    Result,
    builder::{DisconnectedPolicy, HeapConstruction},
    graph::Graph,
    mst::{grow_forest, grow_tree, initialize_with},
    partial_tree::PartialTree,
    result::SpanningForest,
};

/// A configured partial-tree MST solver.
///
/// # Examples
/// ```
/// use partree_core::{DisconnectedPolicy, Graph, MstError, PartialTreeMstBuilder};
///
/// let graph = Graph::from_edges(4, &[(0, 1, 1.0), (2, 3, 2.0)])?;
///
/// let strict = PartialTreeMstBuilder::new().build();
/// assert!(matches!(strict.solve(&graph), Err(MstError::MalformedGraph { .. })));
///
/// let lenient = PartialTreeMstBuilder::new()
///     .with_disconnected_policy(DisconnectedPolicy::Forest)
///     .build();
/// let forest = lenient.solve(&graph)?;
/// assert_eq!(forest.component_count(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct PartialTreeMst {
    heap_construction: HeapConstruction,
    disconnected_policy: DisconnectedPolicy,
    invariant_checks: bool,
}

impl PartialTreeMst {
    pub(crate) fn new(
        heap_construction: HeapConstruction,
        disconnected_policy: DisconnectedPolicy,
        invariant_checks: bool,
    ) -> Self {
        Self {
            heap_construction,
            disconnected_policy,
            invariant_checks,
        }
    }

    /// Returns how frontier heaps are seeded.
    #[must_use]
    pub fn heap_construction(&self) -> HeapConstruction {
        self.heap_construction
    }

    /// Returns the behaviour on disconnected graphs.
    #[must_use]
    pub fn disconnected_policy(&self) -> DisconnectedPolicy {
        self.disconnected_policy
    }

    /// Returns whether worklist invariants are verified around each run.
    #[must_use]
    pub fn invariant_checks(&self) -> bool {
        self.invariant_checks
    }

    /// Computes the minimum spanning tree (or forest) of `graph`.
    ///
    /// An empty graph yields an empty forest with no components.
    ///
    /// # Errors
    /// Returns [`crate::MstError::MalformedGraph`] for a disconnected graph
    /// under [`DisconnectedPolicy::Fail`], and
    /// [`crate::MstError::InvariantViolation`] when invariant checks are
    /// enabled and the worklist is found inconsistent.
    #[instrument(
        name = "mst.solve",
        err,
        skip(self, graph),
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            policy = ?self.disconnected_policy,
            heap = ?self.heap_construction,
        ),
    )]
    pub fn solve(&self, graph: &Graph) -> Result<SpanningForest> {
        let mut list = initialize_with(graph, self.heap_construction);
        if self.invariant_checks {
            list.check_invariants()?;
        }

        let arcs = match self.disconnected_policy {
            DisconnectedPolicy::Fail => grow_tree(&mut list)?,
            DisconnectedPolicy::Forest => grow_forest(&mut list)?,
        };

        if self.invariant_checks {
            list.check_invariants()?;
        }
        let roots = list.iter().map(PartialTree::root).collect();
        Ok(SpanningForest::new(arcs, roots))
    }
}
