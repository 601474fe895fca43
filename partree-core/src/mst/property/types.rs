//! Fixture types shared by the MST property tests.

use test_strategy::Arbitrary;

use crate::graph::Graph;

/// How edge weights and topology are chosen for a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Every edge has a distinct weight, so the MST is unique.
    #[weight(2)]
    Unique,
    /// Weights come from a pool of one to three values.
    #[weight(3)]
    ManyIdentical,
    /// A random spanning path plus a handful of extra edges.
    #[weight(2)]
    Sparse,
    /// Edge probability between 0.7 and 0.95.
    #[weight(2)]
    Dense,
    /// Several components with no edges between them.
    #[weight(2)]
    Disconnected,
}

/// A generated graph plus the context needed to diagnose failures.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Undirected edges as `(left, right, weight)`.
    pub edges: Vec<(usize, usize, f32)>,
    /// Distribution used to generate the fixture.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Builds the [`Graph`] described by the fixture.
    pub(super) fn graph(&self) -> Graph {
        Graph::from_edges(self.vertex_count, &self.edges)
            .expect("generated fixtures only reference valid vertices")
    }

    /// One-line description used in failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len()
        )
    }
}
