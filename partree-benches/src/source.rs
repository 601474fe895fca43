//! Seeded synthetic graphs for benchmarks.
//!
//! Every graph is connected: a random spanning backbone links each vertex to
//! an earlier one, then extra edges are sprinkled between random pairs.

use partree_core::Graph;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{error::BenchSetupError, params::GraphBenchParams};

/// Largest integral edge weight produced.
const MAX_WEIGHT: u16 = 10_000;

/// Configuration for [`SyntheticGraph::generate`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Size and density of the graph.
    pub params: GraphBenchParams,
    /// RNG seed; equal seeds give identical graphs.
    pub seed: u64,
}

/// Generator for connected random graphs.
#[derive(Debug)]
pub struct SyntheticGraph;

impl SyntheticGraph {
    /// Generates a connected graph with integral weights in
    /// `1..=10_000`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` is zero and
    /// [`BenchSetupError::Graph`] if the edge list is rejected.
    ///
    /// # Examples
    /// ```
    /// use partree_benches::{
    ///     params::GraphBenchParams,
    ///     source::{SyntheticGraph, SyntheticGraphConfig},
    /// };
    ///
    /// let graph = SyntheticGraph::generate(&SyntheticGraphConfig {
    ///     params: GraphBenchParams { vertex_count: 8, extra_degree: 2 },
    ///     seed: 7,
    /// })?;
    /// assert_eq!(graph.vertex_count(), 8);
    /// # Ok::<(), partree_benches::error::BenchSetupError>(())
    /// ```
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Graph, BenchSetupError> {
        let GraphBenchParams {
            vertex_count,
            extra_degree,
        } = config.params;
        if vertex_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "vertex_count",
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let extra = vertex_count.saturating_mul(extra_degree);
        let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1).saturating_add(extra));

        for vertex in 1..vertex_count {
            let parent = rng.gen_range(0..vertex);
            edges.push((parent, vertex, random_weight(&mut rng)));
        }
        for _ in 0..extra {
            let left = rng.gen_range(0..vertex_count);
            let right = rng.gen_range(0..vertex_count);
            if left != right {
                edges.push((left, right, random_weight(&mut rng)));
            }
        }

        Ok(Graph::from_edges(vertex_count, &edges)?)
    }
}

fn random_weight(rng: &mut SmallRng) -> f32 {
    f32::from(rng.gen_range(1..=MAX_WEIGHT))
}
