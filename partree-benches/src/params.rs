//! Benchmark parameter labels.

use std::fmt;

/// Parameters for a single graph-size benchmark point.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Extra random edges per vertex on top of the spanning backbone.
    pub extra_degree: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertex_count, self.extra_degree)
    }
}
