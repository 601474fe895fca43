//! Directed weighted arcs used as heap elements.

use std::cmp::Ordering;

use crate::graph::VertexId;

/// A directed, weighted reference from `source` to `target`.
///
/// Arcs order by weight (via [`f32::total_cmp`]), then by source index, then
/// by target index, which keeps runs reproducible when weights tie.
#[derive(Clone, Copy, Debug)]
pub struct Arc {
    source: VertexId,
    target: VertexId,
    weight: f32,
}

impl Arc {
    /// Creates an arc.
    #[must_use]
    pub const fn new(source: VertexId, target: VertexId, weight: f32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the vertex the arc leaves.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the vertex the arc enters.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexId { self.target }

    /// Returns the arc weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f32 { self.weight }

    /// Returns the endpoints as `(min, max)` so both directions of an
    /// undirected edge compare equal.
    #[must_use]
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

impl PartialEq for Arc {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Arc {}

impl Ord for Arc {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for Arc {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
