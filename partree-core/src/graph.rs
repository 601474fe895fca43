//! Undirected weighted graph model consumed by the partial-tree MST.
//!
//! A [`Graph`] is assembled once through [`GraphBuilder`] and is read-only
//! afterwards. Union-find bookkeeping lives in
//! [`crate::PartialTreeList`], not on the vertices.

use std::{collections::HashMap, fmt};

use tracing::trace;

use crate::{arc::Arc, error::GraphError};

/// Index of a vertex inside its [`Graph`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(usize);

impl VertexId {
    /// Wraps a raw vertex index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw vertex index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(self) -> usize { self.0 }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A weighted adjacency link from a vertex to one of its neighbours.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    vertex: VertexId,
    weight: f32,
}

impl Neighbor {
    /// Returns the neighbouring vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex(&self) -> VertexId { self.vertex }

    /// Returns the weight of the edge to the neighbour.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f32 { self.weight }
}

/// A named vertex and its adjacency list.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    name: String,
    neighbors: Vec<Neighbor>,
}

impl Vertex {
    /// Returns the vertex name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the adjacency list in insertion order.
    #[must_use]
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }
}

/// An immutable, undirected, weighted graph.
///
/// Every undirected edge `{a, b}` is stored as one [`Neighbor`] on each
/// endpoint, so [`Graph::arcs_from`] yields it in both directions.
///
/// # Examples
/// ```
/// use partree_core::{Graph, VertexId};
///
/// let graph = Graph::from_edges(3, &[(0, 1, 2.0), (1, 2, 3.0)])?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.arcs_from(VertexId::new(1)).count(), 2);
/// # Ok::<(), partree_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    names: HashMap<String, VertexId>,
    edge_count: usize,
}

impl Graph {
    /// Builds an anonymous graph whose vertices are named after their index.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when an edge endpoint is
    /// `>= vertex_count` and [`GraphError::NonFiniteWeight`] for NaN or
    /// infinite weights.
    pub fn from_edges(
        vertex_count: usize,
        edges: &[(usize, usize, f32)],
    ) -> Result<Self, GraphError> {
        let mut builder = GraphBuilder::with_capacity(vertex_count);
        for index in 0..vertex_count {
            builder.add_vertex(index.to_string())?;
        }
        for &(left, right, weight) in edges {
            builder.add_edge(VertexId::new(left), VertexId::new(right), weight)?;
        }
        Ok(builder.build())
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of undirected edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns every vertex, indexed by [`VertexId::index`].
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the vertex with the given id, if present.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// Looks a vertex up by name.
    #[must_use]
    pub fn find_vertex(&self, name: &str) -> Option<VertexId> {
        self.names.get(name).copied()
    }

    /// Returns the outgoing arcs of `id`, one per adjacency entry.
    ///
    /// Unknown ids yield an empty iterator.
    pub fn arcs_from(&self, id: VertexId) -> impl Iterator<Item = Arc> + '_ {
        self.vertex(id)
            .map(Vertex::neighbors)
            .unwrap_or_default()
            .iter()
            .map(move |neighbor| Arc::new(id, neighbor.vertex, neighbor.weight))
    }
}

/// Incrementally assembles a [`Graph`].
///
/// # Examples
/// ```
/// use partree_core::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// let a = builder.add_vertex("A")?;
/// let b = builder.add_vertex("B")?;
/// builder.add_edge(a, b, 2.0)?;
/// let graph = builder.build();
/// assert_eq!(graph.find_vertex("B"), Some(b));
/// # Ok::<(), partree_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with room for `vertex_count` vertices.
    #[must_use]
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            graph: Graph {
                vertices: Vec::with_capacity(vertex_count),
                names: HashMap::with_capacity(vertex_count),
                edge_count: 0,
            },
        }
    }

    /// Registers a vertex and returns its id.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertexName`] if `name` is taken.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> Result<VertexId, GraphError> {
        let name = name.into();
        if self.graph.names.contains_key(&name) {
            return Err(GraphError::DuplicateVertexName { name });
        }
        let id = VertexId::new(self.graph.vertices.len());
        self.graph.names.insert(name.clone(), id);
        self.graph.vertices.push(Vertex {
            name,
            neighbors: Vec::new(),
        });
        Ok(id)
    }

    /// Adds the undirected edge `{left, right}`.
    ///
    /// Self-loops are accepted and dropped: they can only ever produce arcs
    /// internal to a partial tree.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] for unregistered endpoints and
    /// [`GraphError::NonFiniteWeight`] for NaN or infinite weights.
    pub fn add_edge(
        &mut self,
        left: VertexId,
        right: VertexId,
        weight: f32,
    ) -> Result<(), GraphError> {
        let vertex_count = self.graph.vertices.len();
        for endpoint in [left, right] {
            if endpoint.index() >= vertex_count {
                return Err(GraphError::UnknownVertex {
                    vertex: endpoint.index(),
                    vertex_count,
                });
            }
        }
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight {
                left: left.index(),
                right: right.index(),
            });
        }
        if left == right {
            trace!(vertex = left.index(), "dropping self-loop");
            return Ok(());
        }

        self.graph.vertices[left.index()].neighbors.push(Neighbor {
            vertex: right,
            weight,
        });
        self.graph.vertices[right.index()].neighbors.push(Neighbor {
            vertex: left,
            weight,
        });
        self.graph.edge_count += 1;
        Ok(())
    }

    /// Finishes construction.
    #[must_use]
    pub fn build(self) -> Graph {
        self.graph
    }
}
