//! Partial-tree minimum spanning tree construction.
//!
//! The algorithm keeps a worklist of partial trees, one per vertex at the
//! start. Each step takes the front tree, pops the cheapest arc leaving it
//! from its frontier heap, absorbs the tree on the other side and re-queues
//! the result. Membership is tracked by a disjoint set, so locating the tree
//! that owns a vertex is a root lookup.
//!
//! # Examples
//! ```
//! use partree_core::{GraphBuilder, execute, initialize};
//!
//! let mut builder = GraphBuilder::new();
//! let a = builder.add_vertex("A")?;
//! let b = builder.add_vertex("B")?;
//! let c = builder.add_vertex("C")?;
//! builder.add_edge(a, b, 2.0)?;
//! builder.add_edge(b, c, 3.0)?;
//! builder.add_edge(a, c, 5.0)?;
//! let graph = builder.build();
//!
//! let arcs = execute(initialize(&graph))?;
//! assert_eq!(arcs.len(), 2);
//! assert!(arcs.iter().all(|arc| arc.weight() < 5.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod arc;
mod builder;
mod disjoint_set;
mod error;
mod graph;
mod heap;
mod mst;
mod partial_tree;
mod result;
mod solver;
mod worklist;

pub use crate::{
    arc::Arc,
    builder::{DisconnectedPolicy, HeapConstruction, PartialTreeMstBuilder},
    disjoint_set::DisjointSet,
    error::{GraphError, GraphErrorCode, MstError, MstErrorCode, Result},
    graph::{Graph, GraphBuilder, Neighbor, Vertex, VertexId},
    heap::MinHeap,
    mst::{execute, execute_forest, initialize, initialize_with},
    partial_tree::PartialTree,
    result::SpanningForest,
    solver::PartialTreeMst,
    worklist::PartialTreeList,
};
