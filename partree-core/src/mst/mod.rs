//! Partial-tree minimum spanning tree construction.
//!
//! Every vertex starts as its own partial tree. The driver repeatedly takes
//! the tree at the front of the worklist, pops its cheapest arc that leaves
//! the tree, absorbs the tree on the other end and puts the result at the
//! back. Each tree grows like Prim's algorithm while the worklist rotates
//! through all trees in rounds, much like Borůvka's.

use tracing::{debug, info, instrument, trace};

use crate::{
    arc::Arc,
    builder::HeapConstruction,
    error::MstError,
    graph::{Graph, VertexId},
    partial_tree::PartialTree,
    result::{SpanningForest, total_weight},
    worklist::PartialTreeList,
};

/// Builds one single-vertex tree per vertex, with a heapified frontier.
///
/// # Examples
/// ```
/// use partree_core::{Graph, initialize};
///
/// let graph = Graph::from_edges(3, &[(0, 1, 2.0), (1, 2, 3.0)])?;
/// let list = initialize(&graph);
/// assert_eq!(list.len(), 3);
/// let sizes: Vec<usize> = list.iter().map(|tree| tree.arcs().len()).collect();
/// assert_eq!(sizes, vec![1, 2, 1]);
/// # Ok::<(), partree_core::GraphError>(())
/// ```
#[must_use]
pub fn initialize(graph: &Graph) -> PartialTreeList {
    initialize_with(graph, HeapConstruction::Heapify)
}

/// Builds one single-vertex tree per vertex using the given heap
/// construction.
#[must_use]
pub fn initialize_with(graph: &Graph, construction: HeapConstruction) -> PartialTreeList {
    let mut list = PartialTreeList::new(graph.vertex_count());
    for index in 0..graph.vertex_count() {
        let root = VertexId::new(index);
        let tree = match construction {
            HeapConstruction::Heapify => {
                PartialTree::with_arcs(root, graph.arcs_from(root).collect())
            }
            HeapConstruction::Incremental => {
                let mut tree = PartialTree::new(root);
                for arc in graph.arcs_from(root) {
                    tree.arcs_mut().insert(arc);
                }
                tree
            }
        };
        list.append(tree);
    }
    list
}

/// Runs the algorithm until a single tree remains and returns the selected
/// arcs.
///
/// A connected graph with `n` vertices yields `n - 1` arcs; the order of the
/// arcs carries no meaning. Arcs selected before a failure are discarded.
///
/// # Errors
/// Returns [`MstError::MalformedGraph`] when the graph is disconnected.
/// [`MstError::NoSuchTree`] and [`MstError::InvariantViolation`] indicate a
/// list that was not produced by [`initialize`].
///
/// # Examples
/// ```
/// use partree_core::{Graph, MstError, execute, initialize};
///
/// let graph = Graph::from_edges(3, &[(0, 1, 2.0), (1, 2, 3.0), (0, 2, 5.0)])?;
/// let arcs = execute(initialize(&graph))?;
/// let total: f32 = arcs.iter().map(|arc| arc.weight()).sum();
/// assert_eq!(arcs.len(), 2);
/// assert_eq!(total, 5.0);
///
/// let split = Graph::from_edges(2, &[])?;
/// assert!(matches!(
///     execute(initialize(&split)),
///     Err(MstError::MalformedGraph { .. })
/// ));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(name = "mst.execute", err, skip(list), fields(trees = list.len()))]
pub fn execute(mut list: PartialTreeList) -> Result<Vec<Arc>, MstError> {
    grow_tree(&mut list)
}

/// Runs the algorithm to completion on a possibly disconnected graph.
///
/// Trees whose frontier runs dry are complete components; they are set aside
/// and the run continues with the rest.
///
/// # Errors
/// Returns [`MstError::NoSuchTree`] or [`MstError::InvariantViolation`] for a
/// list that was not produced by [`initialize`].
///
/// # Examples
/// ```
/// use partree_core::{Graph, execute_forest, initialize};
///
/// let graph = Graph::from_edges(4, &[(0, 1, 1.0), (2, 3, 2.0)])?;
/// let forest = execute_forest(initialize(&graph))?;
/// assert_eq!(forest.component_count(), 2);
/// assert_eq!(forest.arcs().len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(name = "mst.execute_forest", err, skip(list), fields(trees = list.len()))]
pub fn execute_forest(mut list: PartialTreeList) -> Result<SpanningForest, MstError> {
    let arcs = grow_forest(&mut list)?;
    let roots = list.iter().map(PartialTree::root).collect();
    Ok(SpanningForest::new(arcs, roots))
}

/// Merges trees until one remains, leaving it in `list`.
pub(crate) fn grow_tree(list: &mut PartialTreeList) -> Result<Vec<Arc>, MstError> {
    let mut selected = Vec::with_capacity(list.len().saturating_sub(1));
    while list.len() > 1 {
        let mut tree = list.remove_front()?;
        let arc = next_cross_arc(list, &mut tree)?.ok_or(MstError::MalformedGraph {
            root: tree.root(),
            remaining_trees: list.len(),
        })?;
        absorb(list, tree, arc)?;
        selected.push(arc);
    }

    info!(
        arcs = selected.len(),
        total_weight = total_weight(&selected),
        "minimum spanning tree complete"
    );
    Ok(selected)
}

/// Merges trees until every component is a single tree, leaving one tree per
/// component in `list`.
pub(crate) fn grow_forest(list: &mut PartialTreeList) -> Result<Vec<Arc>, MstError> {
    let mut selected = Vec::with_capacity(list.len().saturating_sub(1));
    let mut complete = Vec::new();
    while !list.is_empty() {
        let mut tree = list.remove_front()?;
        if list.is_empty() {
            complete.push(tree);
            break;
        }
        match next_cross_arc(list, &mut tree)? {
            Some(arc) => {
                absorb(list, tree, arc)?;
                selected.push(arc);
            }
            None => {
                debug!(
                    root = tree.root().index(),
                    vertices = tree.vertex_count(),
                    "partial tree exhausted; component complete"
                );
                complete.push(tree);
            }
        }
    }

    for tree in complete {
        list.append(tree);
    }
    info!(
        arcs = selected.len(),
        components = list.len(),
        total_weight = total_weight(&selected),
        "minimum spanning forest complete"
    );
    Ok(selected)
}

/// Pops arcs from `tree`'s frontier until one leaves the tree.
///
/// Arcs whose target already belongs to `tree` are discarded for good.
/// Returns `None` once the frontier is exhausted.
fn next_cross_arc(
    list: &mut PartialTreeList,
    tree: &mut PartialTree,
) -> Result<Option<Arc>, MstError> {
    let root = tree.root();
    while !tree.arcs().is_empty() {
        let arc = tree.arcs_mut().delete_min()?;
        let target_root = list
            .find_root(arc.target())
            .ok_or(MstError::NoSuchTree {
                vertex: arc.target().index(),
            })?;
        if target_root != root {
            return Ok(Some(arc));
        }
        trace!(
            root = root.index(),
            source = arc.source().index(),
            target = arc.target().index(),
            weight = arc.weight(),
            "discarding internal arc"
        );
    }
    Ok(None)
}

/// Moves the tree on the far side of `arc` into `tree` and re-queues it.
fn absorb(list: &mut PartialTreeList, mut tree: PartialTree, arc: Arc) -> Result<(), MstError> {
    let other = list.remove_tree_containing(arc.target())?;
    let absorbed = other.root();
    list.merge_trees(&mut tree, other)?;
    debug!(
        root = tree.root().index(),
        absorbed = absorbed.index(),
        arc_weight = arc.weight(),
        remaining_trees = list.len() + 1,
        "merged partial trees"
    );
    list.append(tree);
    Ok(())
}

#[cfg(test)]
mod property;
