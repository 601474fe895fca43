//! Property 2: structural invariants of the output.
//!
//! For the forest produced in [`DisconnectedPolicy::Forest`] mode:
//!
//! - every selected arc is an edge of the input graph with the same weight;
//! - the arcs are acyclic;
//! - there are exactly `V - C` arcs for `C` components;
//! - every vertex resolves to exactly one surviving tree (checked by the
//!   solver's invariant checks).

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Arc, DisconnectedPolicy, Graph, PartialTreeMstBuilder};

use super::oracle::find_root;
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let solver = PartialTreeMstBuilder::new()
        .with_disconnected_policy(DisconnectedPolicy::Forest)
        .with_invariant_checks(true)
        .build();
    let forest = solver.solve(&graph).map_err(|e| {
        TestCaseError::fail(format!("solve failed: {e} ({})", fixture.describe()))
    })?;

    for arc in forest.arcs() {
        validate_arc_exists(&graph, arc, fixture)?;
    }
    validate_acyclic(fixture, forest.arcs())?;

    let expected = fixture
        .vertex_count
        .saturating_sub(forest.component_count());
    if forest.arcs().len() != expected {
        return Err(TestCaseError::fail(format!(
            "expected V - C = {expected} arcs, got {} ({})",
            forest.arcs().len(),
            fixture.describe()
        )));
    }
    Ok(())
}

fn validate_arc_exists(graph: &Graph, arc: &Arc, fixture: &MstFixture) -> TestCaseResult {
    let found = graph
        .arcs_from(arc.source())
        .any(|candidate| candidate == *arc);
    if found {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!(
            "arc {arc:?} is not an edge of the input graph ({})",
            fixture.describe()
        )))
    }
}

fn validate_acyclic(fixture: &MstFixture, arcs: &[Arc]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    for arc in arcs {
        let left = find_root(&mut parent, arc.source().index());
        let right = find_root(&mut parent, arc.target().index());
        if left == right {
            return Err(TestCaseError::fail(format!(
                "arc {arc:?} closes a cycle ({})",
                fixture.describe()
            )));
        }
        parent[right] = left;
    }
    Ok(())
}
