//! Property 3: worklist consistency between steps.
//!
//! Drives the driver loop by hand and, after every merge or exhausted scan,
//! requires that:
//!
//! - `check_invariants` holds, so every vertex resolves to the root of exactly
//!   one tree in the worklist;
//! - every arc left in a tree's frontier leaves from a vertex of that tree.
//!
//! Exhausted trees are re-queued rather than set aside so the whole vertex
//! set stays in the worklist. The run stops once every frontier is empty and
//! must then agree with the oracle.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    mst::{absorb, initialize, next_cross_arc},
    result::total_weight,
    worklist::PartialTreeList,
};

use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the stepwise worklist property for the given fixture.
pub(super) fn run_stepwise_worklist_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let mut list = initialize(&graph);
    let mut selected = Vec::new();
    check_list(&list, fixture, "initialisation")?;

    while list.iter().any(|tree| !tree.arcs().is_empty()) {
        let mut tree = list.remove_front().map_err(|e| fail(fixture, &e))?;
        let step = match next_cross_arc(&mut list, &mut tree).map_err(|e| fail(fixture, &e))? {
            Some(arc) => {
                absorb(&mut list, tree, arc).map_err(|e| fail(fixture, &e))?;
                selected.push(arc);
                "merge"
            }
            None => {
                list.append(tree);
                "exhausted scan"
            }
        };
        check_list(&list, fixture, step)?;
    }

    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);
    if list.len() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "stepwise run left {} trees, oracle has {} components ({})",
            list.len(),
            oracle.component_count,
            fixture.describe()
        )));
    }
    let weight = total_weight(&selected);
    if weight != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "stepwise weight mismatch: partial trees={weight}, oracle={} ({})",
            oracle.total_weight,
            fixture.describe()
        )));
    }
    Ok(())
}

fn check_list(list: &PartialTreeList, fixture: &MstFixture, step: &str) -> TestCaseResult {
    list.check_invariants().map_err(|e| {
        TestCaseError::fail(format!("after {step}: {e} ({})", fixture.describe()))
    })?;

    for tree in list {
        let root = tree.root();
        for arc in tree.arcs() {
            let owner = list.sets().root_of(arc.source());
            if owner != Some(root) {
                return Err(TestCaseError::fail(format!(
                    "after {step}: frontier of tree {root} holds {arc:?}, whose source resolves to {owner:?} ({})",
                    fixture.describe()
                )));
            }
        }
    }
    Ok(())
}

fn fail(fixture: &MstFixture, error: &crate::MstError) -> TestCaseError {
    TestCaseError::fail(format!("driver step failed: {error} ({})", fixture.describe()))
}
