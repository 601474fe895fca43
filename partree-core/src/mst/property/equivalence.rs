//! Property 1: agreement with the sequential oracle.
//!
//! Connected inputs must produce `|V| - 1` arcs with the oracle's total
//! weight, and the exact oracle edge set when weights are unique.
//! Disconnected inputs must fail with `MalformedGraph`, while forest mode
//! must match the oracle's forest weight and component count.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{MstError, execute, execute_forest, initialize};

use super::oracle::sequential_kruskal;
use super::types::{MstFixture, WeightDistribution};

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);

    if oracle.component_count > 1 {
        return match execute(initialize(&graph)) {
            Err(MstError::MalformedGraph { .. }) => {
                check_forest(fixture, oracle.total_weight, oracle.component_count)
            }
            other => Err(TestCaseError::fail(format!(
                "disconnected graph must be rejected, got {other:?} ({})",
                fixture.describe()
            ))),
        };
    }

    let arcs = execute(initialize(&graph)).map_err(|e| {
        TestCaseError::fail(format!("execute failed: {e} ({})", fixture.describe()))
    })?;

    if arcs.len() != fixture.vertex_count.saturating_sub(1) {
        return Err(TestCaseError::fail(format!(
            "expected {} arcs, got {} ({})",
            fixture.vertex_count.saturating_sub(1),
            arcs.len(),
            fixture.describe()
        )));
    }

    let weight: f64 = arcs.iter().map(|arc| f64::from(arc.weight())).sum();
    if weight != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: partial trees={weight}, oracle={} ({})",
            oracle.total_weight,
            fixture.describe()
        )));
    }

    if fixture.distribution == WeightDistribution::Unique {
        let mut pairs: Vec<(usize, usize)> = arcs
            .iter()
            .map(|arc| {
                let (left, right) = arc.endpoints();
                (left.index(), right.index())
            })
            .collect();
        pairs.sort_unstable();
        if pairs != oracle.edges {
            return Err(TestCaseError::fail(format!(
                "unique-weight MST differs from the oracle ({})",
                fixture.describe()
            )));
        }
    }

    Ok(())
}

fn check_forest(fixture: &MstFixture, total_weight: f64, component_count: usize) -> TestCaseResult {
    let forest = execute_forest(initialize(&fixture.graph())).map_err(|e| {
        TestCaseError::fail(format!("execute_forest failed: {e} ({})", fixture.describe()))
    })?;

    if forest.component_count() != component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: partial trees={}, oracle={component_count} ({})",
            forest.component_count(),
            fixture.describe()
        )));
    }
    if forest.total_weight() != total_weight {
        return Err(TestCaseError::fail(format!(
            "forest weight mismatch: partial trees={}, oracle={total_weight} ({})",
            forest.total_weight(),
            fixture.describe()
        )));
    }
    Ok(())
}
