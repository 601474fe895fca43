//! Property-based tests for the partial-tree MST.
//!
//! Checks the driver against a sequential Kruskal oracle, verifies the
//! structural invariants of its output (acyclicity, edge count, component
//! count) and re-checks worklist consistency after every individual merge,
//! across graph shapes with varied weight distributions.

mod equivalence;
mod stepwise;
mod strategies;
mod structural;
mod types;
