//! Builder utilities for configuring [`PartialTreeMst`] runs.
//!
//! Exposes the heap construction and disconnected-graph policies together
//! with the builder that assembles a solver from them.

use crate::solver::PartialTreeMst;

/// How each singleton tree's frontier heap is seeded during initialisation.
///
/// `Heapify` builds the heap bottom-up in linear time from the vertex's full
/// neighbour list. `Incremental` inserts the arcs one at a time and exists so
/// the two approaches can be benchmarked against each other.
///
/// # Examples
/// ```
/// use partree_core::HeapConstruction;
///
/// assert_eq!(HeapConstruction::default(), HeapConstruction::Heapify);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeapConstruction {
    /// Bulk-build each heap with a bottom-up heapify.
    #[default]
    Heapify,
    /// Insert arcs one by one.
    Incremental,
}

/// What a run does when the graph turns out to be disconnected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisconnectedPolicy {
    /// Fail with [`crate::MstError::MalformedGraph`].
    #[default]
    Fail,
    /// Return a minimum spanning forest with one tree per component.
    Forest,
}

/// Configures and constructs [`PartialTreeMst`] solvers.
///
/// # Examples
/// ```
/// use partree_core::{DisconnectedPolicy, HeapConstruction, PartialTreeMstBuilder};
///
/// let solver = PartialTreeMstBuilder::new()
///     .with_heap_construction(HeapConstruction::Incremental)
///     .with_disconnected_policy(DisconnectedPolicy::Forest)
///     .with_invariant_checks(true)
///     .build();
/// assert_eq!(solver.heap_construction(), HeapConstruction::Incremental);
/// assert_eq!(solver.disconnected_policy(), DisconnectedPolicy::Forest);
/// assert!(solver.invariant_checks());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PartialTreeMstBuilder {
    heap_construction: HeapConstruction,
    disconnected_policy: DisconnectedPolicy,
    invariant_checks: bool,
}

impl PartialTreeMstBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use partree_core::{DisconnectedPolicy, HeapConstruction, PartialTreeMstBuilder};
    ///
    /// let builder = PartialTreeMstBuilder::new();
    /// assert_eq!(builder.heap_construction(), HeapConstruction::Heapify);
    /// assert_eq!(builder.disconnected_policy(), DisconnectedPolicy::Fail);
    /// assert!(!builder.invariant_checks());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides how frontier heaps are seeded.
    #[must_use]
    pub fn with_heap_construction(mut self, construction: HeapConstruction) -> Self {
        self.heap_construction = construction;
        self
    }

    /// Returns the configured heap construction.
    #[must_use]
    pub fn heap_construction(&self) -> HeapConstruction {
        self.heap_construction
    }

    /// Overrides the behaviour on disconnected graphs.
    #[must_use]
    pub fn with_disconnected_policy(mut self, policy: DisconnectedPolicy) -> Self {
        self.disconnected_policy = policy;
        self
    }

    /// Returns the configured disconnected-graph policy.
    #[must_use]
    pub fn disconnected_policy(&self) -> DisconnectedPolicy {
        self.disconnected_policy
    }

    /// Enables worklist invariant checks before and after each run.
    ///
    /// # Examples
    /// ```
    /// use partree_core::PartialTreeMstBuilder;
    ///
    /// let builder = PartialTreeMstBuilder::new().with_invariant_checks(true);
    /// assert!(builder.invariant_checks());
    /// ```
    #[must_use]
    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.invariant_checks = enabled;
        self
    }

    /// Returns whether invariant checks are enabled.
    #[must_use]
    pub fn invariant_checks(&self) -> bool {
        self.invariant_checks
    }

    /// Constructs the configured solver.
    #[must_use]
    pub fn build(self) -> PartialTreeMst {
        PartialTreeMst::new(
            self.heap_construction,
            self.disconnected_policy,
            self.invariant_checks,
        )
    }
}
