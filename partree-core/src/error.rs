//! Error types for the partree core library.
//!
//! Graph construction failures and MST run failures are kept apart so callers
//! can tell malformed input values from algorithm contract violations.

use std::fmt;

use thiserror::Error;

use crate::graph::VertexId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while assembling a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge referenced a vertex that has not been added.
    #[error("edge references vertex {vertex}, but the graph has {vertex_count} vertices")]
    UnknownVertex {
        /// The vertex index supplied by the caller.
        vertex: usize,
        /// Number of vertices registered so far.
        vertex_count: usize,
    },
    /// An edge weight was NaN or infinite.
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// First endpoint, as supplied.
        left: usize,
        /// Second endpoint, as supplied.
        right: usize,
    },
    /// Two vertices were registered under the same name.
    #[error("vertex name `{name}` is already in use")]
    DuplicateVertexName {
        /// The repeated name.
        name: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge referenced a vertex that has not been added.
        UnknownVertex => UnknownVertex { .. } => "GRAPH_UNKNOWN_VERTEX",
        /// An edge weight was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
        /// Two vertices were registered under the same name.
        DuplicateVertexName => DuplicateVertexName { .. } => "GRAPH_DUPLICATE_VERTEX_NAME",
    }
}

/// Errors returned while building a minimum spanning tree.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// `delete_min` was called on an empty heap.
    #[error("cannot delete the minimum of an empty heap")]
    EmptyHeap,
    /// The front of an empty worklist was requested.
    #[error("the partial tree list is empty")]
    EmptyList,
    /// No partial tree in the worklist contains the vertex.
    #[error("no partial tree contains vertex {vertex}")]
    NoSuchTree {
        /// The vertex whose tree was requested.
        vertex: usize,
    },
    /// A partial tree ran out of candidate arcs while other trees remained,
    /// which means the graph is disconnected.
    #[error(
        "partial tree rooted at {root} has no arc leaving it while {remaining_trees} other trees remain; the graph is disconnected"
    )]
    MalformedGraph {
        /// Root of the tree whose frontier was exhausted.
        root: VertexId,
        /// Number of trees still waiting in the worklist.
        remaining_trees: usize,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("partial tree invariant violated: {invariant} (vertex {vertex})")]
    InvariantViolation {
        /// Name of the violated invariant.
        invariant: &'static str,
        /// The vertex at which the violation was detected.
        vertex: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// `delete_min` was called on an empty heap.
        EmptyHeap => EmptyHeap => "MST_EMPTY_HEAP",
        /// The front of an empty worklist was requested.
        EmptyList => EmptyList => "MST_EMPTY_LIST",
        /// No partial tree in the worklist contains the vertex.
        NoSuchTree => NoSuchTree { .. } => "MST_NO_SUCH_TREE",
        /// The input graph is disconnected.
        MalformedGraph => MalformedGraph { .. } => "MST_MALFORMED_GRAPH",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "MST_INVARIANT_VIOLATION",
    }
}

/// Convenient alias for results returned by the MST API.
pub type Result<T> = core::result::Result<T, MstError>;
