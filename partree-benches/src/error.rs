//! Benchmark setup error type.

use partree_core::{GraphError, MstError};

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The generated edge list was rejected by the graph builder.
    #[error("synthetic graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// A warm-up solve failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// A zero value was passed where a positive one was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was zero.
        context: &'static str,
    },
}
