//! Error types for VastuGraph

/// Result type alias
pub type Result<T> = std::result::Result<T, GraphError>;

/// VastuGraph error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// Malformed or too-short scan, bad node count, or a query made
    /// before the store holds a built scan
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Node index outside `[0, num_nodes)` on a lookup
    #[error("Node index {index} out of range for graph with {num_nodes} nodes")]
    IndexOutOfRange {
        /// Requested node index
        index: usize,
        /// Number of nodes in the graph
        num_nodes: usize,
    },

    /// Storage could not be sized for the requested node count
    #[error("Allocation failed for {num_nodes} nodes")]
    AllocationFailure {
        /// Requested node count
        num_nodes: usize,
    },

    /// Edge policy produced more edges than the store can hold
    #[error("Edge capacity exceeded: {required} edges required, capacity is {capacity}")]
    CapacityExceeded {
        /// Edges the build would have produced
        required: usize,
        /// Edge capacity fixed at initialization
        capacity: usize,
    },
}

impl GraphError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GraphError::InvalidInput(msg.into())
    }
}
