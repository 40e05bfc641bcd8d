//! Proximity graph representations.
//!
//! Two independent representations are built from the same scan:
//!
//! | Type | Storage | Edges from a scan |
//! |------|---------|-------------------|
//! | [`GraphStore`] | sparse edge list, capacity `n × factor` | `(i, i+1)` when closer than the threshold |
//! | [`AdjacencyGraph`] | dense symmetric `n × n` matrix | every `(i, i+1)` plus the ring closure `(n-1, 0)` |
//!
//! [`AdjacencyGraph::from_edges`] bridges the sparse list into the dense form.

mod adjacency;
mod edge;
mod store;

pub use adjacency::AdjacencyGraph;
pub use edge::{DEFAULT_MAX_EDGE_DISTANCE, Edge, EdgePolicy, ProximityEdgeBuilder};
pub use store::{DEFAULT_EDGE_CAPACITY_FACTOR, GraphStore};
