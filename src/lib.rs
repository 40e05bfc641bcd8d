//! # VastuGraph
//!
//! Proximity graphs from a single rotating range-sensor scan.
//!
//! ## Overview
//!
//! A scan is an ordered sequence of distance readings spanning a fixed field
//! of view (270° by default, from -135° to +135°). VastuGraph projects the
//! readings to 2D points and connects them in one of two representations:
//!
//! - **Sparse** ([`GraphStore`]): capacity-bounded edge list. Scan neighbours
//!   closer than a threshold (1.0 by default) are connected, weighted by
//!   their Euclidean distance. Rebuilt from scratch on every scan.
//! - **Dense** ([`AdjacencyGraph`]): mutable symmetric adjacency matrix with
//!   add/remove/neighbour queries, seeded from a scan as an unconditional
//!   ring.
//!
//! ## Quick Start
//!
//! ```rust
//! use vastu_graph::{AdjacencyGraph, GraphStore};
//!
//! let readings = [2.0, 2.0, 2.0];
//!
//! // Sparse path: consecutive points are ~3.7 apart, so no edges
//! let mut store = GraphStore::initialize(readings.len()).unwrap();
//! assert!(store.build_graph(&readings).unwrap().is_empty());
//!
//! // Dense path: ring over all readings
//! let mut graph = AdjacencyGraph::new(readings.len()).unwrap();
//! graph.build_from_scan(&readings).unwrap();
//! assert_eq!(graph.edge_count(), 3);
//! ```
//!
//! ## Coordinate System
//!
//! Uses ROS REP-103 convention:
//! - X: Forward (bearing 0)
//! - Y: Left
//! - Bearing: CCW positive from +X
//!
//! ## Concurrency
//!
//! Everything is synchronous and single-threaded. Stores and graphs are
//! plain owned values; share one across threads only behind external
//! synchronization.

#![warn(missing_docs)]

// Core types
pub mod core;

// Error types
pub mod error;

// Sparse and dense graph representations
pub mod graph;

// YAML configuration
pub mod config;

// Re-export commonly used types
pub use self::core::{AngularSpacing, Node, ScanGeometry, ScanProjector, project_scan};

pub use error::{GraphError, Result};

pub use graph::{AdjacencyGraph, Edge, EdgePolicy, GraphStore, ProximityEdgeBuilder};

pub use config::{ConfigLoadError, GraphConfig};
