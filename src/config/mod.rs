//! Configuration loading for VastuGraph.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vastu_graph::config::GraphConfig;
//!
//! // Load from default path (configs/config.yaml)
//! let config = GraphConfig::load_default()?;
//!
//! // Or use built-in defaults (no file needed)
//! let config = GraphConfig::default();
//!
//! let store = GraphStore::with_config(1081, &config)?;
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`ScanSection`] | Field of view, start bearing, angular spacing |
//! | [`ProximitySection`] | Edge threshold, capacity factor, edge policy |
//!
//! ## Example YAML
//!
//! ```yaml
//! scan:
//!   field_of_view_deg: 270.0
//!   start_bearing_deg: -135.0
//!   spacing: endpoints       # or per_sample
//!
//! proximity:
//!   max_edge_distance: 1.0
//!   edge_capacity_factor: 5
//!   policy: consecutive      # or all_pairs
//! ```

mod defaults;
mod error;
mod graph;
mod proximity;
mod scan;

// Re-export main types
pub use error::ConfigLoadError;
pub use graph::{DEFAULT_CONFIG_PATH, GraphConfig};

// Re-export section types
pub use proximity::ProximitySection;
pub use scan::ScanSection;
