//! Default value functions for serde deserialization.

use crate::core::AngularSpacing;
use crate::graph::{DEFAULT_EDGE_CAPACITY_FACTOR, DEFAULT_MAX_EDGE_DISTANCE, EdgePolicy};

pub fn field_of_view_deg() -> f64 {
    270.0
}

pub fn start_bearing_deg() -> f64 {
    -135.0
}

pub fn spacing() -> AngularSpacing {
    AngularSpacing::Endpoints
}

pub fn max_edge_distance() -> f64 {
    DEFAULT_MAX_EDGE_DISTANCE
}

pub fn edge_capacity_factor() -> usize {
    DEFAULT_EDGE_CAPACITY_FACTOR
}

pub fn policy() -> EdgePolicy {
    EdgePolicy::Consecutive
}
