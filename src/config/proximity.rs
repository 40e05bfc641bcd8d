//! Proximity edge section.

use serde::{Deserialize, Serialize};

use crate::graph::{EdgePolicy, ProximityEdgeBuilder};

use super::defaults;

/// Proximity edge section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProximitySection {
    /// Nodes closer than this are connected (same unit as readings)
    #[serde(default = "defaults::max_edge_distance")]
    pub max_edge_distance: f64,

    /// Edge storage per node
    #[serde(default = "defaults::edge_capacity_factor")]
    pub edge_capacity_factor: usize,

    /// Which node pairs are tested
    #[serde(default = "defaults::policy")]
    pub policy: EdgePolicy,
}

impl Default for ProximitySection {
    fn default() -> Self {
        Self {
            max_edge_distance: defaults::max_edge_distance(),
            edge_capacity_factor: defaults::edge_capacity_factor(),
            policy: defaults::policy(),
        }
    }
}

impl ProximitySection {
    /// Convert to ProximityEdgeBuilder
    pub fn to_edge_builder(&self) -> ProximityEdgeBuilder {
        ProximityEdgeBuilder::new(self.max_edge_distance, self.policy)
    }
}
