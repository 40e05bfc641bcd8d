//! Scan geometry section.

use serde::{Deserialize, Serialize};

use crate::core::{AngularSpacing, ScanGeometry};

use super::defaults;

/// Scan geometry section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScanSection {
    /// Total sweep of one scan (degrees)
    #[serde(default = "defaults::field_of_view_deg")]
    pub field_of_view_deg: f64,

    /// Bearing of the first reading (degrees, CCW positive)
    #[serde(default = "defaults::start_bearing_deg")]
    pub start_bearing_deg: f64,

    /// How the sweep is divided among readings
    #[serde(default = "defaults::spacing")]
    pub spacing: AngularSpacing,
}

impl Default for ScanSection {
    fn default() -> Self {
        Self {
            field_of_view_deg: defaults::field_of_view_deg(),
            start_bearing_deg: defaults::start_bearing_deg(),
            spacing: defaults::spacing(),
        }
    }
}

impl ScanSection {
    /// Convert to ScanGeometry
    pub fn to_scan_geometry(&self) -> ScanGeometry {
        ScanGeometry::new(self.field_of_view_deg, self.start_bearing_deg, self.spacing)
    }
}
