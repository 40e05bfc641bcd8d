//! Main GraphConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::ScanGeometry;
use crate::graph::ProximityEdgeBuilder;

use super::error::ConfigLoadError;
use super::proximity::ProximitySection;
use super::scan::ScanSection;

/// Default config file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Full VastuGraph configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct GraphConfig {
    /// Scan geometry settings
    #[serde(default)]
    pub scan: ScanSection,

    /// Proximity edge settings
    #[serde(default)]
    pub proximity: ProximitySection,
}

impl GraphConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        let config = Self::from_yaml(&contents)?;
        log::info!("Loaded graph config from {}", path.display());
        Ok(config)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("{} not found, using built-in defaults", DEFAULT_CONFIG_PATH);
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Serialize(e.to_string()))
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let scan = &self.scan;
        if !(scan.field_of_view_deg.is_finite() && scan.field_of_view_deg > 0.0) {
            return Err(ConfigLoadError::Invalid(format!(
                "scan.field_of_view_deg must be finite and positive, got {}",
                scan.field_of_view_deg
            )));
        }
        if !scan.start_bearing_deg.is_finite() {
            return Err(ConfigLoadError::Invalid(format!(
                "scan.start_bearing_deg must be finite, got {}",
                scan.start_bearing_deg
            )));
        }

        let proximity = &self.proximity;
        if !(proximity.max_edge_distance.is_finite() && proximity.max_edge_distance > 0.0) {
            return Err(ConfigLoadError::Invalid(format!(
                "proximity.max_edge_distance must be finite and positive, got {}",
                proximity.max_edge_distance
            )));
        }
        if proximity.edge_capacity_factor == 0 {
            return Err(ConfigLoadError::Invalid(
                "proximity.edge_capacity_factor must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Convert to ScanGeometry
    pub fn to_scan_geometry(&self) -> ScanGeometry {
        self.scan.to_scan_geometry()
    }

    /// Convert to ProximityEdgeBuilder
    pub fn to_edge_builder(&self) -> ProximityEdgeBuilder {
        self.proximity.to_edge_builder()
    }
}
