//! Scan geometry and reading validation.
//!
//! A scan is an ordered sequence of range readings swept across a fixed
//! field of view. Reading `0` sits at the start bearing and readings advance
//! counter-clockwise by a constant increment.
//!
//! ```text
//!              0° (+X, forward)
//!                    ↑
//!         +135° ╲    │    ╱ -135°
//!   (last reading) ╲ │ ╱  (first reading)
//!                    ●
//!              blind sector (90°)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// Minimum number of readings in a scan.
pub const MIN_READINGS: usize = 2;

/// How the field of view is divided among `n` readings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngularSpacing {
    /// `increment = fov / (n - 1)`: first and last readings sit exactly on
    /// the field-of-view edges.
    #[default]
    Endpoints,
    /// `increment = fov / n`: the last reading stops one increment short of
    /// the far edge.
    PerSample,
}

/// Angular layout of a scan.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanGeometry {
    /// Total sweep in degrees
    pub field_of_view_deg: f64,
    /// Bearing of reading 0 in degrees (CCW positive)
    pub start_bearing_deg: f64,
    /// Division of the sweep among readings
    pub spacing: AngularSpacing,
}

impl Default for ScanGeometry {
    fn default() -> Self {
        Self {
            field_of_view_deg: 270.0,
            start_bearing_deg: -135.0,
            spacing: AngularSpacing::Endpoints,
        }
    }
}

impl ScanGeometry {
    /// Create a geometry with the given sweep, start bearing and spacing.
    pub fn new(field_of_view_deg: f64, start_bearing_deg: f64, spacing: AngularSpacing) -> Self {
        Self {
            field_of_view_deg,
            start_bearing_deg,
            spacing,
        }
    }

    /// Set the angular spacing.
    pub fn with_spacing(mut self, spacing: AngularSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Angular increment between consecutive readings (degrees).
    ///
    /// `n` is clamped to the minimum scan length.
    #[inline]
    pub fn increment_deg(&self, n: usize) -> f64 {
        let n = n.max(MIN_READINGS);
        match self.spacing {
            AngularSpacing::Endpoints => self.field_of_view_deg / (n - 1) as f64,
            AngularSpacing::PerSample => self.field_of_view_deg / n as f64,
        }
    }

    /// Bearing of reading `index` in a scan of `n` readings (degrees).
    #[inline]
    pub fn bearing_deg(&self, index: usize, n: usize) -> f64 {
        self.start_bearing_deg + index as f64 * self.increment_deg(n)
    }

    /// Bearing of reading `index` in a scan of `n` readings (radians).
    #[inline]
    pub fn bearing(&self, index: usize, n: usize) -> f64 {
        self.bearing_deg(index, n).to_radians()
    }

    /// Bearing of the first reading (degrees).
    #[inline]
    pub fn first_bearing_deg(&self) -> f64 {
        self.start_bearing_deg
    }

    /// Bearing of the last reading of an `n`-reading scan (degrees).
    #[inline]
    pub fn last_bearing_deg(&self, n: usize) -> f64 {
        self.bearing_deg(n.max(MIN_READINGS) - 1, n)
    }

    /// Reject sweeps that would project readings to non-finite points.
    pub fn validate(&self) -> Result<()> {
        if !(self.field_of_view_deg.is_finite() && self.field_of_view_deg > 0.0) {
            return Err(GraphError::invalid(format!(
                "field of view must be finite and positive, got {}",
                self.field_of_view_deg
            )));
        }
        if !self.start_bearing_deg.is_finite() {
            return Err(GraphError::invalid(format!(
                "start bearing must be finite, got {}",
                self.start_bearing_deg
            )));
        }
        Ok(())
    }
}

/// Validate a raw scan: at least [`MIN_READINGS`] readings, each finite and
/// non-negative.
pub fn validate_readings(readings: &[f64]) -> Result<()> {
    if readings.len() < MIN_READINGS {
        return Err(GraphError::invalid(format!(
            "scan needs at least {} readings, got {}",
            MIN_READINGS,
            readings.len()
        )));
    }

    if let Some((index, value)) = readings
        .iter()
        .enumerate()
        .find(|&(_, r)| !r.is_finite() || *r < 0.0)
    {
        return Err(GraphError::invalid(format!(
            "reading {} is not a finite non-negative distance: {}",
            index, value
        )));
    }

    Ok(())
}
