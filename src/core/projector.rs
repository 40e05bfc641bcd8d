//! Polar-to-Cartesian projection of a raw scan.
//!
//! Reading `i` of an `n`-reading scan is placed at
//! `bearing = start + i × increment` and projected to
//! `(range × cos(bearing), range × sin(bearing))`.

use super::point::Node;
use super::scan::{ScanGeometry, validate_readings};
use crate::error::Result;

/// Projects range readings to sensor-frame [`Node`]s.
///
/// Pure: no state beyond the scan geometry.
///
/// # Example
///
/// ```rust
/// use vastu_graph::core::ScanProjector;
///
/// let projector = ScanProjector::default();
/// let nodes = projector.project(&[2.0, 2.0, 2.0]).unwrap();
///
/// // Middle reading points straight ahead
/// assert!((nodes[1].x - 2.0).abs() < 1e-12);
/// assert!(nodes[1].y.abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScanProjector {
    geometry: ScanGeometry,
}

impl ScanProjector {
    /// Create a projector for the given geometry.
    pub fn new(geometry: ScanGeometry) -> Self {
        Self { geometry }
    }

    /// Scan geometry used by this projector.
    #[inline]
    pub fn geometry(&self) -> &ScanGeometry {
        &self.geometry
    }

    /// Project a scan into a freshly allocated node sequence.
    pub fn project(&self, readings: &[f64]) -> Result<Vec<Node>> {
        let mut nodes = Vec::with_capacity(readings.len());
        self.project_into(readings, &mut nodes)?;
        Ok(nodes)
    }

    /// Project a scan into `out`, reusing its allocation.
    ///
    /// `out` is only touched once the readings pass validation.
    pub fn project_into(&self, readings: &[f64], out: &mut Vec<Node>) -> Result<()> {
        validate_readings(readings)?;

        let n = readings.len();
        out.clear();
        out.reserve(n);
        out.extend(
            readings
                .iter()
                .enumerate()
                .map(|(i, &range)| Node::from_polar(self.geometry.bearing(i, n), range)),
        );

        Ok(())
    }
}

/// Project a scan with the default 270° geometry.
pub fn project_scan(readings: &[f64]) -> Result<Vec<Node>> {
    ScanProjector::default().project(readings)
}
