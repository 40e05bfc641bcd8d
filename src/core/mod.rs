//! Core types for the VastuGraph library.
//!
//! All positions follow the ROS REP-103 convention:
//! - **X-axis**: Forward (positive ahead of the sensor)
//! - **Y-axis**: Left
//! - **Bearing**: Counter-clockwise from +X
//!
//! ## Types
//!
//! - [`Node`]: Cartesian projection of one range reading
//! - [`ScanGeometry`]: Field of view, start bearing and [`AngularSpacing`]
//! - [`ScanProjector`]: Turns a raw scan into nodes

mod point;
mod projector;
mod scan;

pub use point::Node;
pub use projector::{ScanProjector, project_scan};
pub use scan::{AngularSpacing, MIN_READINGS, ScanGeometry, validate_readings};
