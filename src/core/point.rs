//! Cartesian node type produced by scan projection.

use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// Cartesian projection of one range reading (sensor frame, f64).
///
/// Coordinate frame follows ROS REP-103: X forward, Y left.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    /// X coordinate (forward)
    pub x: f64,
    /// Y coordinate (left)
    pub y: f64,
}

impl Node {
    /// Create a new node
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Sensor origin
    pub const ORIGIN: Node = Node { x: 0.0, y: 0.0 };

    /// Create the node at `bearing` (radians) and `range` from the origin
    #[inline]
    pub fn from_polar(bearing: f64, range: f64) -> Self {
        let (sin, cos) = bearing.sin_cos();
        Self::new(range * cos, range * sin)
    }

    /// Euclidean distance to another node
    #[inline]
    pub fn distance(&self, other: &Node) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance (avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &Node) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Distance from the sensor origin
    #[inline]
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Bearing from the sensor origin (radians, CCW from +X)
    #[inline]
    pub fn bearing(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Position as an `(x, y)` tuple
    #[inline]
    pub fn to_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl Sub for Node {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Node::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(f64, f64)> for Node {
    fn from((x, y): (f64, f64)) -> Self {
        Node::new(x, y)
    }
}
