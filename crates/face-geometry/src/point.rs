//! Landmark points and distance helpers

use serde::{Deserialize, Serialize};

/// A single face-mesh landmark in image pixel space.
///
/// `x`/`y` are pixel coordinates; `z` is relative depth as reported by the
/// upstream model (same scale as x, origin at the face centroid).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// Create a point from pixel coordinates and relative depth
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance ignoring depth
    pub fn distance_2d(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Euclidean distance including depth
    pub fn distance_3d(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Angle of the segment (dx, dy) in degrees.
///
/// Plain `atan2` conversion; tilt call sites take the absolute value since
/// tilt is direction-agnostic.
pub fn angle_degrees(dy: f64, dx: f64) -> f64 {
    dy.atan2(dx).to_degrees()
}
