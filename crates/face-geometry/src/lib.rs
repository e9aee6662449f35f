//! Landmark Geometry Utilities
//!
//! Pure geometry over the face-mesh landmark model:
//! - 3D landmark points and bounding boxes
//! - Eye centers, distances, and angles
//! - Per-frame ratio measurement feeding the feature scorers

pub mod landmarks;
pub mod measure;
pub mod point;

pub use landmarks::{mesh, BoundingBox, FaceDetection, LandmarkSet, MESH_POINTS};
pub use measure::{measure, safe_ratio, FaceMetrics, RATIO_EPSILON};
pub use point::{angle_degrees, Point3};

use thiserror::Error;

/// Geometry error types
#[derive(Debug, Clone, Error)]
pub enum GeometryError {
    /// Landmark sequence length does not match the mesh contract
    #[error("Expected {expected} landmark points, got {actual}")]
    WrongPointCount { expected: usize, actual: usize },
}
