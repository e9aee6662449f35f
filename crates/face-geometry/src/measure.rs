//! Per-frame ratio measurement
//!
//! Derives the seven geometric inputs to the feature scorers from one
//! detection's landmarks and bounding box. Every ratio denominator goes
//! through [`safe_ratio`]; a collapsed denominator yields `None` instead of
//! NaN/Infinity and is scored downstream as a low-confidence neutral.

use crate::landmarks::{mesh, FaceDetection};
use crate::point::angle_degrees;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Denominators at or below this magnitude count as degenerate geometry
pub const RATIO_EPSILON: f64 = 1e-6;

/// Guarded division: `None` when the denominator has collapsed
pub fn safe_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator.abs() <= RATIO_EPSILON {
        None
    } else {
        Some(numerator / denominator)
    }
}

/// Raw geometric measurements for one frame.
///
/// Ratios are `None` when their denominator degenerated (near-zero bounding
/// box or collapsed midline span). The tilt angle is always available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceMetrics {
    /// Absolute eye-line tilt in degrees (0 = level)
    pub tilt_degrees: f64,
    /// Upper-to-lower facial thirds ratio
    pub thirds_ratio: Option<f64>,
    /// Cheekbone vertical offset over face height
    pub cheek_offset: Option<f64>,
    /// Eye-center distance over face width
    pub interocular_ratio: Option<f64>,
    /// Jaw corner x-span over face width
    pub jawline_ratio: Option<f64>,
    /// Mouth-to-chin over nose-to-chin vertical span
    pub chin_ratio: Option<f64>,
    /// Nose wing x-span over face width
    pub nose_ratio: Option<f64>,
}

impl FaceMetrics {
    /// Whether any measurement fell back to `None` on degenerate geometry
    pub fn is_degenerate(&self) -> bool {
        self.thirds_ratio.is_none()
            || self.cheek_offset.is_none()
            || self.interocular_ratio.is_none()
            || self.jawline_ratio.is_none()
            || self.chin_ratio.is_none()
            || self.nose_ratio.is_none()
    }
}

/// Measure one detection.
///
/// Callers pass the FIRST detection of a frame; additional faces in the same
/// frame are ignored by the pipeline (single-subject assumption).
pub fn measure(detection: &FaceDetection) -> FaceMetrics {
    let lm = &detection.landmarks;
    let face_width = detection.bbox.width();
    let face_height = detection.bbox.height();

    let left_eye = lm.centroid(&mesh::LEFT_EYE);
    let right_eye = lm.centroid(&mesh::RIGHT_EYE);

    // Tilt is direction-agnostic: a head leaning left scores like one
    // leaning right.
    let tilt_degrees = angle_degrees(right_eye.y - left_eye.y, right_eye.x - left_eye.x).abs();

    let forehead = lm.point(mesh::FOREHEAD);
    let nose_base = lm.point(mesh::NOSE_BASE);
    let chin = lm.point(mesh::CHIN);
    let thirds_ratio = safe_ratio(nose_base.y - forehead.y, chin.y - nose_base.y);

    let left_cheek = lm.point(mesh::LEFT_CHEEK);
    let right_cheek = lm.point(mesh::RIGHT_CHEEK);
    let cheek_offset = safe_ratio((left_cheek.y - right_cheek.y).abs(), face_height);

    let interocular_ratio = safe_ratio(left_eye.distance_2d(&right_eye), face_width);

    let left_jaw = lm.point(mesh::LEFT_JAW);
    let right_jaw = lm.point(mesh::RIGHT_JAW);
    let jawline_ratio = safe_ratio((right_jaw.x - left_jaw.x).abs(), face_width);

    let mouth = lm.point(mesh::MOUTH_BOTTOM);
    let nose_tip = lm.point(mesh::NOSE_TIP);
    let chin_ratio = safe_ratio(chin.y - mouth.y, chin.y - nose_tip.y);

    let nose_left = lm.point(mesh::NOSE_LEFT);
    let nose_right = lm.point(mesh::NOSE_RIGHT);
    let nose_ratio = safe_ratio((nose_right.x - nose_left.x).abs(), face_width);

    let metrics = FaceMetrics {
        tilt_degrees,
        thirds_ratio,
        cheek_offset,
        interocular_ratio,
        jawline_ratio,
        chin_ratio,
        nose_ratio,
    };

    if metrics.is_degenerate() {
        warn!(
            face_width,
            face_height, "Degenerate face geometry, some ratios unavailable"
        );
    }

    metrics
}
