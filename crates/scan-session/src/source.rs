//! The external landmark model boundary

use crate::ScanError;
use face_geometry::FaceDetection;

/// Per-frame detections from the external face-mesh model.
///
/// The model is a black box to the pipeline: each poll yields zero or more
/// detections, each carrying the full 468-point landmark set and a bounding
/// box. Zero detections means no face; when multiple faces are returned only
/// the first is scored (single-subject assumption).
#[allow(async_fn_in_trait)]
pub trait LandmarkSource {
    /// Detections for the next frame
    async fn next_detections(&mut self) -> Result<Vec<FaceDetection>, ScanError>;
}
