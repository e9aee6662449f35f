//! Per-Feature Scorers
//!
//! Maps the raw geometric measurements of one frame to 0-100 attribute
//! scores, parameterized by the gender configuration tables:
//! - Linear deviation penalty for tilt, thirds, interocular, jawline, chin, nose
//! - Exponential decay penalty for cheekbone symmetry
//! - Weighted-average composition of the seven scores into a face rating

mod feature;
mod profile;
mod scorer;

pub use face_geometry::FaceMetrics;
pub use feature::{Feature, FeatureScores, FrameScores};
pub use profile::{Gender, GenderProfile};
pub use scorer::{
    exponential_decay, linear_deviation, score_frame, MAX_SCORE, NEUTRAL_SCORE,
};

use thiserror::Error;

/// Scoring configuration error types
#[derive(Debug, Clone, Error)]
pub enum ProfileError {
    /// Gender token not in the accepted set
    #[error("Unrecognized gender token: {0:?}")]
    UnrecognizedGender(String),
}
