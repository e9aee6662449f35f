//! Scoring formula families and per-frame scoring

use crate::feature::{Feature, FeatureScores, FrameScores};
use crate::profile::Gender;
use face_geometry::FaceMetrics;
use tracing::debug;

/// Perfect score
pub const MAX_SCORE: f64 = 100.0;

/// Fallback score for features whose geometry degenerated
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Linear deviation penalty: `max(0, 100 - |deviation| * multiplier)`.
///
/// Exactly 100 at zero deviation, floored at 0 for large deviations.
pub fn linear_deviation(deviation: f64, multiplier: f64) -> f64 {
    (MAX_SCORE - deviation.abs() * multiplier).max(0.0)
}

/// Exponential decay penalty: `100 * exp(-multiplier * |diff|)`.
///
/// Exactly 100 at zero difference, decays toward 0 asymptotically and never
/// reaches it.
pub fn exponential_decay(normalized_diff: f64, multiplier: f64) -> f64 {
    MAX_SCORE * (-multiplier * normalized_diff.abs()).exp()
}

/// Score one frame's measurements against a gender profile.
///
/// Degenerate (`None`) measurements score [`NEUTRAL_SCORE`] and mark the
/// frame low-confidence instead of poisoning the window with NaN.
pub fn score_frame(metrics: &FaceMetrics, gender: Gender) -> FrameScores {
    let profile = gender.profile();
    let mut scores = FeatureScores::default();
    let mut low_confidence = false;

    scores.set(
        Feature::CarnalTilt,
        linear_deviation(
            metrics.tilt_degrees,
            profile.multiplier(Feature::CarnalTilt) * profile.tilt_factor(),
        ),
    );

    // Facial thirds penalizes RELATIVE deviation from the ideal; the other
    // linear features penalize the absolute ratio difference.
    let thirds = match (metrics.thirds_ratio, profile.ideal(Feature::FacialThirds)) {
        (Some(ratio), Some(ideal)) => linear_deviation(
            1.0 - ratio / ideal,
            profile.multiplier(Feature::FacialThirds),
        ),
        _ => {
            low_confidence = true;
            NEUTRAL_SCORE
        }
    };
    scores.set(Feature::FacialThirds, thirds);

    let cheek = match metrics.cheek_offset {
        Some(offset) => {
            exponential_decay(offset, profile.multiplier(Feature::CheekboneSymmetry))
        }
        None => {
            low_confidence = true;
            NEUTRAL_SCORE
        }
    };
    scores.set(Feature::CheekboneSymmetry, cheek);

    for (feature, ratio) in [
        (Feature::InterocularDistance, metrics.interocular_ratio),
        (Feature::Jawline, metrics.jawline_ratio),
        (Feature::Chin, metrics.chin_ratio),
        (Feature::Nose, metrics.nose_ratio),
    ] {
        let score = match (ratio, profile.ideal(feature)) {
            (Some(r), Some(ideal)) => linear_deviation(r - ideal, profile.multiplier(feature)),
            _ => {
                low_confidence = true;
                NEUTRAL_SCORE
            }
        };
        scores.set(feature, score);
    }

    if low_confidence {
        debug!("Frame scored with degenerate geometry fallbacks");
    }

    FrameScores {
        scores,
        metrics: *metrics,
        low_confidence,
    }
}
