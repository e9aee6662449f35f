//! Scored facial attributes and per-frame score containers

use face_geometry::FaceMetrics;
use serde::{Deserialize, Serialize};

/// The seven scored facial attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    CarnalTilt,
    FacialThirds,
    CheekboneSymmetry,
    InterocularDistance,
    Jawline,
    Chin,
    Nose,
}

impl Feature {
    /// Number of scored attributes
    pub const COUNT: usize = 7;

    /// All attributes in canonical order
    pub const ALL: [Feature; Feature::COUNT] = [
        Feature::CarnalTilt,
        Feature::FacialThirds,
        Feature::CheekboneSymmetry,
        Feature::InterocularDistance,
        Feature::Jawline,
        Feature::Chin,
        Feature::Nose,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Feature::CarnalTilt => "carnal_tilt",
            Feature::FacialThirds => "facial_thirds",
            Feature::CheekboneSymmetry => "cheekbone_symmetry",
            Feature::InterocularDistance => "interocular_distance",
            Feature::Jawline => "jawline",
            Feature::Chin => "chin",
            Feature::Nose => "nose",
        }
    }

    /// Slot in the fixed score array
    pub(crate) fn index(self) -> usize {
        match self {
            Feature::CarnalTilt => 0,
            Feature::FacialThirds => 1,
            Feature::CheekboneSymmetry => 2,
            Feature::InterocularDistance => 3,
            Feature::Jawline => 4,
            Feature::Chin => 5,
            Feature::Nose => 6,
        }
    }
}

/// Fixed per-feature score map, one slot per attribute
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureScores([f64; Feature::COUNT]);

impl FeatureScores {
    /// All slots set to the same value
    pub fn filled(value: f64) -> Self {
        Self([value; Feature::COUNT])
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }

    pub fn set(&mut self, feature: Feature, value: f64) {
        self.0[feature.index()] = value;
    }

    /// Iterate attributes with their scores in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.iter().map(move |&f| (f, self.get(f)))
    }
}

/// One frame's full set of per-feature scores, with the raw measurements
/// they were derived from.
///
/// `low_confidence` marks frames where degenerate geometry forced one or
/// more features to the neutral score. Samples live only inside a collection
/// window; the reduction keeps the scores and drops the measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameScores {
    pub scores: FeatureScores,
    pub metrics: FaceMetrics,
    pub low_confidence: bool,
}
