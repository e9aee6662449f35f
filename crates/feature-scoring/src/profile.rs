//! Gender configuration tables
//!
//! Two static parameter sets selected by declared gender. Weights,
//! sensitivity multipliers, and ideal ratios differ materially between the
//! two tables; the asymmetry is part of the scoring contract.

use crate::feature::{Feature, FeatureScores};
use crate::ProfileError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Declared gender code selecting a scoring profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// The static scoring profile for this gender
    pub fn profile(self) -> &'static GenderProfile {
        match self {
            Gender::Male => &MALE,
            Gender::Female => &FEMALE,
        }
    }
}

impl FromStr for Gender {
    type Err = ProfileError;

    /// Normalize the free-form gender tokens seen at the input boundary.
    ///
    /// Unrecognized tokens are a loud error; there is no silent default.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "m" | "male" | "man" => Ok(Gender::Male),
            "f" | "w" | "female" | "woman" => Ok(Gender::Female),
            _ => Err(ProfileError::UnrecognizedGender(input.to_string())),
        }
    }
}

/// Immutable per-gender scoring parameters.
///
/// Arrays are indexed in [`Feature::ALL`] order. Features without an ideal
/// ratio (tilt and cheekbone symmetry target zero deviation) carry `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderProfile {
    weights: [f64; Feature::COUNT],
    multipliers: [f64; Feature::COUNT],
    ideals: [Option<f64>; Feature::COUNT],
    tilt_factor: f64,
}

/// Male table: jawline, cheekbone, and chin carry the weight
pub static MALE: GenderProfile = GenderProfile {
    //         tilt thirds cheek inter  jaw  chin  nose
    weights: [0.8, 1.0, 1.5, 1.0, 2.0, 1.5, 1.0],
    multipliers: [2.0, 120.0, 30.0, 400.0, 220.0, 160.0, 320.0],
    ideals: [
        None,
        Some(1.0),
        None,
        Some(0.46),
        Some(0.82),
        Some(0.50),
        Some(0.28),
    ],
    tilt_factor: 1.5,
};

/// Female table: near-uniform weights, tighter sensitivity on tilt and nose
pub static FEMALE: GenderProfile = GenderProfile {
    //         tilt thirds cheek inter  jaw  chin  nose
    weights: [1.0, 1.0, 1.1, 1.0, 0.9, 1.0, 1.0],
    multipliers: [2.5, 140.0, 35.0, 450.0, 180.0, 140.0, 350.0],
    ideals: [
        None,
        Some(0.95),
        None,
        Some(0.47),
        Some(0.78),
        Some(0.45),
        Some(0.25),
    ],
    tilt_factor: 1.2,
};

impl GenderProfile {
    /// Relative contribution of a feature to the face rating
    pub fn weight(&self, feature: Feature) -> f64 {
        self.weights[feature.index()]
    }

    /// Deviation sensitivity of a feature's penalty curve
    pub fn multiplier(&self, feature: Feature) -> f64 {
        self.multipliers[feature.index()]
    }

    /// Ideal ratio target, if the feature has one
    pub fn ideal(&self, feature: Feature) -> Option<f64> {
        self.ideals[feature.index()]
    }

    /// Extra multiplier applied only to the tilt penalty
    pub fn tilt_factor(&self) -> f64 {
        self.tilt_factor
    }

    /// Sum of all feature weights
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Weighted average of the seven feature scores.
    ///
    /// `sum(w_i * s_i) / sum(w_i)` - an average, not a sum, so the composite
    /// stays inside the range spanned by its inputs.
    pub fn weighted_average(&self, scores: &FeatureScores) -> f64 {
        let weighted: f64 = scores.iter().map(|(f, s)| self.weight(f) * s).sum();
        weighted / self.total_weight()
    }
}
