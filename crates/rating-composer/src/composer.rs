//! Final rating composition

use crate::eye_color::EyeColor;
use crate::form::RatingInputs;
use crate::physique::physique_rating;
use feature_scoring::Gender;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Display floor of the clamped rating range
pub const RATING_FLOOR: f64 = 15.69;

/// Display ceiling of the clamped rating range
pub const RATING_CEILING: f64 = 99.0;

/// Logistic squash steepness
const SQUASH_RATE: f64 = 0.1;

/// Raw score mapped to exactly 50 by the squash
const SQUASH_MIDPOINT: f64 = 50.0;

/// Physique contribution to the raw score
const PHYSIQUE_WEIGHT: f64 = 0.5;

/// Height above which the flat bonus can apply (inches)
const BONUS_HEIGHT_IN: f64 = 72.0;

/// Face contribution to the raw score
fn face_weight(gender: Gender) -> f64 {
    match gender {
        Gender::Male => 0.70,
        Gender::Female => 0.65,
    }
}

/// Flat bonus for the tall blue/green-eyed male combination
fn flat_bonus(gender: Gender, height_in: f64, eye_color: EyeColor) -> f64 {
    let bonus_eyes = matches!(eye_color, EyeColor::Blue | EyeColor::Green);
    if gender == Gender::Male && height_in > BONUS_HEIGHT_IN && bonus_eyes {
        5.0
    } else {
        0.0
    }
}

/// `100 / (1 + exp(-0.1 * (raw - 50)))`
fn logistic_squash(raw_score: f64) -> f64 {
    100.0 / (1.0 + (-SQUASH_RATE * (raw_score - SQUASH_MIDPOINT)).exp())
}

/// Composed rating with its sub-scores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallRating {
    /// Final clamped rating in [15.69, 99]
    pub overall: f64,
    /// Gender-weighted average of the seven feature scores
    pub face_rating: f64,
    /// BMI/height physique rating
    pub physique_rating: f64,
    /// Categorical eye-color adjustment
    pub eye_color_adjustment: f64,
    /// Flat combination bonus
    pub bonus: f64,
    /// Pre-squash additive score
    pub raw_score: f64,
}

/// Compose the overall rating from validated inputs.
///
/// The weighted terms are intentionally additive and unnormalized; the
/// logistic squash and the asymmetric clamp shape the display range.
pub fn compose(inputs: &RatingInputs) -> OverallRating {
    let profile = inputs.gender.profile();
    let face_rating = profile.weighted_average(&inputs.features);
    let physique = physique_rating(inputs.gender, inputs.height_in, inputs.weight_lb);
    let eye_color_adjustment = inputs.eye_color.adjustment();
    let bonus = flat_bonus(inputs.gender, inputs.height_in, inputs.eye_color);

    let raw_score = face_weight(inputs.gender) * face_rating
        + PHYSIQUE_WEIGHT * physique
        + eye_color_adjustment
        + bonus;

    let overall = logistic_squash(raw_score).clamp(RATING_FLOOR, RATING_CEILING);

    info!(
        face_rating,
        physique_rating = physique,
        raw_score,
        overall,
        "Composed overall rating"
    );

    OverallRating {
        overall,
        face_rating,
        physique_rating: physique,
        eye_color_adjustment,
        bonus,
        raw_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::RatingForm;
    use feature_scoring::FeatureScores;
    use proptest::prelude::*;

    #[test]
    fn test_squash_fixed_point_at_midpoint() {
        assert!((logistic_squash(50.0) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_top_end_scenario_clamps_at_ceiling() {
        // Male, perfect features, 70in / 160lb, blue eyes
        let inputs = RatingForm::new()
            .gender(Gender::Male)
            .height_in(70.0)
            .weight_lb(160.0)
            .eye_color(EyeColor::Blue)
            .features(FeatureScores::filled(100.0))
            .finish()
            .unwrap();
        let rating = compose(&inputs);
        assert_eq!(rating.overall, RATING_CEILING);
        assert!(rating.raw_score > 90.0);
    }

    #[test]
    fn test_bottom_end_scenario_clamps_at_floor() {
        // Female, zeroed features, 65in / 130lb, brown eyes
        let inputs = RatingForm::new()
            .gender(Gender::Female)
            .height_in(65.0)
            .weight_lb(130.0)
            .eye_color(EyeColor::Brown)
            .features(FeatureScores::filled(0.0))
            .finish()
            .unwrap();
        let rating = compose(&inputs);
        assert_eq!(rating.overall, RATING_FLOOR);
        assert!(rating.face_rating.abs() < 1e-9);
    }

    #[test]
    fn test_flat_bonus_requires_all_three_conditions() {
        assert_eq!(flat_bonus(Gender::Male, 73.0, EyeColor::Green), 5.0);
        assert_eq!(flat_bonus(Gender::Male, 73.0, EyeColor::Blue), 5.0);
        assert_eq!(flat_bonus(Gender::Male, 72.0, EyeColor::Blue), 0.0);
        assert_eq!(flat_bonus(Gender::Male, 73.0, EyeColor::Brown), 0.0);
        assert_eq!(flat_bonus(Gender::Female, 73.0, EyeColor::Blue), 0.0);
    }

    #[test]
    fn test_eye_color_shifts_raw_score() {
        let base = RatingForm::new()
            .gender(Gender::Female)
            .height_in(65.0)
            .weight_lb(130.0)
            .features(FeatureScores::filled(70.0));
        let blue = compose(&base.clone().eye_color(EyeColor::Blue).finish().unwrap());
        let brown = compose(&base.clone().eye_color(EyeColor::Brown).finish().unwrap());
        let other = compose(&base.eye_color(EyeColor::Other).finish().unwrap());
        assert!((blue.raw_score - brown.raw_score - 10.0).abs() < 1e-9);
        assert!((brown.raw_score - other.raw_score - 5.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_squash_monotone(a in -100.0f64..200.0, delta in 1e-6f64..50.0) {
            prop_assert!(logistic_squash(a + delta) > logistic_squash(a));
        }

        #[test]
        fn prop_overall_always_in_display_range(
            scores in proptest::array::uniform7(0.0f64..100.0),
            height in 48.0f64..84.0,
            weight in 90.0f64..350.0,
        ) {
            let mut features = FeatureScores::default();
            for (i, feature) in feature_scoring::Feature::ALL.iter().enumerate() {
                features.set(*feature, scores[i]);
            }
            for gender in [Gender::Male, Gender::Female] {
                let inputs = RatingForm::new()
                    .gender(gender)
                    .height_in(height)
                    .weight_lb(weight)
                    .eye_color(EyeColor::Other)
                    .features(features)
                    .finish()
                    .unwrap();
                let rating = compose(&inputs);
                prop_assert!(rating.overall >= RATING_FLOOR);
                prop_assert!(rating.overall <= RATING_CEILING);
            }
        }
    }
}
