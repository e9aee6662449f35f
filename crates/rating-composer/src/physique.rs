//! BMI and physique rating

use feature_scoring::Gender;

/// Peak of the physique curve
const PHYSIQUE_SCALE: f64 = 30.0;

/// Multiplier applied when height falls outside the acceptable band
const BAND_PENALTY: f64 = 0.3;

/// Male acceptable-band floor and stature bonus range (inches)
const MALE_BAND_FLOOR_IN: f64 = 66.0;
const MALE_BONUS_CEILING_IN: f64 = 72.0;

/// Female acceptable-band ceiling (inches)
const FEMALE_BAND_CEILING_IN: f64 = 71.0;

/// Gender-specific BMI curve parameters
struct BmiCurve {
    ideal: f64,
    sigma: f64,
}

fn curve(gender: Gender) -> BmiCurve {
    match gender {
        Gender::Male => BmiCurve {
            ideal: 23.5,
            sigma: 2.5,
        },
        Gender::Female => BmiCurve {
            ideal: 20.5,
            sigma: 2.0,
        },
    }
}

/// Imperial BMI: `weight / height^2 * 703`
pub fn bmi(weight_lb: f64, height_in: f64) -> f64 {
    weight_lb / (height_in * height_in) * 703.0
}

/// Physique rating from declared height and weight.
///
/// Gaussian penalty around the gender's ideal BMI scaled to 0-30, cut to
/// 30% outside the gender's height band, plus the male-only linear stature
/// bonus of up to 10 points over 66-72 in.
pub fn physique_rating(gender: Gender, height_in: f64, weight_lb: f64) -> f64 {
    let BmiCurve { ideal, sigma } = curve(gender);
    let deviation = bmi(weight_lb, height_in) - ideal;
    let mut rating = PHYSIQUE_SCALE * (-(deviation * deviation) / (2.0 * sigma * sigma)).exp();

    let outside_band = match gender {
        Gender::Male => height_in < MALE_BAND_FLOOR_IN,
        Gender::Female => height_in > FEMALE_BAND_CEILING_IN,
    };
    if outside_band {
        rating *= BAND_PENALTY;
    }

    if gender == Gender::Male {
        let span = MALE_BONUS_CEILING_IN - MALE_BAND_FLOOR_IN;
        rating += 10.0 * ((height_in - MALE_BAND_FLOOR_IN) / span).clamp(0.0, 1.0);
    }

    rating
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_imperial_formula() {
        // 160 lb at 70 in: 160 / 4900 * 703
        assert!((bmi(160.0, 70.0) - 22.9534693877551).abs() < 1e-9);
    }

    #[test]
    fn test_peak_at_ideal_bmi() {
        // Weight chosen so BMI == 23.5 at 70 in: w = 23.5 * 4900 / 703
        let weight = 23.5 * 70.0 * 70.0 / 703.0;
        let rating = physique_rating(Gender::Male, 70.0, weight);
        // Peak 30 plus the stature bonus at 70 in
        let bonus = 10.0 * (70.0 - 66.0) / 6.0;
        assert!((rating - (30.0 + bonus)).abs() < 1e-9);
    }

    #[test]
    fn test_rating_falls_away_from_ideal() {
        let near = physique_rating(Gender::Female, 65.0, 125.0);
        let far = physique_rating(Gender::Female, 65.0, 190.0);
        assert!(near > far);
    }

    #[test]
    fn test_male_band_penalty_below_floor() {
        let weight = 150.0;
        let short = physique_rating(Gender::Male, 65.0, weight * (65.0f64 / 66.0).powi(2));
        let tall = physique_rating(Gender::Male, 66.0, weight);
        // Same BMI either side of the band floor; the short side is cut to
        // 30% and gets no stature bonus
        assert!(short < tall * 0.35);
    }

    #[test]
    fn test_female_band_penalty_above_ceiling() {
        let weight_at = |h: f64| 20.5 * h * h / 703.0;
        let inside = physique_rating(Gender::Female, 71.0, weight_at(71.0));
        let outside = physique_rating(Gender::Female, 72.0, weight_at(72.0));
        assert!((inside - 30.0).abs() < 1e-9);
        assert!((outside - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_male_stature_bonus_saturates() {
        let weight_at = |h: f64| 23.5 * h * h / 703.0;
        let at_floor = physique_rating(Gender::Male, 66.0, weight_at(66.0));
        let at_ceiling = physique_rating(Gender::Male, 72.0, weight_at(72.0));
        let above = physique_rating(Gender::Male, 78.0, weight_at(78.0));
        assert!((at_floor - 30.0).abs() < 1e-9);
        assert!((at_ceiling - 40.0).abs() < 1e-9);
        assert!((above - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_female_stature_bonus() {
        let weight_at = |h: f64| 20.5 * h * h / 703.0;
        let rating = physique_rating(Gender::Female, 70.0, weight_at(70.0));
        assert!((rating - 30.0).abs() < 1e-9);
    }
}
