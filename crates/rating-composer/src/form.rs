//! Composer input collection and validation

use crate::eye_color::EyeColor;
use crate::ComposeError;
use feature_scoring::{FeatureScores, Gender};
use serde::{Deserialize, Serialize};

/// Height sanity range (inches)
const HEIGHT_RANGE_IN: (f64, f64) = (36.0, 96.0);

/// Weight sanity range (pounds)
const WEIGHT_RANGE_LB: (f64, f64) = (50.0, 700.0);

/// Builder over the composer inputs.
///
/// Fields arrive from different collaborators (the scan window, the profile
/// form) at different times; `finish` refuses to produce [`RatingInputs`]
/// until every one of them is present and sane. There is no partial or
/// default substitution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingForm {
    gender: Option<Gender>,
    height_in: Option<f64>,
    weight_lb: Option<f64>,
    eye_color: Option<EyeColor>,
    features: Option<FeatureScores>,
}

impl RatingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn height_in(mut self, height_in: f64) -> Self {
        self.height_in = Some(height_in);
        self
    }

    pub fn weight_lb(mut self, weight_lb: f64) -> Self {
        self.weight_lb = Some(weight_lb);
        self
    }

    pub fn eye_color(mut self, eye_color: EyeColor) -> Self {
        self.eye_color = Some(eye_color);
        self
    }

    /// The seven windowed feature scores, as one unit
    pub fn features(mut self, features: FeatureScores) -> Self {
        self.features = Some(features);
        self
    }

    /// Validate presence and ranges
    pub fn finish(self) -> Result<RatingInputs, ComposeError> {
        let gender = self.gender.ok_or(ComposeError::MissingInput("gender"))?;
        let height_in = self.height_in.ok_or(ComposeError::MissingInput("height"))?;
        let weight_lb = self.weight_lb.ok_or(ComposeError::MissingInput("weight"))?;
        let eye_color = self
            .eye_color
            .ok_or(ComposeError::MissingInput("eye_color"))?;
        let features = self
            .features
            .ok_or(ComposeError::MissingInput("feature_scores"))?;

        check_range("height", height_in, HEIGHT_RANGE_IN)?;
        check_range("weight", weight_lb, WEIGHT_RANGE_LB)?;

        Ok(RatingInputs {
            gender,
            height_in,
            weight_lb,
            eye_color,
            features,
        })
    }
}

fn check_range(field: &'static str, value: f64, range: (f64, f64)) -> Result<(), ComposeError> {
    if value < range.0 || value > range.1 {
        Err(ComposeError::OutOfRange {
            field,
            value,
            min: range.0,
            max: range.1,
        })
    } else {
        Ok(())
    }
}

/// Fully validated composer inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingInputs {
    pub gender: Gender,
    pub height_in: f64,
    pub weight_lb: f64,
    pub eye_color: EyeColor,
    pub features: FeatureScores,
}
