//! Overall Rating Composer
//!
//! Combines the windowed face scores with physique and categorical inputs
//! into the final rating:
//! - gender-weighted face rating
//! - BMI-based physique rating with height band penalty and stature bonus
//! - eye-color adjustment and flat bonus
//! - logistic squash clamped to the display range
//!
//! The composer refuses to run on incomplete input; a missing field surfaces
//! as an error rather than a misleadingly specific number.

mod composer;
mod eye_color;
mod form;
mod physique;

pub use composer::{compose, OverallRating, RATING_CEILING, RATING_FLOOR};
pub use eye_color::EyeColor;
pub use form::{RatingForm, RatingInputs};
pub use physique::{bmi, physique_rating};

use thiserror::Error;

/// Composition error types
#[derive(Debug, Clone, Error)]
pub enum ComposeError {
    /// A required input field was never provided
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    /// An input value is outside its sanity range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
