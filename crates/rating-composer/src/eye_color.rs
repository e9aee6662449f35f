//! Eye color categories and adjustment lookup

use serde::{Deserialize, Serialize};

/// Canonical eye color categories for the categorical adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EyeColor {
    Blue,
    Green,
    Brown,
    /// Anything not in the named set; a scored category, not an error
    Other,
}

impl EyeColor {
    /// Map a free-form eye color name to its canonical category.
    ///
    /// Unknown names fall into [`EyeColor::Other`], which carries its own
    /// adjustment; unlike gender there is no unrecognized-token failure.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "blue" => EyeColor::Blue,
            "green" => EyeColor::Green,
            "brown" => EyeColor::Brown,
            _ => EyeColor::Other,
        }
    }

    /// Additive rating adjustment for this category
    pub fn adjustment(self) -> f64 {
        match self {
            EyeColor::Blue | EyeColor::Green => 10.0,
            EyeColor::Brown => 0.0,
            EyeColor::Other => -5.0,
        }
    }
}
