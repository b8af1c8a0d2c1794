use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Inclusive numeric bounds for a measurement field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumberRange {
    pub min: f64,
    pub max: f64,
    /// Whether the value must be a whole number.
    pub integer: bool,
}

impl NumberRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max && (!self.integer || value.fract() == 0.0)
    }
}

/// Normalize a raw numeric input before any range check.
///
/// Surrounding whitespace is ignored. Blank, unparseable and non-finite
/// input all yield `None`: for an optional field that means "not provided",
/// for a required one it is a type error.
pub fn parse_optional_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
