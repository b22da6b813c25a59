//! Grading policy: the per-request config and letter-grade assignment.

mod error;
mod scale;


pub use error::GradingConfigError;
pub use scale::{GradeRange, GradeScale};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::constants::DEFAULT_SIMILARITY_THRESHOLD;

/// Label returned when the scale has no ranges at all.
pub const FALLBACK_GRADE: &str = "F";

/// Per-request grading policy.
///
/// Every field is optional in JSON; missing fields take their defaults and
/// unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    pub similarity_threshold: f64,
    pub grade_ranges: GradeScale,
    /// Accepted and echoed back, never consulted by scoring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<Map<String, Value>>,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            grade_ranges: GradeScale::default(),
            weights: None,
        }
    }
}

impl GradingConfig {
    /// Parses a JSON object; does not validate.
    pub fn from_json(json: &str) -> Result<Self, GradingConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_threshold(mut self, similarity_threshold: f64) -> Self {
        self.similarity_threshold = similarity_threshold;
        self
    }

    pub fn with_grade_ranges(mut self, grade_ranges: GradeScale) -> Self {
        self.grade_ranges = grade_ranges;
        self
    }

    /// Checks threshold and scale bounds.
    ///
    /// A scale without a zero floor is allowed; scores below every minimum
    /// then grade as [`FALLBACK_GRADE`].
    pub fn validate(&self) -> Result<(), GradingConfigError> {
        let threshold = self.similarity_threshold;
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(GradingConfigError::InvalidThreshold { value: threshold });
        }

        if self.grade_ranges.is_empty() {
            return Err(GradingConfigError::EmptyScale);
        }

        for range in self.grade_ranges.iter() {
            if range.label.trim().is_empty() {
                return Err(GradingConfigError::EmptyLabel);
            }
            let min = range.min_percentage;
            if !min.is_finite() || !(0.0..=100.0).contains(&min) {
                return Err(GradingConfigError::InvalidMinimum {
                    label: range.label.clone(),
                    value: min,
                });
            }
        }

        if !self.grade_ranges.has_floor() {
            warn!(
                grades = self.grade_ranges.len(),
                "Grade scale has no zero floor; low scores fall back to F"
            );
        }

        Ok(())
    }
}

/// Maps an overall score in `[0, 1]` to a letter grade.
///
/// The score is scaled to a percentage and compared with `>=` against
/// minimums in descending order; the first hit wins. Below every minimum
/// (or with an empty scale) the result is [`FALLBACK_GRADE`].
pub fn calculate_grade(score: f64, scale: &GradeScale) -> String {
    let percentage = score * 100.0;

    scale
        .ranked()
        .into_iter()
        .find(|range| percentage >= range.min_percentage)
        .map_or_else(|| FALLBACK_GRADE.to_string(), |range| range.label.clone())
}
