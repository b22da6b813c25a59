use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Aggregate outcome of one grading request.
pub struct AnalysisResult {
    /// Mean concept score, in `[0, 1]`.
    pub overall_score: f64,
    /// Rendered feedback lines, in display order.
    pub feedback: Vec<String>,
    /// Key concepts classified perfect or matched, in key order.
    pub matched_concepts: Vec<String>,
    /// Key concepts classified missed, in key order.
    pub missed_concepts: Vec<String>,
}

impl AnalysisResult {
    /// `overall_score` as a percentage rounded to one decimal.
    pub fn overall_percentage(&self) -> f64 {
        one_decimal_percent(self.overall_score)
    }
}

/// Percentage of `score` rounded to one decimal, ties to even.
pub(crate) fn one_decimal_percent(score: f64) -> f64 {
    (score * 1000.0).round_ties_even() / 10.0
}

/// Whole-number percentage of `score`, ties to even.
pub(crate) fn whole_percent(score: f64) -> f64 {
    (score * 100.0).round_ties_even()
}
