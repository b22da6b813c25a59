//! Feedback line rendering.

use crate::constants::{PERFECT_CONCEPT_SCORE, RELATED_ATTEMPT_SCORE};
use crate::matching::{Classification, MatchResult};

use super::types::{one_decimal_percent, whole_percent as percent};

/// Builds the ordered feedback lines for one analysis.
pub(crate) struct FeedbackBuilder<'a> {
    matches: &'a [MatchResult],
    overall_score: f64,
    threshold: f64,
    lines: Vec<String>,
}

impl<'a> FeedbackBuilder<'a> {
    pub(crate) fn new(matches: &'a [MatchResult], overall_score: f64, threshold: f64) -> Self {
        Self {
            matches,
            overall_score,
            threshold,
            lines: Vec::with_capacity(matches.len() * 4 + 8),
        }
    }

    pub(crate) fn build(mut self) -> Vec<String> {
        self.overall_line();
        self.lines.push("\n💡 Detailed Analysis:".to_string());
        self.headline();
        for result in self.matches {
            self.concept_block(result);
        }
        self.summary();
        self.lines
    }

    fn overall_line(&mut self) {
        let overall = one_decimal_percent(self.overall_score);
        let required = percent(self.threshold);
        let line = if self.overall_score >= self.threshold {
            format!("✨ Overall Score: {overall:.1}% - Meets the required threshold of {required:.0}%")
        } else {
            format!("📊 Overall Score: {overall:.1}% - Below the required threshold of {required:.0}%")
        };
        self.lines.push(line);
    }

    fn headline(&mut self) {
        let all_perfect = self.matches.iter().all(|m| {
            m.classification.is_addressed() && m.concept_score >= PERFECT_CONCEPT_SCORE
        });
        let none_addressed = self
            .matches
            .iter()
            .all(|m| m.classification == Classification::Missed);

        if all_perfect {
            self.lines
                .push("✨ Perfect Score! All concepts were correctly addressed.".to_string());
        } else if none_addressed {
            self.lines
                .push("❌ No concepts were correctly addressed.".to_string());
        }
    }

    fn concept_block(&mut self, result: &MatchResult) {
        let pct = percent(result.concept_score);
        match result.classification {
            Classification::Perfect => {
                self.lines.push("✅ Perfect Match (100%):".to_string());
                self.expected_found(result);
            }
            Classification::Matched => {
                self.lines.push(format!("✅ Concept Match ({pct:.0}%):"));
                self.expected_found(result);
            }
            Classification::Missed => {
                self.lines.push(format!("❌ Incorrect ({pct:.0}%):"));
                self.lines
                    .push(format!("   Expected: {}", result.key_concept));
                if result.semantic_score > RELATED_ATTEMPT_SCORE {
                    self.related_attempt(result);
                }
            }
        }
    }

    fn expected_found(&mut self, result: &MatchResult) {
        self.lines
            .push(format!("   Expected: {}", result.key_concept));
        self.lines
            .push(format!("   Found: {}", result.matched_student_concept));
    }

    fn related_attempt(&mut self, result: &MatchResult) {
        let missing = result.missing_terms();
        let incorrect = result.incorrect_terms();

        if missing.is_empty() && incorrect.is_empty() {
            self.lines
                .push(format!("   Found: {}", result.matched_student_concept));
            return;
        }

        if !missing.is_empty() {
            self.lines.push(format!("   Missing: {}", missing.joined()));
        }
        if !incorrect.is_empty() {
            self.lines
                .push(format!("   Incorrect: {}", incorrect.joined()));
        }
    }

    fn summary(&mut self) {
        let total = self.matches.len();
        let matched = self
            .matches
            .iter()
            .filter(|m| m.classification.is_addressed())
            .count();

        self.lines.push("\n📝 Summary:".to_string());
        self.lines
            .push(format!("• Matched Concepts: {matched} out of {total}"));

        if matched < total {
            self.lines.push("• Concepts Needing Improvement:".to_string());
            for result in self.matches.iter().filter(|m| !m.classification.is_addressed()) {
                self.lines.push(format!("  - {}", result.key_concept));
            }
        }
    }
}
