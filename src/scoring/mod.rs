//! Aggregate scoring and feedback.
//!
//! Averages per-concept scores with equal weight and renders the feedback
//! report shown to students. Letter grades live in [`crate::grading`].

mod error;
mod feedback;
mod types;


pub use error::ScoringError;
pub use types::AnalysisResult;

use tracing::debug;

use crate::matching::MatchResult;

use feedback::FeedbackBuilder;

/// Scores a full set of concept matches and renders feedback.
///
/// `threshold` is the pass/fail cutoff quoted in the overall line.
pub fn score_and_explain(
    matches: &[MatchResult],
    threshold: f64,
) -> Result<AnalysisResult, ScoringError> {
    if matches.is_empty() {
        return Err(ScoringError::NoMatches);
    }

    if let Some((index, result)) = matches
        .iter()
        .enumerate()
        .find(|(_, m)| !(0.0..=1.0).contains(&m.concept_score))
    {
        return Err(ScoringError::ScoreOutOfRange {
            index,
            score: result.concept_score,
        });
    }

    let overall_score =
        matches.iter().map(|m| m.concept_score).sum::<f64>() / matches.len() as f64;

    let (addressed, missed): (Vec<&MatchResult>, Vec<&MatchResult>) = matches
        .iter()
        .partition(|m| m.classification.is_addressed());

    let feedback = FeedbackBuilder::new(matches, overall_score, threshold).build();

    debug!(
        overall_score,
        matched = addressed.len(),
        missed = missed.len(),
        feedback_lines = feedback.len(),
        "Scored concept matches"
    );

    Ok(AnalysisResult {
        overall_score,
        feedback,
        matched_concepts: addressed.iter().map(|m| m.key_concept.clone()).collect(),
        missed_concepts: missed.iter().map(|m| m.key_concept.clone()).collect(),
    })
}
