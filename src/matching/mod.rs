//! Concept matching.
//!
//! Pairs every answer-key concept with its most similar student concept and
//! classifies the pair. Similarity comes from an externally computed
//! [`SimilarityMatrix`]; factual precision comes from [`crate::terms`].

mod error;
pub mod gate;
mod types;


pub use error::MatchError;
pub use gate::{FactualGate, OpenGate, ThresholdGate};
pub use types::{Classification, MatchResult};

use tracing::debug;

use crate::embedding::SimilarityMatrix;
use crate::segment::ConceptSequence;
use crate::terms::extract_terms;

/// Matches each key concept (matrix rows) against the student concepts
/// (matrix columns) in key order.
pub fn match_concepts(
    key_concepts: &ConceptSequence,
    student_concepts: &ConceptSequence,
    similarity: &SimilarityMatrix,
    threshold: f64,
) -> Result<Vec<MatchResult>, MatchError> {
    if key_concepts.is_empty() {
        return Err(MatchError::EmptyConcepts { side: "answer key" });
    }
    if student_concepts.is_empty() {
        return Err(MatchError::EmptyConcepts { side: "student" });
    }

    let shape_error = || MatchError::ShapeMismatch {
        rows: similarity.rows(),
        cols: similarity.cols(),
        expected_rows: key_concepts.len(),
        expected_cols: student_concepts.len(),
    };

    if similarity.rows() != key_concepts.len() || similarity.cols() != student_concepts.len() {
        return Err(shape_error());
    }

    key_concepts
        .iter()
        .enumerate()
        .map(|(i, key_concept)| {
            let (best_j, raw_score) = similarity.row_argmax(i).ok_or_else(shape_error)?;
            let student_concept = student_concepts.get(best_j).ok_or_else(shape_error)?;
            Ok(match_pair(key_concept, student_concept, best_j, raw_score, threshold))
        })
        .collect()
}

fn match_pair(
    key_concept: &str,
    student_concept: &str,
    student_index: usize,
    raw_score: f64,
    threshold: f64,
) -> MatchResult {
    // Identical text has similarity 1 by definition; ignore encoder rounding.
    let semantic_score = if key_concept == student_concept {
        1.0
    } else {
        clamp_score(raw_score)
    };

    let key_terms = extract_terms(key_concept);
    let student_terms = extract_terms(student_concept);
    let term_ratio = key_terms.coverage_by(&student_terms);

    let gate = ThresholdGate::select(&key_terms, threshold);
    let is_match = gate.admits(semantic_score, term_ratio);
    let concept_score = gate.concept_score(semantic_score, term_ratio);

    let classification = if key_concept.to_lowercase() == student_concept.to_lowercase() {
        Classification::Perfect
    } else if is_match {
        Classification::Matched
    } else {
        Classification::Missed
    };

    debug!(
        student_index,
        semantic_score,
        term_ratio = ?term_ratio,
        effective_threshold = gate.effective_threshold(),
        concept_score,
        %classification,
        "Matched key concept"
    );

    MatchResult {
        key_concept: key_concept.to_string(),
        matched_student_concept: student_concept.to_string(),
        student_index,
        semantic_score,
        factual_term_ratio: term_ratio,
        concept_score,
        classification,
        key_terms,
        student_terms,
    }
}

/// Maps a raw cosine value into `[0, 1]`; NaN becomes `0`.
fn clamp_score(raw: f64) -> f64 {
    if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) }
}
