//! Grading pipeline.
//!
//! [`Grader`] wires the stages together for one request:
//!
//! 1. validate the [`GradingConfig`]
//! 2. segment answer key and submission into concepts
//! 3. encode both concept lists and build the similarity matrix
//! 4. match, score and explain
//! 5. assign the letter grade
//!
//! Every call is independent; the only shared state is the embedding service.

mod error;

#[cfg(test)]
mod tests;

pub use error::AnalysisError;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::embedding::{EmbeddingError, EmbeddingService};
use crate::grading::{GradingConfig, calculate_grade};
use crate::matching::{MatchResult, match_concepts};
use crate::scoring::{AnalysisResult, score_and_explain};
use crate::segment::{ConceptSequence, segment};

/// Everything produced for one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    pub analysis: AnalysisResult,
    pub grade: String,
    /// Per key concept, in key order.
    pub matches: Vec<MatchResult>,
}

/// Grades submissions with an injected embedding service.
#[derive(Debug)]
pub struct Grader<E> {
    embedder: E,
}

impl<E: EmbeddingService> Grader<E> {
    pub fn new(embedder: E) -> Self {
        Self { embedder }
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    /// Grades `submission` against `answer_key` under `config`.
    ///
    /// Fails with [`AnalysisError::InvalidInput`] before any embedding work
    /// when either text yields no concepts.
    #[instrument(skip_all, fields(key_len = answer_key.len(), submission_len = submission.len()))]
    pub fn analyze(
        &self,
        answer_key: &str,
        submission: &str,
        config: &GradingConfig,
    ) -> Result<GradeReport, AnalysisError> {
        config.validate()?;

        let key_concepts = segment(answer_key);
        if key_concepts.is_empty() {
            return Err(AnalysisError::invalid_input(
                "answer key contains no gradable concepts",
            ));
        }

        let student_concepts = segment(submission);
        if student_concepts.is_empty() {
            return Err(AnalysisError::invalid_input(
                "student submission contains no gradable concepts",
            ));
        }

        debug!(
            key_concepts = key_concepts.len(),
            student_concepts = student_concepts.len(),
            "Segmented texts"
        );

        let key_vectors = self.encode(&key_concepts)?;
        let student_vectors = self.encode(&student_concepts)?;
        let similarity = self
            .embedder
            .cosine_similarity(&key_vectors, &student_vectors)?;

        let matches = match_concepts(
            &key_concepts,
            &student_concepts,
            &similarity,
            config.similarity_threshold,
        )?;
        let analysis = score_and_explain(&matches, config.similarity_threshold)?;
        let grade = calculate_grade(analysis.overall_score, &config.grade_ranges);

        info!(
            overall = analysis.overall_percentage(),
            grade = %grade,
            matched = analysis.matched_concepts.len(),
            missed = analysis.missed_concepts.len(),
            stub_embeddings = self.embedder.is_stub(),
            "Graded submission"
        );

        Ok(GradeReport {
            analysis,
            grade,
            matches,
        })
    }

    fn encode(&self, concepts: &ConceptSequence) -> Result<Vec<Vec<f32>>, AnalysisError> {
        let vectors = self.embedder.encode(&concepts.as_strs())?;
        if vectors.len() != concepts.len() {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!(
                    "expected {} vectors, encoder returned {}",
                    concepts.len(),
                    vectors.len()
                ),
            }
            .into());
        }
        Ok(vectors)
    }
}
