use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::grading::GradingConfigError;
use crate::matching::MatchError;
use crate::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("invalid grading config: {0}")]
    Config(#[from] GradingConfigError),

    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("concept matching failed: {0}")]
    Matching(#[from] MatchError),

    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),
}

impl AnalysisError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        AnalysisError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// `true` for errors caused by the request rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::InvalidInput { .. } | AnalysisError::Config(_)
        )
    }
}
