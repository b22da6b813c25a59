use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::analysis::GradeReport;
use crate::embedding::EmbeddingService;
use crate::gateway::error::GatewayError;
use crate::gateway::state::HandlerState;
use crate::grading::GradingConfig;

/// Name reported when the request does not carry one.
pub const DEFAULT_STUDENT_NAME: &str = "submission";

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub answer_key: String,
    pub student_submission: String,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub config: Option<GradingConfig>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HighlightedMatches {
    pub matched_concepts: Vec<String>,
    pub missed_concepts: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SubmissionResult {
    pub student_name: String,
    pub similarity_score: f64,
    pub grade: String,
    pub feedback: Vec<String>,
    pub highlighted_matches: HighlightedMatches,
}

impl SubmissionResult {
    pub fn from_report(student_name: String, report: GradeReport) -> Self {
        let analysis = report.analysis;
        Self {
            student_name,
            similarity_score: analysis.overall_score,
            grade: report.grade,
            feedback: analysis.feedback,
            highlighted_matches: HighlightedMatches {
                matched_concepts: analysis.matched_concepts,
                missed_concepts: analysis.missed_concepts,
            },
        }
    }
}

#[instrument(skip(state, request), fields(student = tracing::field::Empty))]
pub async fn analyze_handler<E>(
    State(state): State<HandlerState<E>>,
    request: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<SubmissionResult>, GatewayError>
where
    E: EmbeddingService + 'static,
{
    let Json(request) = request.map_err(|rejection| {
        GatewayError::InvalidRequest(format!("Invalid request body: {}", rejection.body_text()))
    })?;
    let AnalyzeRequest {
        answer_key,
        student_submission,
        student_name,
        config,
    } = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))?;

    check_length("answer_key", &answer_key, state.max_text_bytes)?;
    check_length("student_submission", &student_submission, state.max_text_bytes)?;

    let student_name = student_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_STUDENT_NAME.to_string());
    tracing::Span::current().record("student", tracing::field::display(&student_name));

    let config = config.unwrap_or_default();
    debug!(
        threshold = config.similarity_threshold,
        grades = config.grade_ranges.len(),
        "Analyzing submission"
    );

    let grader = state.grader.clone();
    let report = tokio::task::spawn_blocking(move || {
        grader.analyze(&answer_key, &student_submission, &config)
    })
    .await
    .map_err(|e| GatewayError::InternalError(format!("grading task failed: {}", e)))??;

    Ok(Json(SubmissionResult::from_report(student_name, report)))
}

fn check_length(field: &str, text: &str, limit: usize) -> Result<(), GatewayError> {
    if text.len() > limit {
        return Err(GatewayError::InvalidRequest(format!(
            "{} is {} bytes, limit is {}",
            field,
            text.len(),
            limit
        )));
    }
    Ok(())
}
