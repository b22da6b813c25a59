use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::embedding::{EmbeddingError, SentenceEncoder};
use crate::grading::GradeScale;
use crate::matching::Classification;

/// Returns fixed vectors per text and counts encode calls.
#[derive(Default)]
struct TableEmbedder {
    table: Vec<(&'static str, Vec<f32>)>,
    calls: AtomicUsize,
}

impl TableEmbedder {
    fn with(mut self, text: &'static str, vector: Vec<f32>) -> Self {
        self.table.push((text, vector));
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EmbeddingService for TableEmbedder {
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        texts
            .iter()
            .map(|text| {
                self.table
                    .iter()
                    .find(|(known, _)| known == text)
                    .map(|(_, v)| v.clone())
                    .ok_or_else(|| EmbeddingError::InferenceFailed {
                        reason: format!("no vector for {text:?}"),
                    })
            })
            .collect()
    }
}

struct ShortEmbedder;

impl EmbeddingService for ShortEmbedder {
    fn encode(&self, _texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(Vec::new())
    }
}

fn stub_grader() -> Grader<SentenceEncoder> {
    Grader::new(SentenceEncoder::stub().expect("stub encoder"))
}

#[test]
fn test_identical_answer_is_perfect() {
    let text = "The mitochondria is the powerhouse of the cell.";
    let report = stub_grader()
        .analyze(text, text, &GradingConfig::default())
        .expect("analyze");

    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].classification, Classification::Perfect);
    assert_eq!(report.analysis.overall_score, 1.0);
    assert_eq!(report.grade, "A");
}

#[test]
fn test_whitespace_differences_still_perfect() {
    let report = stub_grader()
        .analyze(
            "The mitochondria is the powerhouse of the cell.",
            "  The mitochondria   is the\npowerhouse of the cell.  ",
            &GradingConfig::default(),
        )
        .expect("analyze");

    assert_eq!(report.matches[0].classification, Classification::Perfect);
    assert_eq!(report.grade, "A");
}

#[test]
fn test_empty_answer_key_fails_before_embedding() {
    let embedder = TableEmbedder::default();
    let grader = Grader::new(embedder);

    let err = grader
        .analyze("", "Some perfectly reasonable answer here.", &GradingConfig::default())
        .unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidInput { .. }));
    assert!(err.is_client_error());
    assert_eq!(grader.embedder().calls(), 0);
}

#[test]
fn test_filtered_submission_fails_before_embedding() {
    let grader = Grader::new(TableEmbedder::default());

    let err = grader
        .analyze("The heart pumps blood through the body.", "ok. yes.", &GradingConfig::default())
        .unwrap_err();
    match err {
        AnalysisError::InvalidInput { reason } => assert!(reason.contains("student")),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(grader.embedder().calls(), 0);
}

#[test]
fn test_invalid_config_rejected() {
    let config = GradingConfig::default().with_threshold(2.0);
    let err = stub_grader()
        .analyze("The heart pumps blood.", "The heart pumps blood.", &config)
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Config(_)));
    assert!(err.is_client_error());
}

#[test]
fn test_embedding_failure_propagates() {
    let grader = Grader::new(TableEmbedder::default());
    let err = grader
        .analyze(
            "The heart pumps blood through the body.",
            "Blood is moved around by the heart.",
            &GradingConfig::default(),
        )
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Embedding(_)));
    assert!(!err.is_client_error());
}

#[test]
fn test_short_encoder_output_is_an_embedding_error() {
    let err = Grader::new(ShortEmbedder)
        .analyze(
            "The heart pumps blood through the body.",
            "Blood is moved around by the heart.",
            &GradingConfig::default(),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::Embedding(EmbeddingError::InferenceFailed { .. })
    ));
}

#[test]
fn test_paraphrase_graded_with_custom_scale() {
    let key = "plants convert sunlight into chemical energy";
    let student = "plants turn light into stored chemical energy";
    let grader = Grader::new(
        TableEmbedder::default()
            .with(key, vec![1.0, 0.0])
            .with(student, vec![0.85, 0.526_78]),
    );

    let config = GradingConfig::default()
        .with_grade_ranges(GradeScale::new([("A", 90.0), ("F", 0.0)]));
    let report = grader.analyze(key, student, &config).expect("analyze");

    assert_eq!(report.matches[0].classification, Classification::Matched);
    assert!((report.analysis.overall_score - 0.85).abs() < 1e-3);
    assert_eq!(report.grade, "F");
    assert_eq!(report.analysis.matched_concepts, vec![key.to_string()]);
    assert_eq!(grader.embedder().calls(), 2);
}

#[test]
fn test_report_serializes() {
    let text = "The mitochondria is the powerhouse of the cell.";
    let report = stub_grader()
        .analyze(text, text, &GradingConfig::default())
        .expect("analyze");

    let json = serde_json::to_value(&report).expect("serialize");
    assert_eq!(json["grade"], "A");
    assert_eq!(json["analysis"]["overall_score"], 1.0);
    assert_eq!(json["matches"][0]["classification"], "perfect");
}
