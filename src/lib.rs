//! Concept-level grading library (used by the server and integration tests).
//!
//! # Pipeline
//!
//! A submission is graded against an answer key in five stages:
//!
//! - [`segment`] splits each text into concept statements
//! - [`embedding`] encodes concepts and builds a cosine [`SimilarityMatrix`]
//! - [`matching`] pairs every key concept with its best student concept and
//!   applies the factual / open acceptance gate (terms from [`terms`])
//! - [`scoring`] averages concept scores and renders feedback
//! - [`grading`] maps the overall score to a letter grade
//!
//! [`Grader`] runs the whole pipeline for one request; [`gateway`] exposes it
//! over HTTP.
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`GradingConfig`], [`GradeScale`] - Per-request grading policy
//! - [`EmbeddingService`], [`SentenceEncoder`] - Embedding seam and the BERT implementation
//! - [`MatchResult`], [`AnalysisResult`], [`GradeReport`] - Pipeline outputs

pub mod analysis;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod gateway;
pub mod grading;
pub mod matching;
pub mod scoring;
pub mod segment;
pub mod terms;

pub use analysis::{AnalysisError, GradeReport, Grader};
pub use config::{Config, ConfigError};
pub use embedding::{
    EmbeddingError, EmbeddingService, EncoderConfig, SentenceEncoder, SimilarityMatrix,
    cosine_matrix, cosine_similarity,
};
pub use grading::{GradeRange, GradeScale, GradingConfig, GradingConfigError, calculate_grade};
pub use matching::{Classification, MatchError, MatchResult, ThresholdGate, match_concepts};
pub use scoring::{AnalysisResult, ScoringError, score_and_explain};
pub use segment::{ConceptSequence, SegmentError, segment, try_segment};
pub use terms::{TermSet, extract_terms};
