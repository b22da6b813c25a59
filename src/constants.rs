//! Cross-cutting, shared constants.
//!
//! The grading thresholds below are the fixed policy of the matcher and the
//! feedback builder. Only [`DEFAULT_SIMILARITY_THRESHOLD`] is overridable per
//! request (via [`GradingConfig`](crate::grading::GradingConfig)).

/// Default pass/fail cutoff and base acceptance threshold.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.70;

/// Floor applied to the acceptance threshold when a key concept carries factual terms.
pub const FACTUAL_THRESHOLD_FLOOR: f64 = 0.75;

/// Fraction of key-concept factual terms the student concept must reproduce.
pub const REQUIRED_TERM_RATIO: f64 = 0.70;

/// Best-match similarity above which a missed concept is reported as a related attempt.
pub const RELATED_ATTEMPT_SCORE: f64 = 0.50;

/// Per-concept score every concept must reach for the "perfect score" banner.
pub const PERFECT_CONCEPT_SCORE: f64 = 0.95;

/// Minimum concept length in characters (after trimming).
pub const MIN_CONCEPT_CHARS: usize = 10;

/// A concept must have strictly more words than this.
pub const MIN_CONCEPT_WORDS: usize = 3;

/// Output dimension of all-MiniLM-L6-v2.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Max tokens fed to the sentence encoder.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Default upper bound on a single request text, in bytes.
pub const DEFAULT_MAX_TEXT_BYTES: usize = 1024 * 1024;
