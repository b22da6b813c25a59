use thiserror::Error;

#[derive(Debug, Error)]
pub enum GradingConfigError {
    #[error("similarity_threshold must be within [0, 1], got {value}")]
    InvalidThreshold { value: f64 },

    #[error("grade_ranges must contain at least one grade")]
    EmptyScale,

    #[error("grade label must not be empty")]
    EmptyLabel,

    #[error("minimum for grade '{label}' must be within [0, 100], got {value}")]
    InvalidMinimum { label: String, value: f64 },

    #[error("failed to parse grading config: {0}")]
    Parse(#[from] serde_json::Error),
}
