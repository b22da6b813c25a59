use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("no concept matches to score")]
    NoMatches,

    #[error("concept score {score} for key concept {index} is outside [0, 1]")]
    ScoreOutOfRange { index: usize, score: f64 },
}
