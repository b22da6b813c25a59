use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("no {side} concepts to match")]
    EmptyConcepts { side: &'static str },

    #[error(
        "similarity matrix is {rows}x{cols}, expected {expected_rows}x{expected_cols} (key x student)"
    )]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },
}
