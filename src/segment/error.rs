use thiserror::Error;

/// Reasons [`try_segment`](super::try_segment) can refuse a text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SegmentError {
    /// The text already contains the character used to shield abbreviation periods,
    /// so restoring them would corrupt the text.
    #[error("text contains reserved character U+{codepoint:04X} at byte {offset}")]
    ReservedCharacter { codepoint: u32, offset: usize },
}
