use std::io;
use std::path::Path;

use tokenizers::{Tokenizer, TruncationParams};

use super::config::TOKENIZER_FILE;

/// Loads `tokenizer.json` from a model directory with truncation at `max_len`
/// tokens and padding disabled (concepts are encoded one at a time).
pub fn load_tokenizer(model_dir: &Path, max_len: usize) -> io::Result<Tokenizer> {
    let mut tokenizer =
        Tokenizer::from_file(model_dir.join(TOKENIZER_FILE)).map_err(io::Error::other)?;

    let truncation = TruncationParams {
        max_length: max_len,
        ..Default::default()
    };

    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| io::Error::other(format!("Failed to configure truncation: {}", e)))?;
    tokenizer.with_padding(None);

    Ok(tokenizer)
}
