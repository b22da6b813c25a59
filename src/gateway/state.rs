use std::sync::Arc;

use crate::analysis::Grader;
use crate::embedding::EmbeddingService;

pub struct HandlerState<E: EmbeddingService + 'static> {
    pub grader: Arc<Grader<E>>,

    /// Per-field cap on request text, in bytes.
    pub max_text_bytes: usize,
}

impl<E: EmbeddingService + 'static> Clone for HandlerState<E> {
    fn clone(&self) -> Self {
        Self {
            grader: Arc::clone(&self.grader),
            max_text_bytes: self.max_text_bytes,
        }
    }
}

impl<E: EmbeddingService + 'static> HandlerState<E> {
    pub fn new(grader: Arc<Grader<E>>, max_text_bytes: usize) -> Self {
        Self {
            grader,
            max_text_bytes,
        }
    }
}
