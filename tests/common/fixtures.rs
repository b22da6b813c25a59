//! Test fixtures for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use grader::embedding::{EmbeddingError, EmbeddingService};

pub const FIXTURE_DIM: usize = 16;

/// Axis reserved for the off-axis component of [`ScriptedEmbedder::near`].
const RESIDUAL_AXIS: usize = FIXTURE_DIM - 1;

/// Embedding service with hand-placed vectors.
///
/// Each text is pinned to a unit vector so that cosine similarities between
/// fixture texts are known exactly. Unknown texts fail to encode.
#[derive(Default)]
pub struct ScriptedEmbedder {
    vectors: Vec<(String, Vec<f32>)>,
    calls: AtomicUsize,
}

impl ScriptedEmbedder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `text` on basis vector `axis`.
    pub fn anchor(mut self, text: &str, axis: usize) -> Self {
        assert!(axis < RESIDUAL_AXIS, "axis {axis} is reserved");
        let mut v = vec![0.0; FIXTURE_DIM];
        v[axis] = 1.0;
        self.vectors.push((text.to_string(), v));
        self
    }

    /// Places `text` at cosine `similarity` from the anchor on `axis`.
    pub fn near(mut self, text: &str, axis: usize, similarity: f32) -> Self {
        assert!(axis < RESIDUAL_AXIS, "axis {axis} is reserved");
        let mut v = vec![0.0; FIXTURE_DIM];
        v[axis] = similarity;
        v[RESIDUAL_AXIS] = (1.0 - similarity * similarity).max(0.0).sqrt();
        self.vectors.push((text.to_string(), v));
        self
    }

    /// Number of `encode` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EmbeddingService for ScriptedEmbedder {
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        texts
            .iter()
            .map(|text| {
                self.vectors
                    .iter()
                    .find(|(known, _)| known == text)
                    .map(|(_, v)| v.clone())
                    .ok_or_else(|| EmbeddingError::InferenceFailed {
                        reason: format!("no scripted vector for {text:?}"),
                    })
            })
            .collect()
    }
}

pub const MITOCHONDRIA: &str = "The mitochondria is the powerhouse of the cell.";
pub const TREATY_KEY: &str = "The Treaty of Versailles was signed in 1919.";
pub const TREATY_STUDENT: &str = "The Treaty of Versailles was signed in 1920.";

pub const PHOTOSYNTHESIS_KEY: &str = "\
- Plants convert sunlight into chemical energy
- Chlorophyll absorbs mostly red and blue light
- Oxygen is released as a by-product";

pub const PHOTOSYNTHESIS_STUDENT: &str = "\
1. Plants turn light into stored chemical energy
2. Oxygen is given off by the leaves";
