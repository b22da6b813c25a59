//! Sentence encoder (BERT sentence-transformer + tokenizer).
//!
//! Loads models such as all-MiniLM-L6-v2 from a directory and produces
//! mean-pooled, L2-normalized vectors. Use [`EncoderConfig::stub`] for
//! tests/examples without model files.

use std::hash::{DefaultHasher, Hash, Hasher};
use std::path::Path;

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config as BertConfig};
use tokenizers::Tokenizer;
use tracing::{debug, info, warn};

use super::EmbeddingService;
use super::config::{EncoderConfig, MODEL_CONFIG_FILE, MODEL_WEIGHTS_FILE};
use super::device::select_device;
use super::error::EmbeddingError;
use super::utils::load_tokenizer;

enum EncoderBackend {
    Model {
        model: BertModel,
        tokenizer: Tokenizer,
        device: Device,
    },
    Stub,
}

/// Embedding service backed by a BERT sentence-transformer (supports stub mode).
pub struct SentenceEncoder {
    backend: EncoderBackend,
    config: EncoderConfig,
}

impl std::fmt::Debug for SentenceEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceEncoder")
            .field(
                "backend",
                &match &self.backend {
                    EncoderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EncoderBackend::Stub => "Stub".to_string(),
                },
            )
            .field("embedding_dim", &self.config.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl SentenceEncoder {
    /// Loads the encoder from a config (stub mode is supported).
    pub fn load(config: EncoderConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("Sentence encoder running in STUB mode (bag-of-words hashing)");
            return Ok(Self {
                backend: EncoderBackend::Stub,
                config,
            });
        }

        let Some(model_dir) = config.model_dir.clone() else {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_dir is required (stubbing is disabled)".to_string(),
            });
        };

        let device = select_device()?;
        debug!(?device, "Selected compute device for sentence encoder");

        let (model, hidden_size) = Self::load_model(&model_dir, &device)?;
        if config.embedding_dim != hidden_size {
            return Err(EmbeddingError::InvalidConfig {
                reason: format!(
                    "embedding_dim ({}) does not match model hidden_size ({})",
                    config.embedding_dim, hidden_size
                ),
            });
        }

        let tokenizer = load_tokenizer(&model_dir, config.max_seq_len).map_err(|e| {
            EmbeddingError::TokenizationFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            }
        })?;

        info!(
            model_dir = %model_dir.display(),
            embedding_dim = config.embedding_dim,
            max_seq_len = config.max_seq_len,
            "Sentence encoder loaded"
        );

        Ok(Self {
            backend: EncoderBackend::Model {
                model,
                tokenizer,
                device,
            },
            config,
        })
    }

    /// Shorthand for `load(EncoderConfig::stub())`.
    pub fn stub() -> Result<Self, EmbeddingError> {
        Self::load(EncoderConfig::stub())
    }

    fn load_model(model_dir: &Path, device: &Device) -> Result<(BertModel, usize), EmbeddingError> {
        let config_content = std::fs::read_to_string(model_dir.join(MODEL_CONFIG_FILE))?;
        let bert_config: BertConfig =
            serde_json::from_str(&config_content).map_err(|e| EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to parse {}: {}", MODEL_CONFIG_FILE, e),
            })?;

        let weights_path = model_dir.join(MODEL_WEIGHTS_FILE);
        // SAFETY: the weights file is memory-mapped read-only and is not modified while loaded.
        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };

        // sentence-transformers exports store the encoder at the root; HF
        // checkpoints nest it under `bert.`.
        let model = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), &bert_config)
        } else {
            BertModel::load(vb, &bert_config)
        }
        .map_err(|e| EmbeddingError::ModelLoadFailed {
            reason: format!("Failed to load BERT weights: {}", e),
        })?;

        Ok((model, bert_config.hidden_size))
    }

    /// Returns the configured output embedding dimension.
    pub fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EncoderBackend::Stub)
    }

    /// Returns the encoder configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    fn encode_one(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match &self.backend {
            EncoderBackend::Model {
                model,
                tokenizer,
                device,
            } => self.encode_with_model(text, model, tokenizer, device),
            EncoderBackend::Stub => Ok(self.encode_stub(text)),
        }
    }

    fn encode_with_model(
        &self,
        text: &str,
        model: &BertModel,
        tokenizer: &Tokenizer,
        device: &Device,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let ids = encoding.get_ids();
        if ids.is_empty() {
            return Ok(vec![0.0; self.config.embedding_dim]);
        }

        debug!(
            text_len = text.len(),
            token_count = ids.len(),
            "Encoding concept"
        );

        let input_ids = Tensor::new(ids, device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), device)?.unsqueeze(0)?;

        // [1, seq_len, hidden]
        let hidden_states = model.forward(&input_ids, &token_type_ids, Some(&attention_mask))?;

        // Mean pooling over tokens; a single unpadded sequence needs no mask weighting.
        let pooled = hidden_states
            .mean(1)?
            .squeeze(0)?
            .to_dtype(DType::F32)?
            .to_vec1::<f32>()?;

        Ok(normalize(pooled))
    }

    /// Hashes lowercase words into buckets so texts sharing vocabulary land close together.
    fn encode_stub(&self, text: &str) -> Vec<f32> {
        let dim = self.config.embedding_dim;
        let mut embedding = vec![0.0f32; dim];

        for word in text.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()) {
            let mut hasher = DefaultHasher::new();
            word.to_lowercase().hash(&mut hasher);
            let hash = hasher.finish();
            let bucket = (hash % dim as u64) as usize;
            let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
            embedding[bucket] += sign;
        }

        normalize(embedding)
    }
}

impl EmbeddingService for SentenceEncoder {
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts.iter().map(|text| self.encode_one(text)).collect()
    }

    fn is_stub(&self) -> bool {
        SentenceEncoder::is_stub(self)
    }
}

fn normalize(mut embedding: Vec<f32>) -> Vec<f32> {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in &mut embedding {
            *x /= norm;
        }
    }
    embedding
}
