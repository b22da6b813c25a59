//! Per-concept acceptance policy.
//!
//! Concepts carrying factual terms (names, dates, numbers) go through a
//! [`FactualGate`]: a raised semantic floor plus a minimum share of reproduced
//! terms. Purely conceptual statements go through an [`OpenGate`] judged on
//! semantics alone.

use crate::constants::{FACTUAL_THRESHOLD_FLOOR, REQUIRED_TERM_RATIO};
use crate::terms::TermSet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactualGate {
    /// `max(threshold, FACTUAL_THRESHOLD_FLOOR)`.
    pub threshold: f64,
    pub required_term_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenGate {
    pub threshold: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdGate {
    Factual(FactualGate),
    Open(OpenGate),
}

impl ThresholdGate {
    /// Factual gate when `key_terms` is non-empty, open gate otherwise.
    pub fn select(key_terms: &TermSet, threshold: f64) -> Self {
        if key_terms.is_empty() {
            ThresholdGate::Open(OpenGate { threshold })
        } else {
            ThresholdGate::Factual(FactualGate {
                threshold: threshold.max(FACTUAL_THRESHOLD_FLOOR),
                required_term_ratio: REQUIRED_TERM_RATIO,
            })
        }
    }

    /// Semantic score a match must reach.
    pub fn effective_threshold(&self) -> f64 {
        match self {
            ThresholdGate::Factual(gate) => gate.threshold,
            ThresholdGate::Open(gate) => gate.threshold,
        }
    }

    /// Term share a match must reach (`0.0` for the open gate).
    pub fn required_term_ratio(&self) -> f64 {
        match self {
            ThresholdGate::Factual(gate) => gate.required_term_ratio,
            ThresholdGate::Open(_) => 0.0,
        }
    }

    /// Whether a pair with this semantic score and term ratio counts as a match.
    ///
    /// A missing ratio means no factual constraint and counts as `1.0`.
    pub fn admits(&self, semantic_score: f64, term_ratio: Option<f64>) -> bool {
        match self {
            ThresholdGate::Factual(gate) => {
                semantic_score >= gate.threshold
                    && term_ratio.unwrap_or(1.0) >= gate.required_term_ratio
            }
            ThresholdGate::Open(gate) => semantic_score >= gate.threshold,
        }
    }

    /// Score credited to the concept: the weaker of semantics and term
    /// coverage under the factual gate, semantics alone otherwise.
    pub fn concept_score(&self, semantic_score: f64, term_ratio: Option<f64>) -> f64 {
        match self {
            ThresholdGate::Factual(_) => semantic_score.min(term_ratio.unwrap_or(1.0)),
            ThresholdGate::Open(_) => semantic_score,
        }
    }
}
