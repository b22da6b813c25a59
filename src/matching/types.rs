use serde::Serialize;

use crate::terms::TermSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// How a key concept fared against its best student match.
pub enum Classification {
    /// Key and student text are equal ignoring case.
    Perfect,
    /// Passed the semantic threshold and the factual-term gate.
    Matched,
    /// Everything else.
    Missed,
}

impl Classification {
    /// `true` for `Perfect` and `Matched`.
    pub fn is_addressed(&self) -> bool {
        !matches!(self, Classification::Missed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Perfect => "perfect",
            Classification::Matched => "matched",
            Classification::Missed => "missed",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Outcome for one answer-key concept.
pub struct MatchResult {
    pub key_concept: String,
    /// Best-scoring student concept (lowest index on ties).
    pub matched_student_concept: String,
    pub student_index: usize,
    /// Similarity of the pair, clamped to `[0, 1]`.
    pub semantic_score: f64,
    /// Share of key terms the student concept reproduces; `None` when the key has none.
    pub factual_term_ratio: Option<f64>,
    pub concept_score: f64,
    pub classification: Classification,
    pub key_terms: TermSet,
    pub student_terms: TermSet,
}

impl MatchResult {
    /// Key terms the student concept lacks.
    pub fn missing_terms(&self) -> TermSet {
        self.key_terms.difference(&self.student_terms)
    }

    /// Student terms that do not appear in the key concept.
    pub fn incorrect_terms(&self) -> TermSet {
        self.student_terms.difference(&self.key_terms)
    }
}
