//! Factual term extraction.
//!
//! Pulls years, capitalized word runs (proper-noun candidates), numbers with an
//! optional ordinal suffix, and month names out of a concept. Only the union of
//! matches is kept; the category a term came from is not recorded.

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

static YEAR_RE: OnceLock<Regex> = OnceLock::new();
static PROPER_NOUN_RE: OnceLock<Regex> = OnceLock::new();
static ORDINAL_RE: OnceLock<Regex> = OnceLock::new();
static MONTH_RE: OnceLock<Regex> = OnceLock::new();

fn patterns() -> [&'static Regex; 4] {
    [
        YEAR_RE.get_or_init(|| Regex::new(r"\b\d{4}\b").expect("year pattern")),
        PROPER_NOUN_RE.get_or_init(|| {
            Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b").expect("proper noun pattern")
        }),
        ORDINAL_RE.get_or_init(|| Regex::new(r"\b\d+(?:st|nd|rd|th)?\b").expect("ordinal pattern")),
        MONTH_RE.get_or_init(|| {
            Regex::new(
                r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\b",
            )
            .expect("month pattern")
        }),
    ]
}

/// Deduplicated set of factual terms drawn from one concept.
///
/// Backed by a `BTreeSet` so iteration (and therefore feedback text) is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TermSet(BTreeSet<String>);

impl TermSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no factual terms were found.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if `term` is a member.
    pub fn contains(&self, term: &str) -> bool {
        self.0.contains(term)
    }

    /// Iterates the terms in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of terms shared with `other`.
    pub fn overlap(&self, other: &TermSet) -> usize {
        self.0.intersection(&other.0).count()
    }

    /// Fraction of this set's terms also present in `other`.
    ///
    /// `None` when this set is empty (no factual constraint applies).
    pub fn coverage_by(&self, other: &TermSet) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.overlap(other) as f64 / self.len() as f64)
        }
    }

    /// Terms in `self` that are absent from `other`.
    pub fn difference(&self, other: &TermSet) -> TermSet {
        TermSet(self.0.difference(&other.0).cloned().collect())
    }

    /// Joins the terms with `", "` for display.
    pub fn joined(&self) -> String {
        self.iter().collect::<Vec<_>>().join(", ")
    }
}

impl<S: Into<String>> FromIterator<S> for TermSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TermSet(iter.into_iter().map(Into::into).collect())
    }
}

/// Extracts the factual terms of `concept`. Case-sensitive; never fails.
pub fn extract_terms(concept: &str) -> TermSet {
    patterns()
        .into_iter()
        .flat_map(|re| re.find_iter(concept).map(|m| m.as_str()))
        .collect()
}
