use serde::Serialize;

/// Ordered, duplicate-free concepts extracted from one source text.
///
/// Order is order of first appearance in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConceptSequence(Vec<String>);

impl ConceptSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// A sequence holding exactly `concept`.
    pub fn single(concept: impl Into<String>) -> Self {
        Self(vec![concept.into()])
    }

    /// Appends `concept` unless an identical string is already present.
    ///
    /// Returns `true` if it was added.
    pub fn push_unique(&mut self, concept: impl Into<String>) -> bool {
        let concept = concept.into();
        if self.0.contains(&concept) {
            return false;
        }
        self.0.push(concept);
        true
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Borrowed view suitable for batch encoding.
    pub fn as_strs(&self) -> Vec<&str> {
        self.iter().collect()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<S: Into<String>> FromIterator<S> for ConceptSequence {
    /// Collects while dropping duplicates (first occurrence wins).
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut sequence = Self::new();
        for concept in iter {
            sequence.push_unique(concept);
        }
        sequence
    }
}
