use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One letter grade and the minimum percentage that earns it.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeRange {
    pub label: String,
    pub min_percentage: f64,
}

impl GradeRange {
    pub fn new(label: impl Into<String>, min_percentage: f64) -> Self {
        Self {
            label: label.into(),
            min_percentage,
        }
    }
}

/// Ordered label → minimum-percentage table.
///
/// Serialized as a JSON object; document order is kept. A repeated label
/// keeps its first position and takes the last value.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeScale(Vec<GradeRange>);

impl Default for GradeScale {
    fn default() -> Self {
        Self(vec![
            GradeRange::new("A", 90.0),
            GradeRange::new("B", 80.0),
            GradeRange::new("C", 70.0),
            GradeRange::new("D", 60.0),
            GradeRange::new("F", 0.0),
        ])
    }
}

impl GradeScale {
    /// Builds a scale from `(label, minimum)` pairs in the given order.
    pub fn new<L: Into<String>>(ranges: impl IntoIterator<Item = (L, f64)>) -> Self {
        let mut scale = Self(Vec::new());
        for (label, min_percentage) in ranges {
            scale.insert(label.into(), min_percentage);
        }
        scale
    }

    fn insert(&mut self, label: String, min_percentage: f64) {
        match self.0.iter_mut().find(|range| range.label == label) {
            Some(existing) => existing.min_percentage = min_percentage,
            None => self.0.push(GradeRange {
                label,
                min_percentage,
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &GradeRange> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `true` when some grade is reachable with a score of zero.
    pub fn has_floor(&self) -> bool {
        self.0.iter().any(|range| range.min_percentage <= 0.0)
    }

    /// Ranges sorted by descending minimum; equal minimums keep table order.
    pub fn ranked(&self) -> Vec<&GradeRange> {
        let mut ranked: Vec<&GradeRange> = self.0.iter().collect();
        ranked.sort_by(|a, b| b.min_percentage.total_cmp(&a.min_percentage));
        ranked
    }
}

impl Serialize for GradeScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for range in &self.0 {
            map.serialize_entry(&range.label, &range.min_percentage)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for GradeScale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScaleVisitor;

        impl<'de> Visitor<'de> for ScaleVisitor {
            type Value = GradeScale;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of grade label to minimum percentage")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<GradeScale, A::Error> {
                let mut scale = GradeScale(Vec::with_capacity(access.size_hint().unwrap_or(0)));
                while let Some((label, min_percentage)) = access.next_entry::<String, f64>()? {
                    scale.insert(label, min_percentage);
                }
                Ok(scale)
            }
        }

        deserializer.deserialize_map(ScaleVisitor)
    }
}
