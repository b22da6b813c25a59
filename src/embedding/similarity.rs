//! Cosine similarity between two vector sets.

use serde::Serialize;

use super::error::EmbeddingError;

/// Dense `rows × cols` matrix of pairwise similarities (row-major).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Builds a matrix from rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, EmbeddingError> {
        let cols = rows.first().map_or(0, Vec::len);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(EmbeddingError::RaggedMatrix {
                    row,
                    expected: cols,
                    actual: values.len(),
                });
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            values: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row `i`, or `None` if out of range.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        (i < self.rows).then(|| &self.values[i * self.cols..(i + 1) * self.cols])
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.row(i).and_then(|row| row.get(j).copied())
    }

    /// Index and value of the largest entry in row `i`.
    ///
    /// Ties go to the lowest column; NaN entries never win.
    pub fn row_argmax(&self, i: usize) -> Option<(usize, f64)> {
        let row = self.row(i)?;
        let mut best: Option<(usize, f64)> = None;
        for (j, &value) in row.iter().enumerate() {
            if value.is_nan() {
                continue;
            }
            match best {
                Some((_, current)) if value <= current => {}
                _ => best = Some((j, value)),
            }
        }
        best.or_else(|| (!row.is_empty()).then_some((0, f64::NAN)))
    }
}

/// Cosine similarity of two vectors; `0.0` when either has zero norm.
///
/// Accumulates in `f64` so scores compare exactly against decimal thresholds.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;

    for (&x, &y) in a.iter().zip(b.iter()) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 { 0.0 } else { dot / denom }
}

/// Pairwise cosine similarity: entry `(i, j)` compares `a[i]` with `b[j]`.
///
/// Every vector in both sets must share one dimension.
pub fn cosine_matrix(a: &[Vec<f32>], b: &[Vec<f32>]) -> Result<SimilarityMatrix, EmbeddingError> {
    let Some(expected) = a.first().or_else(|| b.first()).map(Vec::len) else {
        return SimilarityMatrix::from_rows(Vec::new());
    };

    if let Some(bad) = a.iter().chain(b.iter()).find(|v| v.len() != expected) {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: bad.len(),
        });
    }

    let rows = a
        .iter()
        .map(|va| b.iter().map(|vb| cosine_similarity(va, vb)).collect())
        .collect();

    SimilarityMatrix::from_rows(rows)
}
