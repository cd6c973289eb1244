mod memory;
mod types;

pub use memory::MemoryStore;
pub use types::{IndexStats, Metric, SearchResult, StoreConfig, StoreEntry};

use crate::error::{Error, Result};

pub trait VectorStore {
    fn add(&mut self, text: &str, vector: Vec<f32>);

    /// Rank every entry against `query_vector`, keeping at most `top_k`.
    ///
    /// `top_k == 0` and an empty store return `Ok(vec![])` before any
    /// vector is inspected. Otherwise a query whose dimension differs from
    /// a stored entry fails with `LengthMismatch`, `expected` being the
    /// stored dimension.
    fn query(&self, query_vector: &[f32], top_k: usize) -> Result<Vec<SearchResult>>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn stats(&self) -> IndexStats;
}

/// Scale to unit Euclidean norm. The zero vector is returned unchanged.
pub fn normalize_vector(vector: &[f32]) -> Vec<f32> {
    let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm == 0.0 {
        return vector.to_vec();
    }
    vector.iter().map(|x| x / norm).collect()
}

/// Metric helpers treat `a` as the reference dimension when lengths differ.
pub fn dot(a: &[f32], b: &[f32]) -> Result<f32> {
    Error::check_lengths(a.len(), b.len())?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

/// Cosine of the angle between `a` and `b`; 0.0 when either is the zero vector.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    Error::check_lengths(a.len(), b.len())?;

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot / denom)
    }
}

pub fn euclidean_distance(a: &[f32], b: &[f32]) -> Result<f32> {
    Error::check_lengths(a.len(), b.len())?;
    let sum_of_squares: f32 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum();
    Ok(sum_of_squares.sqrt())
}
