use tracing::debug;

use crate::error::Result;

use super::{
    cosine_similarity, euclidean_distance, normalize_vector, IndexStats, Metric, SearchResult,
    StoreConfig, StoreEntry, VectorStore,
};

/// Append-only in-memory store with exhaustive ranked search.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    config: StoreConfig,
    entries: Vec<StoreEntry>,
}

impl MemoryStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[StoreEntry] {
        &self.entries
    }

    fn prepare(&self, vector: &[f32]) -> Vec<f32> {
        if self.config.normalize {
            normalize_vector(vector)
        } else {
            vector.to_vec()
        }
    }

    // The stored dimension is the reference side of a mismatch.
    fn score(&self, query: &[f32], stored: &[f32]) -> Result<f32> {
        match self.config.metric {
            Metric::Cosine => cosine_similarity(stored, query),
            Metric::Euclidean => euclidean_distance(stored, query),
        }
    }
}

impl VectorStore for MemoryStore {
    fn add(&mut self, text: &str, vector: Vec<f32>) {
        let vector = if self.config.normalize {
            normalize_vector(&vector)
        } else {
            vector
        };
        self.entries.push(StoreEntry {
            text: text.to_string(),
            vector,
        });
    }

    fn query(&self, query_vector: &[f32], top_k: usize) -> Result<Vec<SearchResult>> {
        if top_k == 0 || self.entries.is_empty() {
            return Ok(Vec::new());
        }

        let query = self.prepare(query_vector);

        let mut results = self
            .entries
            .iter()
            .map(|entry| {
                let score = self.score(&query, &entry.vector)?;
                Ok(SearchResult::new(entry.text.clone(), score))
            })
            .collect::<Result<Vec<_>>>()?;

        // Stable sort: equal scores keep insertion order.
        match self.config.metric {
            Metric::Cosine => results.sort_by(|a, b| b.score.total_cmp(&a.score)),
            Metric::Euclidean => results.sort_by(|a, b| a.score.total_cmp(&b.score)),
        }
        results.truncate(top_k);

        debug!(
            metric = %self.config.metric,
            scanned = self.entries.len(),
            returned = results.len(),
            "vector store query"
        );

        Ok(results)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn stats(&self) -> IndexStats {
        IndexStats {
            total_entries: self.entries.len(),
            dimensions: self.entries.first().map(|entry| entry.vector.len()),
            metric: self.config.metric.to_string(),
            normalized: self.config.normalize,
        }
    }
}
