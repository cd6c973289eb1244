use std::sync::Arc;
use tracing::debug;

use crate::error::Result;

use super::embedder::Embedder;
use super::store::{SearchResult, VectorStore};

pub struct Searcher {
    store: Box<dyn VectorStore>,
    embedder: Arc<dyn Embedder>,
}

impl Searcher {
    pub fn new(store: Box<dyn VectorStore>, embedder: Arc<dyn Embedder>) -> Self {
        Self { store, embedder }
    }

    pub fn store(&self) -> &dyn VectorStore {
        self.store.as_ref()
    }

    /// Embed `query` with the indexing embedder and rank stored chunks against it.
    pub fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>> {
        let query_vector = self.embedder.embed(query);
        debug!(
            dimensions = query_vector.len(),
            non_zero = query_vector.iter().filter(|x| **x != 0.0).count(),
            "embedded query"
        );
        self.store.query(&query_vector, top_k)
    }
}
