use std::sync::Arc;
use tracing::{debug, info};

use super::chunker::{ChunkInfo, Chunker};
use super::embedder::Embedder;
use super::store::VectorStore;

const BATCH_SIZE: usize = 32;

/// Chunks documents, embeds every chunk and appends it to a store.
pub struct Indexer {
    embedder: Arc<dyn Embedder>,
    chunker: Chunker,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexResult {
    pub chunks_created: usize,
    pub dimensions: usize,
}

impl Indexer {
    pub fn new(embedder: Arc<dyn Embedder>, chunker: Chunker) -> Self {
        Self { embedder, chunker }
    }

    /// Index one document. `source` names the document in chunk ids.
    pub fn index_document(
        &self,
        store: &mut dyn VectorStore,
        source: &str,
        document: &str,
    ) -> IndexResult {
        let chunk_infos = self.chunker.chunk_infos(source, document);
        let result = IndexResult {
            chunks_created: chunk_infos.len(),
            dimensions: self.embedder.dimensions(),
        };

        if chunk_infos.is_empty() {
            debug!(source, "document produced no chunks");
            return result;
        }

        self.embed_into(store, &chunk_infos);

        info!(
            source,
            chunks = result.chunks_created,
            dimensions = result.dimensions,
            "indexed document"
        );
        result
    }

    fn embed_into(&self, store: &mut dyn VectorStore, chunk_infos: &[ChunkInfo]) {
        for batch in chunk_infos.chunks(BATCH_SIZE) {
            let texts: Vec<String> = batch.iter().map(|c| c.content.clone()).collect();
            let embeddings = self.embedder.embed_batch(&texts);

            for (info, vector) in batch.iter().zip(embeddings) {
                debug!(id = %info.id, hash = %info.hash, "storing chunk");
                store.add(&info.content, vector);
            }
        }
    }
}
