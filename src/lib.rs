//! Minimal in-memory text retrieval: chunking, corpus-derived bag-of-words
//! embeddings and exhaustive ranked vector search.

pub mod cli;
pub mod config;
pub mod error;
pub mod search;

pub use config::Config;
pub use error::{Error, Result};
pub use search::{
    build_vocabulary, chunk, embed, normalize_vector, ChunkPolicy, Chunker, MemoryStore, Metric,
    SearchResult, StoreConfig, VectorStore, Vocabulary,
};
