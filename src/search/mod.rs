pub mod chunker;
pub mod embedder;
pub mod indexer;
pub mod normalize;
pub mod searcher;
pub mod store;
pub mod vocabulary;

pub use chunker::{chunk, chunk_by_sentences, chunk_by_words, ChunkInfo, ChunkPolicy, Chunker};
pub use embedder::{create_embedder, embed, BagOfWordsEmbedder, Embedder};
pub use indexer::{IndexResult, Indexer};
pub use normalize::tokenize;
pub use searcher::Searcher;
pub use store::{
    cosine_similarity, dot, euclidean_distance, normalize_vector, IndexStats, MemoryStore, Metric,
    SearchResult, StoreConfig, StoreEntry, VectorStore,
};
pub use vocabulary::{build_vocabulary, Vocabulary};
