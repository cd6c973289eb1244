use serde::Serialize;
use sha2::{Digest, Sha256};

pub const DEFAULT_CHUNK_SIZE: usize = 512;
pub const DEFAULT_MAX_SENTENCE_LENGTH: usize = 80;

/// How a document is cut into chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkPolicy {
    /// Pack whitespace-delimited words until `chunk_size` characters
    /// (one separator counted per word) would be exceeded.
    Words { chunk_size: usize },
    /// One chunk per period-delimited sentence, hard-truncated to
    /// `max_sentence_length` characters.
    Sentences { max_sentence_length: usize },
}

impl Default for ChunkPolicy {
    fn default() -> Self {
        ChunkPolicy::Words {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Chunk text plus the bookkeeping the indexer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkInfo {
    pub id: String,
    /// Position of the chunk within its document.
    pub index: usize,
    pub content: String,
    pub hash: String,
}

#[derive(Debug, Clone, Default)]
pub struct Chunker {
    policy: ChunkPolicy,
}

impl Chunker {
    pub fn new(policy: ChunkPolicy) -> Self {
        Self { policy }
    }

    pub fn words(chunk_size: usize) -> Self {
        Self::new(ChunkPolicy::Words { chunk_size })
    }

    pub fn sentences(max_sentence_length: usize) -> Self {
        Self::new(ChunkPolicy::Sentences {
            max_sentence_length,
        })
    }

    pub fn policy(&self) -> ChunkPolicy {
        self.policy
    }

    /// Split a whole document into ordered chunk texts.
    pub fn chunk(&self, document: &str) -> Vec<String> {
        match self.policy {
            ChunkPolicy::Words { chunk_size } => chunk_by_words(document, chunk_size),
            ChunkPolicy::Sentences {
                max_sentence_length,
            } => chunk_by_sentences(document, max_sentence_length),
        }
    }

    /// Same as [`Chunker::chunk`], with ids and content hashes attached.
    pub fn chunk_infos(&self, source: &str, document: &str) -> Vec<ChunkInfo> {
        self.chunk(document)
            .into_iter()
            .enumerate()
            .map(|(index, content)| ChunkInfo {
                id: format!("{}:chunk:{}", source, index + 1),
                index,
                hash: hash_content(&content),
                content,
            })
            .collect()
    }
}

pub fn chunk(document: &str, policy: ChunkPolicy) -> Vec<String> {
    Chunker::new(policy).chunk(document)
}

/// Word-preserving packing. A single word longer than `chunk_size` is kept whole.
pub fn chunk_by_words(document: &str, chunk_size: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_size = 0;

    for word in document.split_whitespace() {
        let word_size = word.chars().count() + 1; // +1 for the separator

        if current_size + word_size > chunk_size && !current.is_empty() {
            chunks.push(current.join(" "));
            current.clear();
            current_size = 0;
        }

        current.push(word);
        current_size += word_size;
    }

    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    chunks
}

/// Period-delimited sentences, trimmed, with empty pieces dropped.
pub fn chunk_by_sentences(document: &str, max_sentence_length: usize) -> Vec<String> {
    document
        .split('.')
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(|sentence| truncate_chars(sentence, max_sentence_length))
        .collect()
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())[..16].to_string()
}
