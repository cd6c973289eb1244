//! TOML configuration for chunking and search.
//!
//! Every field has a default, so an empty file (or no file) is valid:
//!
//! ```toml
//! [chunking]
//! policy = "words"          # or "sentences"
//! chunk_size = 512
//! max_sentence_length = 80
//!
//! [store]
//! metric = "cosine"         # or "euclidean"
//! # normalize = true        # defaults to true for cosine, false for euclidean
//! top_k = 3
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::search::chunker::{ChunkPolicy, DEFAULT_CHUNK_SIZE, DEFAULT_MAX_SENTENCE_LENGTH};
use crate::search::store::{Metric, StoreConfig};

pub const DEFAULT_TOP_K: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[default]
    Words,
    Sentences,
}

impl std::str::FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "words" => Ok(PolicyKind::Words),
            "sentences" => Ok(PolicyKind::Sentences),
            other => Err(format!(
                "unknown chunk policy '{}', expected 'words' or 'sentences'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    pub policy: PolicyKind,
    /// Character budget per chunk for the word policy.
    pub chunk_size: usize,
    /// Truncation length for the sentence policy.
    pub max_sentence_length: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::Words,
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_sentence_length: DEFAULT_MAX_SENTENCE_LENGTH,
        }
    }
}

impl ChunkingConfig {
    pub fn to_policy(&self) -> ChunkPolicy {
        match self.policy {
            PolicyKind::Words => ChunkPolicy::Words {
                chunk_size: self.chunk_size,
            },
            PolicyKind::Sentences => ChunkPolicy::Sentences {
                max_sentence_length: self.max_sentence_length,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreOptionsConfig {
    pub metric: Metric,
    /// Unset means "whatever the metric is defined on".
    pub normalize: Option<bool>,
    pub top_k: usize,
}

impl Default for StoreOptionsConfig {
    fn default() -> Self {
        Self {
            metric: Metric::Cosine,
            normalize: None,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl StoreOptionsConfig {
    pub fn to_store_config(&self) -> StoreConfig {
        let mut store = StoreConfig::for_metric(self.metric);
        if let Some(normalize) = self.normalize {
            store.normalize = normalize;
        }
        store
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub chunking: ChunkingConfig,
    pub store: StoreOptionsConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.chunking.chunk_size == 0 {
            return Err(Error::InvalidConfig(
                "chunking.chunk_size must be greater than 0".to_string(),
            ));
        }
        if self.chunking.max_sentence_length == 0 {
            return Err(Error::InvalidConfig(
                "chunking.max_sentence_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
