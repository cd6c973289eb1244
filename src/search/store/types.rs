use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Higher is more similar.
    #[default]
    Cosine,
    /// Lower is more similar.
    Euclidean,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Cosine => "cosine",
            Metric::Euclidean => "euclidean",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cosine" => Ok(Metric::Cosine),
            "euclidean" => Ok(Metric::Euclidean),
            other => Err(format!(
                "unknown metric '{}', expected 'cosine' or 'euclidean'",
                other
            )),
        }
    }
}

/// Scoring policy for a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    pub metric: Metric,
    /// Unit-normalize vectors on `add` and queries on `query`.
    pub normalize: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::cosine()
    }
}

impl StoreConfig {
    /// Cosine similarity over unit-normalized vectors.
    pub fn cosine() -> Self {
        Self {
            metric: Metric::Cosine,
            normalize: true,
        }
    }

    /// Euclidean distance over raw counts.
    pub fn euclidean() -> Self {
        Self {
            metric: Metric::Euclidean,
            normalize: false,
        }
    }

    /// The pairing each metric is defined on: unit vectors for cosine, raw counts for Euclidean.
    pub fn for_metric(metric: Metric) -> Self {
        match metric {
            Metric::Cosine => Self::cosine(),
            Metric::Euclidean => Self::euclidean(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreEntry {
    pub text: String,
    pub vector: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub text: String,
    pub score: f32,
}

impl SearchResult {
    pub fn new(text: String, score: f32) -> Self {
        Self { text, score }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexStats {
    pub total_entries: usize,
    pub dimensions: Option<usize>,
    pub metric: String,
    pub normalized: bool,
}
