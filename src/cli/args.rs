use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, PolicyKind};
use crate::search::Metric;

#[derive(Parser, Debug)]
#[command(name = "tinyrag")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the vocabulary built from a file
    Vocab {
        /// Corpus file
        file: PathBuf,
    },

    /// Split a file into chunks and print them
    Chunk {
        /// Document file
        file: PathBuf,

        /// Output chunks with ids and content hashes as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        chunking: ChunkArgs,
    },

    /// Print bag-of-words vectors for texts over a file's vocabulary
    Embed {
        /// Corpus file the vocabulary is built from
        file: PathBuf,

        /// Texts to embed
        #[arg(required = true, num_args = 1..)]
        texts: Vec<String>,

        /// Also print the pairwise score under this metric
        #[arg(short, long)]
        metric: Option<Metric>,
    },

    /// Index a file and rank its chunks against a query
    Search {
        /// Document file (also the vocabulary corpus)
        file: PathBuf,

        /// Query text
        query: String,

        /// Maximum number of results
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Scoring metric: cosine (normalized vectors) or euclidean (raw counts)
        #[arg(short, long)]
        metric: Option<Metric>,

        /// Output results as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        chunking: ChunkArgs,
    },
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct ChunkArgs {
    /// Chunk policy: words or sentences
    #[arg(short, long)]
    pub policy: Option<PolicyKind>,

    /// Character budget per chunk (words policy)
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Truncation length per sentence (sentences policy)
    #[arg(long)]
    pub max_sentence_length: Option<usize>,
}

impl ChunkArgs {
    /// Overlay command-line values on the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(policy) = self.policy {
            config.chunking.policy = policy;
        }
        if let Some(chunk_size) = self.chunk_size {
            config.chunking.chunk_size = chunk_size;
        }
        if let Some(max_sentence_length) = self.max_sentence_length {
            config.chunking.max_sentence_length = max_sentence_length;
        }
    }
}
