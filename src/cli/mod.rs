mod args;
mod chunk;
mod embed;
mod search;
mod vocab;

pub use args::{Args, ChunkArgs, Command};
pub use chunk::run_chunk;
pub use embed::run_embed;
pub use search::run_search;
pub use vocab::run_vocab;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub(crate) fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
