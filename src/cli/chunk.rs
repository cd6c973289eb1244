use anyhow::Result;
use console::style;
use std::path::Path;

use crate::config::ChunkingConfig;
use crate::search::Chunker;

use super::read_document;

pub fn run_chunk(file: &Path, config: &ChunkingConfig, json: bool) -> Result<()> {
    let document = read_document(file)?;
    let chunker = Chunker::new(config.to_policy());
    let chunks = chunker.chunk_infos(&file.display().to_string(), &document);

    if json {
        let output = serde_json::to_string_pretty(&chunks)?;
        println!("{}", output);
        return Ok(());
    }

    if chunks.is_empty() {
        println!("No chunks produced from {}", style(file.display()).italic());
        return Ok(());
    }

    for chunk in &chunks {
        println!(
            "{} {} {}",
            style(format!("Chunk {}", chunk.index + 1)).bold(),
            style(format!("({} chars)", chunk.content.chars().count())).dim(),
            style(&chunk.hash).dim()
        );
        println!("{}\n", chunk.content);
    }
    println!("Total chunks: {}", style(chunks.len()).cyan());

    Ok(())
}
