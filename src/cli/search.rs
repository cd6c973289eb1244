use anyhow::Result;
use console::{style, Emoji};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::search::{
    create_embedder, Chunker, Embedder, Indexer, MemoryStore, Searcher, VectorStore, Vocabulary,
};

static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "");
static CHUNK: Emoji<'_, '_> = Emoji("📄 ", "");

const PREVIEW_CHARS: usize = 200;

pub fn run_search(file: &Path, query: &str, config: &Config, json: bool) -> Result<()> {
    let document = super::read_document(file)?;

    // The document is its own reference corpus
    let vocabulary = Vocabulary::build(&document);
    info!(terms = vocabulary.len(), "built vocabulary");

    let embedder: Arc<dyn Embedder> = Arc::from(create_embedder(vocabulary));
    let indexer = Indexer::new(
        Arc::clone(&embedder),
        Chunker::new(config.chunking.to_policy()),
    );

    let mut store = MemoryStore::new(config.store.to_store_config());
    let source = file.display().to_string();
    indexer.index_document(&mut store, &source, &document);

    let stats = store.stats();
    info!(
        entries = stats.total_entries,
        metric = %stats.metric,
        normalized = stats.normalized,
        "store ready"
    );

    let searcher = Searcher::new(Box::new(store), embedder);
    let results = searcher.search(query, config.store.top_k)?;

    if json {
        let output = serde_json::to_string_pretty(&results)?;
        println!("{}", output);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results found for: {}", style(query).italic());
        return Ok(());
    }

    println!(
        "\n{}Found {} results for: {} {}\n",
        SEARCH,
        style(results.len()).cyan(),
        style(query).yellow().bold(),
        style(format!("({})", config.store.metric)).dim()
    );

    for (i, result) in results.iter().enumerate() {
        println!(
            "{} {}. Score: {}",
            CHUNK,
            style(i + 1).dim(),
            style(format!("{:.4}", result.score)).cyan()
        );

        let preview: String = result.text.chars().take(PREVIEW_CHARS).collect();
        if result.text.chars().count() > PREVIEW_CHARS {
            println!("   {}...", preview);
        } else {
            println!("   {}", preview);
        }
        println!();
    }

    Ok(())
}
