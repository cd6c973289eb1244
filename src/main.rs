use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tinyrag::cli::{run_chunk, run_embed, run_search, run_vocab, Args, Command};
use tinyrag::config::Config;

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        "tinyrag=debug"
    } else {
        "tinyrag=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match args.command {
        Command::Vocab { file } => run_vocab(&file),
        Command::Chunk {
            file,
            json,
            chunking,
        } => {
            chunking.apply(&mut config);
            config.validate()?;
            run_chunk(&file, &config.chunking, json)
        }
        Command::Embed {
            file,
            texts,
            metric,
        } => run_embed(&file, &texts, metric),
        Command::Search {
            file,
            query,
            top_k,
            metric,
            json,
            chunking,
        } => {
            chunking.apply(&mut config);
            if let Some(top_k) = top_k {
                config.store.top_k = top_k;
            }
            if let Some(metric) = metric {
                config.store.metric = metric;
                config.store.normalize = None;
            }
            config.validate()?;
            run_search(&file, &query, &config, json)
        }
    }
}
