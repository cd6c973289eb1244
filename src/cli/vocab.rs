use anyhow::Result;
use console::style;
use std::path::Path;

use crate::search::Vocabulary;

use super::read_document;

pub fn run_vocab(file: &Path) -> Result<()> {
    let corpus = read_document(file)?;
    let vocabulary = Vocabulary::build(&corpus);

    for (term, idx) in vocabulary.iter() {
        println!("{}: {}", term, style(idx).dim());
    }
    println!(
        "\nTotal vocabulary size: {}",
        style(vocabulary.len()).cyan()
    );

    Ok(())
}
