use anyhow::Result;
use console::style;
use std::path::Path;

use crate::search::{cosine_similarity, embed, euclidean_distance, Metric, Vocabulary};

use super::read_document;

/// Print the count vector of each text over the vocabulary of `file`, and
/// optionally the pairwise scores between them.
pub fn run_embed(file: &Path, texts: &[String], metric: Option<Metric>) -> Result<()> {
    let corpus = read_document(file)?;
    let vocabulary = Vocabulary::build(&corpus);

    let vectors: Vec<Vec<f32>> = texts.iter().map(|text| embed(text, &vocabulary)).collect();

    for (i, (text, vector)) in texts.iter().zip(&vectors).enumerate() {
        println!(
            "{} {}: {}",
            style(i + 1).dim(),
            style(text).yellow(),
            format_vector(vector)
        );
    }
    println!("\nDimensions: {}", style(vocabulary.len()).cyan());

    let Some(metric) = metric else {
        return Ok(());
    };

    println!();
    for i in 0..vectors.len() {
        for j in (i + 1)..vectors.len() {
            let score = match metric {
                Metric::Cosine => cosine_similarity(&vectors[i], &vectors[j])?,
                Metric::Euclidean => euclidean_distance(&vectors[i], &vectors[j])?,
            };
            println!(
                "Score({}, {}) = {} {}",
                i + 1,
                j + 1,
                style(format!("{:.4}", score)).cyan(),
                style(format!("({})", metric)).dim()
            );
        }
    }

    Ok(())
}

fn format_vector(vector: &[f32]) -> String {
    let values: Vec<String> = vector.iter().map(|v| v.to_string()).collect();
    format!("[{}]", values.join(", "))
}
