use crate::search::normalize::tokenize;
use crate::search::vocabulary::Vocabulary;

use super::Embedder;

/// Term-count vector over `vocabulary`. Tokens outside the vocabulary are ignored.
pub fn embed(text: &str, vocabulary: &Vocabulary) -> Vec<f32> {
    let mut vector = vec![0.0f32; vocabulary.len()];
    for token in tokenize(text) {
        if let Some(idx) = vocabulary.index_of(&token) {
            vector[idx] += 1.0;
        }
    }
    vector
}

/// Bag-of-words embedder that owns its vocabulary.
#[derive(Debug, Clone)]
pub struct BagOfWordsEmbedder {
    vocabulary: Vocabulary,
}

impl BagOfWordsEmbedder {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Build the vocabulary from `corpus` and wrap it.
    pub fn from_corpus(corpus: &str) -> Self {
        Self::new(Vocabulary::build(corpus))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

impl Embedder for BagOfWordsEmbedder {
    fn embed(&self, text: &str) -> Vec<f32> {
        embed(text, &self.vocabulary)
    }

    fn dimensions(&self) -> usize {
        self.vocabulary.len()
    }
}
