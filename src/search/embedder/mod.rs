mod bow;

pub use bow::{embed, BagOfWordsEmbedder};

use super::vocabulary::Vocabulary;

pub trait Embedder {
    fn embed(&self, text: &str) -> Vec<f32>;

    fn embed_batch(&self, texts: &[String]) -> Vec<Vec<f32>> {
        texts.iter().map(|text| self.embed(text)).collect()
    }

    fn dimensions(&self) -> usize;
}

pub fn create_embedder(vocabulary: Vocabulary) -> Box<dyn Embedder> {
    Box::new(BagOfWordsEmbedder::new(vocabulary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_embedder() {
        let embedder = create_embedder(Vocabulary::build("The cat sat. The dog ran."));
        assert_eq!(embedder.dimensions(), 5);
        assert_eq!(embedder.embed("dog dog cat"), vec![1.0, 2.0, 0.0, 0.0, 0.0]);
    }
}
