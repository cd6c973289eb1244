use std::collections::{BTreeSet, HashMap};

use super::normalize::tokenize;

/// Deterministic term -> index mapping built from a reference corpus.
///
/// Terms are the distinct normalized tokens of the corpus, indexed in
/// lexicographic order, so building twice from the same text yields the
/// same indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn build(corpus: &str) -> Self {
        let unique: BTreeSet<String> = tokenize(corpus).into_iter().collect();
        Self::from_sorted_terms(unique.into_iter().collect())
    }

    /// Build from an explicit term list. Duplicates are dropped and the
    /// remaining terms are sorted, as with [`Vocabulary::build`].
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = terms.into_iter().map(Into::into).collect();
        Self::from_sorted_terms(unique.into_iter().collect())
    }

    fn from_sorted_terms(terms: Vec<String>) -> Self {
        let index = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();
        Self { terms, index }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// `(term, index)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.as_str(), idx))
    }
}

pub fn build_vocabulary(corpus: &str) -> Vocabulary {
    Vocabulary::build(corpus)
}
