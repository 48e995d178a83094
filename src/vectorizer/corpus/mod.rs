use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::TermFrequency;

/// Vocabulary of the documents under comparison
/// keeps the document count and, per term, the number of documents containing it.
///
/// Terms are kept in first-seen order across the documents in the order they
/// were added, so vector dimensions are reproducible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    /// number of documents added
    pub doc_num: u64,
    /// term -> document frequency
    #[serde(with = "indexmap::map::serde_seq")]
    pub term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::new(),
        }
    }

    /// Add a document's distinct terms to the corpus
    /// Duplicated terms in `terms` are counted once, empty terms are skipped.
    pub fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        let mut seen: HashSet<&str> = HashSet::with_capacity(terms.len());
        for term in terms {
            let term = term.as_ref();
            if term.is_empty() || !seen.insert(term) {
                continue;
            }
            if let Some(count) = self.term_counts.get_mut(term) {
                *count += 1;
            } else {
                self.term_counts.insert(term.into(), 1);
            }
        }
    }

    /// Add a document given as its term frequency
    pub fn add_freq(&mut self, freq: &TermFrequency) {
        // term_set_ref_str is already distinct
        self.add_set(&freq.term_set_ref_str());
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the document frequency of a term
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// Dimension index of a term
    #[inline]
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.term_counts.get_index_of(term)
    }

    /// Terms in vocabulary order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.term_counts.keys().map(|t| t.as_ref())
    }
}
