pub mod compare;
pub mod corpus;
pub mod term;
pub mod tfidf;

use num::Num;
use tracing::trace;

use crate::{
    utils::math::vector::ZeroSpVec,
    vectorizer::{
        compare::{Compare, DefaultCompare},
        corpus::Corpus,
        term::TermFrequency,
        tfidf::TFIDFEngine,
    },
};

/// Frequency and vocabulary statistics of the two documents under comparison.
///
/// Holds:
/// - The term frequency of each document
/// - The shared vocabulary with document frequencies (`Corpus`)
///
/// Vocabulary order is first-seen across document A then document B,
/// so every vector built from it has the same, reproducible dimensions.
/// Built fresh for each comparison.
#[derive(Debug, Clone)]
pub struct PairVectorizer {
    pub freq_a: TermFrequency,
    pub freq_b: TermFrequency,
    pub corpus: Corpus,
}

impl PairVectorizer {
    /// Build statistics from two token sequences
    pub fn new<T>(tokens_a: &[T], tokens_b: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let freq_a = TermFrequency::from_iter(tokens_a);
        let freq_b = TermFrequency::from_iter(tokens_b);
        Self::from_freqs(freq_a, freq_b)
    }

    /// Build statistics from two term frequencies
    pub fn from_freqs(freq_a: TermFrequency, freq_b: TermFrequency) -> Self {
        let mut corpus = Corpus::new();
        corpus.add_freq(&freq_a);
        corpus.add_freq(&freq_b);
        trace!(
            tokens_a = freq_a.term_sum(),
            tokens_b = freq_b.term_sum(),
            vocab_size = corpus.vocab_size(),
            "built pair vocabulary"
        );
        Self { freq_a, freq_b, corpus }
    }

    /// Raw count vectors over the shared vocabulary
    pub fn count_vectors(&self) -> (ZeroSpVec<u32>, ZeroSpVec<u32>) {
        (self.count_vec(&self.freq_a), self.count_vec(&self.freq_b))
    }

    fn count_vec(&self, freq: &TermFrequency) -> ZeroSpVec<u32> {
        let mut vec = ZeroSpVec::with_capacity(freq.term_num());
        for term in self.corpus.terms() {
            vec.push(freq.term_count(term));
        }
        vec
    }

    /// TF-IDF weighted vectors over the shared vocabulary
    pub fn tfidf_vectors<N, E>(&self) -> (ZeroSpVec<N>, ZeroSpVec<N>)
    where
        N: Num + Copy,
        E: TFIDFEngine<N>,
    {
        (
            E::tfidf_vec(&self.freq_a, &self.corpus),
            E::tfidf_vec(&self.freq_b, &self.corpus),
        )
    }

    /// Cosine similarity of the raw count vectors
    pub fn count_cosine(&self) -> f64 {
        let (a, b) = self.count_vectors();
        <DefaultCompare as Compare<u32>>::cosine_similarity(a.raw_iter(), b.raw_iter())
    }

    /// Cosine similarity of the TF-IDF weighted vectors
    pub fn tfidf_cosine<N, E>(&self) -> f64
    where
        N: Num + Copy,
        E: TFIDFEngine<N>,
        DefaultCompare: Compare<N>,
    {
        let (a, b) = self.tfidf_vectors::<N, E>();
        <DefaultCompare as Compare<N>>::cosine_similarity(a.raw_iter(), b.raw_iter())
    }

    /// Terms occurring in both documents, vocabulary order
    pub fn shared_terms(&self) -> Vec<&str> {
        self.corpus
            .terms()
            .filter(|term| self.corpus.get_term_count(term) >= 2)
            .collect()
    }

    /// Size of the shared vocabulary
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.corpus.vocab_size()
    }
}
