use num::Num;

use crate::{utils::math::vector::ZeroSpVec, vectorizer::{corpus::Corpus, term::TermFrequency}};

/// TF-IDF weighting strategy over a corpus vocabulary.
/// Vector dimension `i` is the `i`-th term of `corpus`.
pub trait TFIDFEngine<N>
where
    N: Num + Copy,
{
    /// Generate the IDF vector
    /// # Arguments
    /// * `corpus` - corpus holding document frequencies
    /// # Returns
    /// * `Vec<N>` - IDF per vocabulary term
    fn idf_vec(corpus: &Corpus) -> Vec<N>;

    /// Generate the TF vector of one document
    /// # Arguments
    /// * `freq` - term frequency of the document
    /// * `corpus` - corpus giving the dimension order
    fn tf_vec(freq: &TermFrequency, corpus: &Corpus) -> ZeroSpVec<N>;

    /// TF × IDF weighted vector of one document
    fn tfidf_vec(freq: &TermFrequency, corpus: &Corpus) -> ZeroSpVec<N> {
        let idf_vec = Self::idf_vec(corpus);
        let tf_vec = Self::tf_vec(freq, corpus);
        let mut weighted = ZeroSpVec::with_capacity(tf_vec.nnz());
        for (idx, idf) in idf_vec.into_iter().enumerate() {
            weighted.push(tf_vec.get(idx) * idf);
        }
        weighted
    }
}

/// Default TF-IDF engine
/// tf(t, d) = count(t, d) / |d|
/// idf(t) = ln((1 + N) / (1 + df(t))) + 1
///
/// Supports `f32` and `f64`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    /// Smoothed IDF, always > 0 for df <= doc_num
    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }
}

impl TFIDFEngine<f64> for DefaultTFIDFEngine {
    fn idf_vec(corpus: &Corpus) -> Vec<f64> {
        let doc_num = corpus.get_doc_num();
        corpus
            .terms()
            .map(|term| Self::idf_calc(doc_num, corpus.get_term_count(term)))
            .collect()
    }

    fn tf_vec(freq: &TermFrequency, corpus: &Corpus) -> ZeroSpVec<f64> {
        let mut tf_vec = ZeroSpVec::with_capacity(freq.term_num());
        for term in corpus.terms() {
            tf_vec.push(freq.tf(term));
        }
        tf_vec
    }
}

impl TFIDFEngine<f32> for DefaultTFIDFEngine {
    fn idf_vec(corpus: &Corpus) -> Vec<f32> {
        let doc_num = corpus.get_doc_num();
        corpus
            .terms()
            .map(|term| Self::idf_calc(doc_num, corpus.get_term_count(term)) as f32)
            .collect()
    }

    fn tf_vec(freq: &TermFrequency, corpus: &Corpus) -> ZeroSpVec<f32> {
        let mut tf_vec = ZeroSpVec::with_capacity(freq.term_num());
        for term in corpus.terms() {
            tf_vec.push(freq.tf(term) as f32);
        }
        tf_vec
    }
}
