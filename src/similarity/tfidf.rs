use crate::vectorizer::{tfidf::DefaultTFIDFEngine, PairVectorizer};

/// Cosine similarity of TF-IDF weighted vectors.
///
/// tf = count / document length, idf = ln((1 + 2) / (1 + df)) + 1,
/// the two documents being the whole corpus.
/// Returns 0.0 when either document has no tokens.
pub fn calculate<T>(tokens_a: &[T], tokens_b: &[T]) -> f64
where
    T: AsRef<str>,
{
    PairVectorizer::new(tokens_a, tokens_b).tfidf_cosine::<f64, DefaultTFIDFEngine>()
}
