use crate::vectorizer::PairVectorizer;

/// Jaccard similarity of the distinct-token sets: |A ∩ B| / |A ∪ B|.
/// Term frequency is ignored.
///
/// Two empty sets score 0.0: an empty comparison makes no similarity claim.
pub fn calculate<T>(tokens_a: &[T], tokens_b: &[T]) -> f64
where
    T: AsRef<str>,
{
    let pair = PairVectorizer::new(tokens_a, tokens_b);
    // the pair vocabulary is the union, shared terms are the intersection
    let union = pair.vocab_size();
    if union == 0 {
        return 0.0;
    }
    let intersection = pair.shared_terms().len();
    intersection as f64 / union as f64
}
