use crate::vectorizer::PairVectorizer;

/// Cosine similarity of raw term-frequency vectors over the shared vocabulary.
///
/// Returns 0.0 when either document has no tokens.
pub fn calculate<T>(tokens_a: &[T], tokens_b: &[T]) -> f64
where
    T: AsRef<str>,
{
    PairVectorizer::new(tokens_a, tokens_b).count_cosine()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_documents_score_exactly_one() {
        let doc = ["plagiarism", "detection", "detection", "rust"];
        assert_eq!(calculate(&doc, &doc), 1.0);
    }

    #[test]
    fn frequency_matters() {
        // (2, 1) vs (1, 2): 4 / 5
        let a = ["x", "x", "y"];
        let b = ["x", "y", "y"];
        assert!((calculate(&a, &b) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn empty_and_disjoint_are_zero() {
        let empty: [&str; 0] = [];
        assert_eq!(calculate(&empty, &empty), 0.0);
        assert_eq!(calculate(&empty, &["word"]), 0.0);
        assert_eq!(calculate(&["apple", "banana"], &["rocket", "fuel"]), 0.0);
    }

    #[test]
    fn symmetric() {
        let a = ["a", "b", "b", "c"];
        let b = ["b", "c", "d", "d", "d"];
        assert_eq!(calculate(&a, &b), calculate(&b, &a));
    }
}
