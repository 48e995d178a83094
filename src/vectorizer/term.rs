use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// TermFrequency struct
/// Manages the frequency of term occurrences within one document.
/// Terms keep the order in which they were first added.
///
/// # Examples
/// ```
/// use plagiarism_checker::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_term("term1");
/// term_freq.add_term("term2");
/// term_freq.add_term("term1");
///
/// assert_eq!(term_freq.term_count("term1"), 2);
/// assert_eq!(term_freq.term_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u32>,
    total_term_count: u64,
}

/// Implementation for adding terms
impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Add a term
    /// Empty terms are ignored.
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        if term.is_empty() {
            return self;
        }
        if let Some(count) = self.term_count.get_mut(term) {
            *count += 1;
        } else {
            self.term_count.insert(term.to_string(), 1);
        }
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

impl<T> FromIterator<T> for TermFrequency
where
    T: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut freq = TermFrequency::new();
        for term in iter {
            freq.add_term(term.as_ref());
        }
        freq
    }
}

/// Implementation for retrieving information from TermFrequency
impl TermFrequency {
    /// Iterate `(term, count)` in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Get the total count of all terms
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Get the occurrence count for a specific term
    ///
    /// # Arguments
    /// * `term` - term
    ///
    /// # Returns
    /// * `u32` - Occurrence count of the term, 0 when absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Term frequency normalized by document length
    /// tf = count / total
    ///
    /// # Returns
    /// * `f64` - 0.0 for an empty document or an absent term
    #[inline]
    pub fn tf(&self, term: &str) -> f64 {
        if self.total_term_count == 0 {
            return 0.0;
        }
        self.term_count(term) as f64 / self.total_term_count as f64
    }

    /// Get the most frequent terms
    /// If multiple terms share the top count, all of them are returned in first-seen order
    #[inline]
    pub fn most_frequent_terms(&self) -> Vec<(&str, u32)> {
        match self.term_count.values().max() {
            Some(&max_count) => self
                .iter()
                .filter(|&(_, count)| count == max_count)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Check if a term exists
    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// Get the set of terms as references, first-seen order
    #[inline]
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(|s| s.as_str()).collect()
    }

    /// Get the number of unique terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_term_count == 0
    }

    /// Calculate term diversity
    /// 1.0 indicates every term is distinct
    #[inline]
    pub fn unique_term_ratio(&self) -> f64 {
        if self.total_term_count == 0 {
            return 0.0;
        }
        self.term_count.len() as f64 / self.total_term_count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_total() {
        let mut freq = TermFrequency::new();
        freq.add_terms(&["rust", "fast", "rust", "safe"]);
        assert_eq!(freq.term_count("rust"), 2);
        assert_eq!(freq.term_count("missing"), 0);
        assert_eq!(freq.term_sum(), 4);
        assert_eq!(freq.term_num(), 3);
        assert!(freq.contains_term("safe"));
    }

    #[test]
    fn empty_terms_are_ignored() {
        let freq: TermFrequency = ["", "word", "", ""].into_iter().collect();
        assert_eq!(freq.term_sum(), 1);
        assert_eq!(freq.term_set_ref_str(), vec!["word"]);
        assert!(!freq.contains_term(""));
        assert!(TermFrequency::from_iter(["", ""]).is_empty());
    }

    #[test]
    fn first_seen_order_is_kept() {
        let freq: TermFrequency = ["b", "a", "c", "a", "b"].into_iter().collect();
        assert_eq!(freq.term_set_ref_str(), vec!["b", "a", "c"]);
    }

    #[test]
    fn tf_is_normalized_by_length() {
        let freq: TermFrequency = ["x", "y", "x", "z"].into_iter().collect();
        assert_eq!(freq.tf("x"), 0.5);
        assert_eq!(freq.tf("y"), 0.25);
        assert_eq!(freq.tf("w"), 0.0);
    }

    #[test]
    fn empty_document_statistics() {
        let freq = TermFrequency::new();
        assert!(freq.is_empty());
        assert_eq!(freq.tf("anything"), 0.0);
        assert_eq!(freq.unique_term_ratio(), 0.0);
        assert!(freq.most_frequent_terms().is_empty());
    }

    #[test]
    fn most_frequent_terms_returns_ties() {
        let freq: TermFrequency = ["a", "b", "a", "b", "c"].into_iter().collect();
        assert_eq!(freq.most_frequent_terms(), vec![("a", 2), ("b", 2)]);
        assert_eq!(freq.unique_term_ratio(), 3.0 / 5.0);
    }
}
