use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::similarity::{SimilarityAlgorithm, AVERAGE_NAME};

/// Round a score to 2 decimal places, half away from zero on the f64 value.
/// `score * 100.0` is rounded as represented, so 0.145 becomes 0.14.
#[inline]
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Verdict of one plagiarism check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlagiarismResult {
    /// score rounded to 2 decimal places
    pub similarity_score: f64,
    /// display name of the algorithm, "Average Similarity" for the mean
    pub algorithm: String,
    /// similarity_score >= threshold
    pub is_plagiarized: bool,
}

impl PlagiarismResult {
    /// `similarity_score` must already be rounded
    pub fn new(similarity_score: f64, algorithm: impl Into<String>, threshold: f64) -> Self {
        Self {
            similarity_score,
            algorithm: algorithm.into(),
            is_plagiarized: similarity_score >= threshold,
        }
    }
}

impl fmt::Display for PlagiarismResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.is_plagiarized { "plagiarized" } else { "not plagiarized" };
        write!(f, "{}: {:.2} ({})", self.algorithm, self.similarity_score, verdict)
    }
}

/// Rounded scores of every algorithm plus their average.
/// Keys are in the order Cosine, Jaccard, TF-IDF, Average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetailedResults {
    scores: IndexMap<String, f64>,
}

impl DetailedResults {
    /// Build from the three raw scores in `SimilarityAlgorithm::ALL` order.
    /// Each score is rounded, the average is the rounded mean of the rounded scores.
    pub fn from_raw(raw: [f64; 3]) -> Self {
        let mut scores = IndexMap::with_capacity(4);
        let mut sum = 0.0;
        for (algorithm, score) in SimilarityAlgorithm::ALL.iter().zip(raw) {
            let rounded = round_score(score);
            sum += rounded;
            scores.insert(algorithm.display_name().to_string(), rounded);
        }
        scores.insert(AVERAGE_NAME.to_string(), round_score(sum / 3.0));
        Self { scores }
    }

    /// Score by display name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.scores.get(name).copied()
    }

    pub fn score(&self, algorithm: SimilarityAlgorithm) -> f64 {
        self.get(algorithm.display_name()).unwrap_or(0.0)
    }

    pub fn average(&self) -> f64 {
        self.get(AVERAGE_NAME).unwrap_or(0.0)
    }

    /// `(name, score)` in presentation order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(name, &score)| (name.as_str(), score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl fmt::Display for DetailedResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // one score per line
            for (name, score) in self.iter() {
                writeln!(f, "{}: {:.2}", name, score)?;
            }
            Ok(())
        } else {
            let parts: Vec<String> = self.iter().map(|(name, score)| format!("{}: {:.2}", name, score)).collect();
            f.write_str(&parts.join(", "))
        }
    }
}
