pub mod cosine;
pub mod jaccard;
pub mod tfidf;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::CheckerError,
    tokenizer::{Preprocessor, TokenizeOptions, Tokenizer},
};

/// Display name of the averaged score
pub const AVERAGE_NAME: &str = "Average Similarity";

/// The three similarity strategies
///
/// - Cosine: angle between raw term-count vectors
/// - Jaccard: overlap of distinct-token sets
/// - TfIdf: angle between TF-IDF weighted vectors
///
/// Every strategy returns a score in [0.0, 1.0] and 0.0 when there is
/// nothing to compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityAlgorithm {
    Cosine,
    Jaccard,
    #[serde(alias = "tf-idf", alias = "tf_idf")]
    TfIdf,
}

impl SimilarityAlgorithm {
    /// All strategies in presentation order
    pub const ALL: [SimilarityAlgorithm; 3] = [
        SimilarityAlgorithm::Cosine,
        SimilarityAlgorithm::Jaccard,
        SimilarityAlgorithm::TfIdf,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SimilarityAlgorithm::Cosine => "Cosine Similarity",
            SimilarityAlgorithm::Jaccard => "Jaccard Similarity",
            SimilarityAlgorithm::TfIdf => "TF-IDF Similarity",
        }
    }

    /// Score two texts
    /// Cosine and Jaccard read the tokenizer output, TF-IDF reads the preprocessor output.
    pub fn calculate<T, P>(
        &self,
        text1: &str,
        text2: &str,
        tokenizer: &T,
        preprocessor: &P,
        options: &TokenizeOptions,
    ) -> f64
    where
        T: Tokenizer + ?Sized,
        P: Preprocessor + ?Sized,
    {
        match self {
            SimilarityAlgorithm::Cosine => {
                cosine::calculate(&tokenizer.tokenize(text1, options), &tokenizer.tokenize(text2, options))
            }
            SimilarityAlgorithm::Jaccard => {
                jaccard::calculate(&tokenizer.tokenize(text1, options), &tokenizer.tokenize(text2, options))
            }
            SimilarityAlgorithm::TfIdf => {
                tfidf::calculate(&preprocessor.preprocess(text1, options), &preprocessor.preprocess(text2, options))
            }
        }
    }
}

impl fmt::Display for SimilarityAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Algorithm selection of a plagiarism check:
/// one strategy, or the arithmetic mean of all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Cosine,
    Jaccard,
    #[serde(alias = "tf-idf", alias = "tf_idf")]
    TfIdf,
    #[default]
    #[serde(alias = "avg")]
    Average,
}

impl Algorithm {
    /// The single strategy, `None` for `Average`
    pub fn single(&self) -> Option<SimilarityAlgorithm> {
        match self {
            Algorithm::Cosine => Some(SimilarityAlgorithm::Cosine),
            Algorithm::Jaccard => Some(SimilarityAlgorithm::Jaccard),
            Algorithm::TfIdf => Some(SimilarityAlgorithm::TfIdf),
            Algorithm::Average => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self.single() {
            Some(algorithm) => algorithm.display_name(),
            None => AVERAGE_NAME,
        }
    }
}

impl From<SimilarityAlgorithm> for Algorithm {
    fn from(algorithm: SimilarityAlgorithm) -> Self {
        match algorithm {
            SimilarityAlgorithm::Cosine => Algorithm::Cosine,
            SimilarityAlgorithm::Jaccard => Algorithm::Jaccard,
            SimilarityAlgorithm::TfIdf => Algorithm::TfIdf,
        }
    }
}

impl FromStr for Algorithm {
    type Err = CheckerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cosine" => Ok(Algorithm::Cosine),
            "jaccard" => Ok(Algorithm::Jaccard),
            "tfidf" | "tf-idf" | "tf_idf" => Ok(Algorithm::TfIdf),
            "average" | "avg" => Ok(Algorithm::Average),
            _ => Err(CheckerError::InvalidAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
