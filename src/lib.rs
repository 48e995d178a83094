//! This crate is a text similarity engine for plagiarism detection.
pub mod checker;
pub mod config;
pub mod error;
pub mod similarity;
pub mod tokenizer;
pub mod utils;
pub mod vectorizer;

/// Plagiarism Checker
/// The top-level struct of this crate.
/// It compares two texts and turns a similarity score into a plagiarism verdict.
///
/// Two entry points:
/// - `check_plagiarism`: one algorithm (or the average of all three) against a threshold
/// - `get_detailed_results`: every algorithm plus their average, rounded
///
/// `PlagiarismChecker<T, P>` has the following generic parameters:
/// - `T`: Tokenizer for cosine and Jaccard (e.g., DefaultTokenizer, a closure)
/// - `P`: Preprocessor for TF-IDF (e.g., DefaultPreprocessor, a closure)
///
/// Configuration (case sensitivity, stop words, default threshold and algorithm)
/// is fixed at construction time, see `CheckerConfig`.
///
/// # Thread Safety
/// The checker holds no mutable state. Each comparison builds its own
/// vocabulary and frequency maps and drops them before returning.
pub use checker::PlagiarismChecker;

/// Per-call options of `check_plagiarism`
/// algorithm, threshold and optional tokenizer overrides.
pub use checker::CheckOptions;

/// Result structures
/// - `PlagiarismResult`: rounded score, algorithm name and verdict of one check
/// - `DetailedResults`: rounded scores keyed by algorithm display name, in the
///   order Cosine, Jaccard, TF-IDF, Average
pub use checker::result::{DetailedResults, PlagiarismResult};

/// Checker configuration
/// Serializable, every field has a default.
pub use config::CheckerConfig;

/// Error type and result alias
pub use error::{CheckerError, Result};

/// Similarity Algorithms
/// - `SimilarityAlgorithm`: Cosine, Jaccard, TfIdf
/// - `Algorithm`: selection of a check, one of the above or Average
pub use similarity::{Algorithm, SimilarityAlgorithm};

/// Tokenizer and Preprocessor
/// Text normalization: splitting on non-alphanumeric characters, case folding
/// and stop-word removal.
/// Both are traits so the checker can take custom implementations.
pub use tokenizer::{DefaultPreprocessor, DefaultTokenizer, Preprocessor, TokenizeOptions, Tokenizer};

/// Stop-word set
/// The built-in English list or a caller-supplied replacement.
pub use tokenizer::stop_words::StopWords;

/// Term Frequency structure
/// Counts term occurrences within one document.
/// Used as base data for raw count vectors and TF.
pub use vectorizer::term::TermFrequency;

/// Corpus
/// Vocabulary of the compared documents with the number of documents
/// containing each term.
/// It is used as the base data for IDF (Inverse Document Frequency) calculation.
pub use vectorizer::corpus::Corpus;

/// Frequency and vocabulary statistics of a document pair
pub use vectorizer::PairVectorizer;

/// TF IDF Calculation Engine Trait
/// A trait that defines the weighting of a TF-IDF vector.
///
/// By implementing this trait, you can plug different TF-IDF weighting
/// strategies into `PairVectorizer::tfidf_vectors`.
/// `DefaultTFIDFEngine` uses length-normalized TF and smoothed IDF.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};
