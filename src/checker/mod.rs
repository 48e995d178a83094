pub mod result;

use std::borrow::Cow;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    checker::result::{round_score, DetailedResults, PlagiarismResult},
    config::{CheckerConfig, DEFAULT_THRESHOLD},
    error::{validate_threshold, CheckerError, Result},
    similarity::{cosine, jaccard, tfidf, Algorithm, SimilarityAlgorithm},
    tokenizer::{stop_words::StopWords, DefaultPreprocessor, DefaultTokenizer, Preprocessor, TokenizeOptions, Tokenizer},
    vectorizer::PairVectorizer,
};

/// Per-call options of [`PlagiarismChecker::check_plagiarism`]
///
/// `case_sensitive` and `custom_stop_words` override the checker's
/// configuration for this call only; `None` keeps the configured value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckOptions {
    pub algorithm: Algorithm,
    pub threshold: f64,
    pub case_sensitive: Option<bool>,
    pub custom_stop_words: Option<Vec<String>>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Average,
            threshold: DEFAULT_THRESHOLD,
            case_sensitive: None,
            custom_stop_words: None,
        }
    }
}

impl CheckOptions {
    pub fn new(algorithm: Algorithm, threshold: f64) -> Self {
        Self { algorithm, threshold, ..Default::default() }
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    /// Replace the stop-word list for this call
    pub fn custom_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_stop_words = Some(words.into_iter().map(Into::into).collect());
        self
    }
}

/// Plagiarism checker
/// Compares two texts with cosine, Jaccard or TF-IDF similarity (or their mean)
/// and turns the score into a verdict against a threshold.
///
/// `PlagiarismChecker<T, P>` has the following generic parameters:
/// - `T`: tokenizer used by cosine and Jaccard (default `DefaultTokenizer`)
/// - `P`: preprocessor used by TF-IDF (default `DefaultPreprocessor`)
///
/// The checker only holds immutable configuration; every call builds and
/// drops its own vocabulary, so one instance can be shared between threads.
///
/// # Examples
/// ```
/// use plagiarism_checker::{CheckOptions, PlagiarismChecker};
/// let checker = PlagiarismChecker::new();
/// let result = checker
///     .check_plagiarism(
///         "The quick brown fox jumps over the lazy dog.",
///         "A quick brown fox jumps over the lazy dog.",
///         &CheckOptions::default(),
///     )
///     .unwrap();
/// assert!(result.is_plagiarized);
/// ```
#[derive(Debug, Clone)]
pub struct PlagiarismChecker<T = DefaultTokenizer, P = DefaultPreprocessor> {
    tokenizer: T,
    preprocessor: P,
    options: TokenizeOptions,
    threshold: f64,
    algorithm: Algorithm,
}

impl PlagiarismChecker {
    /// Case-insensitive, English stop words, Average at threshold 0.7
    pub fn new() -> Self {
        Self {
            tokenizer: DefaultTokenizer,
            preprocessor: DefaultPreprocessor,
            options: TokenizeOptions::default(),
            threshold: DEFAULT_THRESHOLD,
            algorithm: Algorithm::Average,
        }
    }

    /// Create a checker from a validated configuration
    pub fn from_config(config: CheckerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tokenizer: DefaultTokenizer,
            preprocessor: DefaultPreprocessor,
            options: config.tokenize_options(),
            threshold: config.threshold,
            algorithm: config.algorithm,
        })
    }
}

impl Default for PlagiarismChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> PlagiarismChecker<T, P> {
    /// Replace the tokenizer used by cosine and Jaccard
    pub fn with_tokenizer<T2>(self, tokenizer: T2) -> PlagiarismChecker<T2, P> {
        PlagiarismChecker {
            tokenizer,
            preprocessor: self.preprocessor,
            options: self.options,
            threshold: self.threshold,
            algorithm: self.algorithm,
        }
    }

    /// Replace the preprocessor used by TF-IDF
    pub fn with_preprocessor<P2>(self, preprocessor: P2) -> PlagiarismChecker<T, P2> {
        PlagiarismChecker {
            tokenizer: self.tokenizer,
            preprocessor,
            options: self.options,
            threshold: self.threshold,
            algorithm: self.algorithm,
        }
    }

    /// Construction-time tokenizer settings
    pub fn tokenize_options(&self) -> &TokenizeOptions {
        &self.options
    }

    /// Options of `check`: configured algorithm and threshold, no overrides
    pub fn default_check_options(&self) -> CheckOptions {
        CheckOptions::new(self.algorithm, self.threshold)
    }

    /// Configured options with the per-call overrides applied
    fn resolve_options<'a>(&'a self, options: &CheckOptions) -> Cow<'a, TokenizeOptions> {
        if options.case_sensitive.is_none() && options.custom_stop_words.is_none() {
            return Cow::Borrowed(&self.options);
        }
        Cow::Owned(TokenizeOptions {
            case_sensitive: options.case_sensitive.unwrap_or(self.options.case_sensitive),
            stop_words: match &options.custom_stop_words {
                Some(words) => StopWords::custom(words.iter().cloned()),
                None => self.options.stop_words.clone(),
            },
        })
    }
}

impl<T, P> PlagiarismChecker<T, P>
where
    T: Tokenizer,
    P: Preprocessor,
{
    /// Raw, unrounded score of one algorithm under the configured settings
    pub fn score(&self, algorithm: SimilarityAlgorithm, text1: &str, text2: &str) -> f64 {
        algorithm.calculate(text1, text2, &self.tokenizer, &self.preprocessor, &self.options)
    }

    /// Raw scores of all three algorithms, `SimilarityAlgorithm::ALL` order
    fn all_scores(&self, text1: &str, text2: &str, options: &TokenizeOptions) -> [f64; 3] {
        let tokens_a = self.tokenizer.tokenize(text1, options);
        let tokens_b = self.tokenizer.tokenize(text2, options);
        let processed_a = self.preprocessor.preprocess(text1, options);
        let processed_b = self.preprocessor.preprocess(text2, options);
        [
            cosine::calculate(&tokens_a, &tokens_b),
            jaccard::calculate(&tokens_a, &tokens_b),
            tfidf::calculate(&processed_a, &processed_b),
        ]
    }

    /// Check two texts for plagiarism
    ///
    /// # Arguments
    /// * `text1`, `text2` - documents to compare, empty strings are valid
    /// * `options` - algorithm, threshold and per-call tokenizer overrides
    ///
    /// # Returns
    /// * `PlagiarismResult` - score rounded to 2 decimal places, verdict `score >= threshold`
    ///
    /// # Errors
    /// * `CheckerError::InvalidThreshold` - threshold NaN or outside [0.0, 1.0]
    pub fn check_plagiarism(&self, text1: &str, text2: &str, options: &CheckOptions) -> Result<PlagiarismResult> {
        let threshold = match validate_threshold(options.threshold) {
            Ok(threshold) => threshold,
            Err(err) => {
                warn!(threshold = options.threshold, "rejected plagiarism check");
                return Err(err);
            }
        };
        let tokenize_options = self.resolve_options(options);

        let raw = match options.algorithm.single() {
            Some(algorithm) => algorithm.calculate(text1, text2, &self.tokenizer, &self.preprocessor, &tokenize_options),
            None => {
                let scores = self.all_scores(text1, text2, &tokenize_options);
                scores.iter().sum::<f64>() / scores.len() as f64
            }
        };
        let result = PlagiarismResult::new(round_score(raw), options.algorithm.display_name(), threshold);
        debug!(
            algorithm = %options.algorithm,
            raw_score = raw,
            score = result.similarity_score,
            threshold,
            plagiarized = result.is_plagiarized,
            "plagiarism check"
        );
        Ok(result)
    }

    /// `check_plagiarism` with the configured algorithm and threshold
    pub fn check(&self, text1: &str, text2: &str) -> Result<PlagiarismResult> {
        self.check_plagiarism(text1, text2, &self.default_check_options())
    }

    /// Rounded scores of every algorithm and their average
    ///
    /// Always computes all three algorithms with the construction-time
    /// tokenizer settings; there are no per-call overrides here.
    pub fn get_detailed_results(&self, text1: &str, text2: &str) -> DetailedResults {
        let detailed = DetailedResults::from_raw(self.all_scores(text1, text2, &self.options));
        debug!(average = detailed.average(), "detailed similarity results");
        detailed
    }

    /// Terms both texts share under the configured settings, first-seen order
    pub fn shared_terms(&self, text1: &str, text2: &str) -> Vec<String> {
        let tokens_a = self.tokenizer.tokenize(text1, &self.options);
        let tokens_b = self.tokenizer.tokenize(text2, &self.options);
        PairVectorizer::new(&tokens_a, &tokens_b)
            .shared_terms()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

impl<T, P> PlagiarismChecker<T, P>
where
    T: Tokenizer + Sync,
    P: Preprocessor + Sync,
{
    /// Check independent text pairs in parallel
    /// Results keep the order of `pairs`.
    pub fn check_pairs<A, B>(&self, pairs: &[(A, B)], options: &CheckOptions) -> Vec<Result<PlagiarismResult>>
    where
        A: AsRef<str> + Sync,
        B: AsRef<str> + Sync,
    {
        if let Err(err) = validate_threshold(options.threshold) {
            warn!(threshold = options.threshold, pairs = pairs.len(), "rejected batch plagiarism check");
            return pairs.iter().map(|_| Err::<PlagiarismResult, CheckerError>(err.clone())).collect();
        }
        pairs
            .par_iter()
            .map(|(a, b)| self.check_plagiarism(a.as_ref(), b.as_ref(), options))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX_THE: &str = "The quick brown fox jumps over the lazy dog.";
    const FOX_A: &str = "A quick brown fox jumps over the lazy dog.";

    #[test]
    fn fox_scenario_is_plagiarized() {
        let checker = PlagiarismChecker::new();
        let result = checker.check_plagiarism(FOX_THE, FOX_A, &CheckOptions::default()).unwrap();
        assert_eq!(result.algorithm, "Average Similarity");
        assert!(result.is_plagiarized);

        let jaccard = checker
            .check_plagiarism(FOX_THE, FOX_A, &CheckOptions::new(Algorithm::Jaccard, 0.7))
            .unwrap();
        assert!(jaccard.similarity_score >= 0.8);
        assert_eq!(jaccard.algorithm, "Jaccard Similarity");
    }

    #[test]
    fn disjoint_texts_are_not_plagiarized() {
        let checker = PlagiarismChecker::new();
        for algorithm in [Algorithm::Cosine, Algorithm::Jaccard, Algorithm::TfIdf, Algorithm::Average] {
            let result = checker
                .check_plagiarism("apple banana cherry", "rocket engine fuel", &CheckOptions::new(algorithm, 0.7))
                .unwrap();
            assert_eq!(result.similarity_score, 0.0, "{algorithm}");
            assert!(!result.is_plagiarized);
        }
    }

    #[test]
    fn invalid_threshold_is_rejected() {
        let checker = PlagiarismChecker::new();
        for threshold in [-0.01, 1.01, f64::NAN] {
            let err = checker
                .check_plagiarism("a", "b", &CheckOptions::default().threshold(threshold))
                .unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        let checker = PlagiarismChecker::new();
        // {cat, sat} vs {cat, ran}: Jaccard 1/3 -> 0.33
        let options = CheckOptions::new(Algorithm::Jaccard, 0.33);
        let result = checker.check_plagiarism("cat sat", "cat ran", &options).unwrap();
        assert_eq!(result.similarity_score, 0.33);
        assert!(result.is_plagiarized);
        let result = checker.check_plagiarism("cat sat", "cat ran", &options.threshold(0.34)).unwrap();
        assert!(!result.is_plagiarized);
    }

    #[test]
    fn per_call_overrides_apply_to_check_only() {
        let checker = PlagiarismChecker::new();
        // case-insensitive by default: identical
        let base = checker
            .check_plagiarism("Rust Code", "rust code", &CheckOptions::new(Algorithm::Jaccard, 0.7))
            .unwrap();
        assert_eq!(base.similarity_score, 1.0);

        let sensitive = checker
            .check_plagiarism("Rust Code", "rust code", &CheckOptions::new(Algorithm::Jaccard, 0.7).case_sensitive(true))
            .unwrap();
        assert_eq!(sensitive.similarity_score, 0.0);

        // detailed results keep the construction-time settings
        let detailed = checker.get_detailed_results("Rust Code", "rust code");
        assert_eq!(detailed.score(SimilarityAlgorithm::Jaccard), 1.0);
    }

    #[test]
    fn custom_stop_words_replace_default_per_call() {
        let checker = PlagiarismChecker::new();
        // with the default list "the" is dropped, leaving {cat} vs {dog}
        let base = checker
            .check_plagiarism("the cat", "the dog", &CheckOptions::new(Algorithm::Jaccard, 0.7))
            .unwrap();
        assert_eq!(base.similarity_score, 0.0);

        // a custom list without "the" keeps it: {the, cat} vs {the, dog}
        let custom = checker
            .check_plagiarism(
                "the cat",
                "the dog",
                &CheckOptions::new(Algorithm::Jaccard, 0.7).custom_stop_words(["a"]),
            )
            .unwrap();
        assert_eq!(custom.similarity_score, 0.33);
    }

    #[test]
    fn from_config_applies_settings() {
        let config = CheckerConfig {
            case_sensitive: true,
            stop_words: Some(Vec::new()),
            threshold: 0.5,
            algorithm: Algorithm::Cosine,
        };
        let checker = PlagiarismChecker::from_config(config).unwrap();
        assert!(checker.tokenize_options().case_sensitive);
        assert!(checker.tokenize_options().stop_words.is_empty());

        let result = checker.check("The cat", "the cat").unwrap();
        assert_eq!(result.algorithm, "Cosine Similarity");
        // {The, cat} vs {the, cat}: 1 / 2
        assert_eq!(result.similarity_score, 0.5);
        assert!(result.is_plagiarized);

        let detailed = checker.get_detailed_results("The cat", "the cat");
        assert_eq!(detailed.score(SimilarityAlgorithm::Jaccard), 0.33);
    }

    #[test]
    fn from_config_rejects_invalid_threshold() {
        let config = CheckerConfig { threshold: 2.0, ..Default::default() };
        assert_eq!(PlagiarismChecker::from_config(config).unwrap_err(), CheckerError::InvalidThreshold(2.0));
    }

    #[test]
    fn average_check_rounds_the_raw_mean() {
        let checker = PlagiarismChecker::new();
        let text1 = "alpha beta gamma delta";
        let text2 = "alpha beta epsilon";
        let raw: f64 = SimilarityAlgorithm::ALL
            .iter()
            .map(|a| checker.score(*a, text1, text2))
            .sum::<f64>()
            / 3.0;
        let result = checker.check_plagiarism(text1, text2, &CheckOptions::default()).unwrap();
        assert_eq!(result.similarity_score, round_score(raw));
    }

    #[test]
    fn injected_tokenizer_is_used() {
        // whole-text tokens: any difference is a mismatch
        let whole = |text: &str, _: &TokenizeOptions| -> Vec<String> {
            if text.is_empty() { Vec::new() } else { vec![text.to_string()] }
        };
        let checker = PlagiarismChecker::new().with_tokenizer(whole);
        assert_eq!(checker.score(SimilarityAlgorithm::Jaccard, "a b", "a  b"), 0.0);
        // TF-IDF still uses the default preprocessor
        assert!((checker.score(SimilarityAlgorithm::TfIdf, "a b", "a  b") - 1.0).abs() < 1e-12);

        let upper = |text: &str, _: &TokenizeOptions| -> Vec<String> {
            text.split_whitespace().map(str::to_uppercase).collect()
        };
        let checker = checker.with_preprocessor(upper);
        assert!((checker.score(SimilarityAlgorithm::TfIdf, "the cat", "THE CAT") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn injected_tokenizer_empty_tokens_score_zero() {
        // "".split(' ') yields a single empty token
        let split_space = |text: &str, _: &TokenizeOptions| -> Vec<String> {
            text.split(' ').map(str::to_string).collect()
        };
        let checker = PlagiarismChecker::new()
            .with_tokenizer(split_space)
            .with_preprocessor(split_space);
        for algorithm in SimilarityAlgorithm::ALL {
            assert_eq!(checker.score(algorithm, "", ""), 0.0, "{algorithm}");
            // doubled separators produce empty tokens between words
            assert_eq!(checker.score(algorithm, "  ", "apple"), 0.0, "{algorithm}");
        }
        let detailed = checker.get_detailed_results("", "");
        assert_eq!(detailed.average(), 0.0);
        assert!(checker.shared_terms("a  b", "c  d").is_empty());
        let result = checker.check("", "").unwrap();
        assert!(!result.is_plagiarized);
    }

    #[test]
    fn shared_terms_lists_overlap() {
        let checker = PlagiarismChecker::new();
        assert_eq!(
            checker.shared_terms(FOX_THE, "The lazy dog sleeps while the fox waits"),
            vec!["fox", "lazy", "dog"]
        );
    }

    #[test]
    fn check_pairs_keeps_order() {
        let checker = PlagiarismChecker::new();
        let pairs = vec![
            (FOX_THE, FOX_A),
            ("apple banana cherry", "rocket engine fuel"),
            ("", ""),
        ];
        let results = checker.check_pairs(&pairs, &CheckOptions::default());
        assert_eq!(results.len(), 3);
        assert!(results[0].as_ref().unwrap().is_plagiarized);
        assert_eq!(results[1].as_ref().unwrap().similarity_score, 0.0);
        assert_eq!(results[2].as_ref().unwrap().similarity_score, 0.0);

        let rejected = checker.check_pairs(&pairs, &CheckOptions::default().threshold(7.0));
        assert!(rejected.iter().all(|r| r.is_err()));
    }
}
