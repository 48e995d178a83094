use serde::{Deserialize, Serialize};

use crate::{
    error::{validate_threshold, Result},
    similarity::Algorithm,
    tokenizer::{stop_words::StopWords, TokenizeOptions},
};

/// Default plagiarism threshold
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Construction-time configuration of a [`PlagiarismChecker`](crate::PlagiarismChecker).
///
/// Every field has a default, so partial documents deserialize:
/// ```
/// use plagiarism_checker::{Algorithm, CheckerConfig};
/// let config: CheckerConfig = serde_json::from_str(r#"{ "algorithm": "jaccard" }"#).unwrap();
/// assert_eq!(config.algorithm, Algorithm::Jaccard);
/// assert_eq!(config.threshold, 0.7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// keep token case
    pub case_sensitive: bool,
    /// replacement stop-word list, `None` uses the built-in English list
    pub stop_words: Option<Vec<String>>,
    /// default threshold of `check`
    pub threshold: f64,
    /// default algorithm of `check`
    pub algorithm: Algorithm,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            stop_words: None,
            threshold: DEFAULT_THRESHOLD,
            algorithm: Algorithm::Average,
        }
    }
}

impl CheckerConfig {
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.threshold)?;
        Ok(())
    }

    /// Tokenizer settings derived from this configuration
    pub fn tokenize_options(&self) -> TokenizeOptions {
        TokenizeOptions {
            case_sensitive: self.case_sensitive,
            stop_words: StopWords::from_option(self.stop_words.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckerError;

    #[test]
    fn defaults() {
        let config = CheckerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tokenize_options(), TokenizeOptions::default());
    }

    #[test]
    fn invalid_threshold_is_rejected() {
        let config = CheckerConfig { threshold: 1.5, ..Default::default() };
        assert_eq!(config.validate(), Err(CheckerError::InvalidThreshold(1.5)));
    }

    #[test]
    fn custom_stop_words_flow_into_options() {
        let config = CheckerConfig {
            case_sensitive: true,
            stop_words: Some(vec!["foo".into()]),
            ..Default::default()
        };
        let opts = config.tokenize_options();
        assert!(opts.case_sensitive);
        assert_eq!(opts.stop_words, StopWords::custom(["foo"]));
    }

    #[test]
    fn deserialize_rejects_unknown_algorithm() {
        let parsed: std::result::Result<CheckerConfig, _> = serde_json::from_str(r#"{ "algorithm": "bm25" }"#);
        assert!(parsed.is_err());
        let parsed: CheckerConfig = serde_json::from_str(r#"{ "algorithm": "tf-idf", "stop_words": [] }"#).unwrap();
        assert_eq!(parsed.algorithm, Algorithm::TfIdf);
        assert!(parsed.tokenize_options().stop_words.is_empty());
    }
}
