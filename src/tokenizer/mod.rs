pub mod stop_words;

use serde::{Deserialize, Serialize};

use crate::tokenizer::stop_words::StopWords;

/// Normalization settings applied while tokenizing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizeOptions {
    /// keep the original case of tokens
    pub case_sensitive: bool,
    /// tokens removed after case folding
    pub stop_words: StopWords,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            stop_words: StopWords::english(),
        }
    }
}

impl TokenizeOptions {
    pub fn new(case_sensitive: bool, stop_words: StopWords) -> Self {
        Self { case_sensitive, stop_words }
    }
}

/// Turns raw text into a token sequence.
///
/// Implemented for [`DefaultTokenizer`] and for any
/// `Fn(&str, &TokenizeOptions) -> Vec<String>`.
pub trait Tokenizer {
    fn tokenize(&self, text: &str, options: &TokenizeOptions) -> Vec<String>;
}

/// Preprocessing path used only by TF-IDF similarity.
///
/// Implemented for [`DefaultPreprocessor`] and for any
/// `Fn(&str, &TokenizeOptions) -> Vec<String>`.
pub trait Preprocessor {
    fn preprocess(&self, text: &str, options: &TokenizeOptions) -> Vec<String>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str, &TokenizeOptions) -> Vec<String>,
{
    fn tokenize(&self, text: &str, options: &TokenizeOptions) -> Vec<String> {
        self(text, options)
    }
}

impl<F> Preprocessor for F
where
    F: Fn(&str, &TokenizeOptions) -> Vec<String>,
{
    fn preprocess(&self, text: &str, options: &TokenizeOptions) -> Vec<String> {
        self(text, options)
    }
}

/// Built-in tokenizer
///
/// - every non-alphanumeric character separates tokens and is dropped
/// - tokens are lower-cased unless `case_sensitive`
/// - tokens in the stop-word set are removed (exact match after case folding)
///
/// No stemming.
///
/// # Examples
/// ```
/// use plagiarism_checker::{DefaultTokenizer, TokenizeOptions, Tokenizer};
/// let tokens = DefaultTokenizer.tokenize("The quick, brown fox!", &TokenizeOptions::default());
/// assert_eq!(tokens, vec!["quick", "brown", "fox"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTokenizer;

impl Tokenizer for DefaultTokenizer {
    fn tokenize(&self, text: &str, options: &TokenizeOptions) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|piece| !piece.is_empty())
            .map(|piece| {
                if options.case_sensitive {
                    piece.to_string()
                } else {
                    piece.to_lowercase()
                }
            })
            .filter(|token| !options.stop_words.contains(token))
            .collect()
    }
}

/// Built-in TF-IDF preprocessor
/// Applies the same normalization rules as [`DefaultTokenizer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPreprocessor;

impl Preprocessor for DefaultPreprocessor {
    fn preprocess(&self, text: &str, options: &TokenizeOptions) -> Vec<String> {
        DefaultTokenizer.tokenize(text, options)
    }
}
