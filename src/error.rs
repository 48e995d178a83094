use thiserror::Error;

/// Caller-contract violations rejected at the checker boundary.
/// Scoring itself never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CheckerError {
    #[error("invalid threshold {0}: must be a number in [0.0, 1.0]")]
    InvalidThreshold(f64),
    #[error("invalid algorithm {0:?}: expected one of cosine, jaccard, tfidf, average")]
    InvalidAlgorithm(String),
}

impl CheckerError {
    /// Both variants are invalid-argument errors
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CheckerError::InvalidThreshold(_) | CheckerError::InvalidAlgorithm(_))
    }
}

pub type Result<T> = std::result::Result<T, CheckerError>;

/// Reject thresholds that are NaN or outside [0.0, 1.0]
pub fn validate_threshold(threshold: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(CheckerError::InvalidThreshold(threshold))
    }
}
