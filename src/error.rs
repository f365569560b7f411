//! Label Similarity Error Types
//!
//! Scoring itself never fails; these cover configuration and CLI input.

use thiserror::Error;

/// Central error type for label-similarity
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Threshold {0} is outside [0.0, 1.0]")]
    InvalidThreshold(f64),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for label-similarity operations
pub type SimResult<T> = Result<T, SimError>;

/// Reject thresholds outside `[0.0, 1.0]` (NaN included)
pub fn check_threshold(threshold: f64) -> SimResult<f64> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(SimError::InvalidThreshold(threshold))
    }
}
