use thiserror::Error;

/// Fallback shown when a rejected request carries no `error` string.
pub const REJECTION_FALLBACK: &str = "Prediction failed.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictorError {
    #[error("Initialization Error: required element #{0} is missing from the page")]
    MissingElement(String),

    /// Non-2xx response. Holds the server's error text (or the fallback).
    #[error("Error: {0}")]
    Rejected(String),

    /// The request never produced a readable response. `detail` is for
    /// diagnostics only and never shown to the user.
    #[error("A network error occurred. Please try again.")]
    Transport { detail: String },

    #[error("Config error: {0}")]
    Config(String),
}

impl PredictorError {
    pub fn rejected(message: Option<String>) -> Self {
        PredictorError::Rejected(message.unwrap_or_else(|| REJECTION_FALLBACK.to_string()))
    }

    pub fn transport(detail: impl Into<String>) -> Self {
        PredictorError::Transport {
            detail: detail.into(),
        }
    }
}
