// src/error.rs

//! Unified error handling for the crawler application.
//!
//! Upstream unavailability is never an error: unreachable hosts and
//! unparseable pages are absorbed inside the fetch/source layers and
//! surface as empty results. `AppError` is reserved for caller-input
//! and configuration defects.

use thiserror::Error;

/// Result type alias for crawler operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client construction failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Caller passed a conference code outside the recognized set
    #[error("Unknown conference '{0}' (expected one of: sp, ccs, usenix, ndss)")]
    InvalidConference(String),

    /// Caller passed a year outside the plausible range
    #[error("Invalid year {0} (expected {1}..={2})")]
    InvalidYear(u16, u16, u16),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
