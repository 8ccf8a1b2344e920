//! Error types for the complaint analysis client.

use thiserror::Error;

/// Result type for analysis client operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors from the remote analysis path.
///
/// These never escape [`AnalysisClient::analyze`](crate::AnalysisClient::analyze) —
/// any of them selects the built-in local analyzer instead.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Configuration error (invalid endpoint or timeout settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, DNS failure, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response from the AI service)
    #[error("API error: {0}")]
    Api(String),

    /// Parse error (non-JSON body, missing or wrong-typed fields)
    #[error("Parse error: {0}")]
    Parse(String),
}
