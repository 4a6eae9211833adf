//! Error handling module
//!
//! Defines the failures a chat completion run can end with

use thiserror::Error;

/// Run error types
///
/// A non-2xx HTTP status is not an error; only transport, decoding and
/// output failures abort a run.
#[derive(Error, Debug)]
pub enum RunError {
    /// Connection, DNS, TLS, timeout or body read failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not valid JSON
    #[error("Failed to decode response body as JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Writing the outcome failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl RunError {
    /// Get error type string
    pub fn kind(&self) -> &'static str {
        match self {
            RunError::Transport(_) => "transport_error",
            RunError::Decode(_) => "decode_error",
            RunError::Output(_) => "output_error",
        }
    }
}

/// Result type alias
pub type RunResult<T> = Result<T, RunError>;
