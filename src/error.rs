//! Error handling for httpexpect

use thiserror::Error;

/// Every failure a request can record on its chain
#[derive(Error, Debug)]
pub enum ExpectError {
    #[error("unexpected nil argument for url format string:\n  Request(\"{method}\", {args}...)")]
    NilArgument { method: String, args: String },

    #[error("URL format string expects {expected} argument(s), got {given}")]
    FormatArgs { expected: usize, given: usize },

    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type alias for httpexpect operations
pub type Result<T> = std::result::Result<T, ExpectError>;
