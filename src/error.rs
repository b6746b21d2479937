// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal failures. Malformed table rows are not errors; the parser skips them.
#[derive(Debug, Error)]
pub enum Error {
    /// Server answered with a non-success status.
    #[error("Network error: {0}")]
    Network(String),

    /// Connection, TLS, timeout or body decode failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Required markup structure is missing.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
