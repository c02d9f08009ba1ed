// src/core/error.rs

use thiserror::Error;

/// Everything that can go wrong between the input box and a parsed report.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("a URL is required")]
    EmptyUrl,

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid scan endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("could not reach the scan service: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("scan service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed scan report: {0}")]
    Schema(String),
}
