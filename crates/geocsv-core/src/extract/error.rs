//! Extraction errors. Any of these aborts the whole pipeline; per-feature
//! problems are diagnostics, not errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    #[error("HTTP status code {status} for URL: {url}")]
    HttpStatus { url: String, status: u32 },
    #[error("fetch task for {url} did not complete: {source}")]
    FetchTask {
        url: String,
        #[source]
        source: tokio::task::JoinError,
    },
    #[error("error processing JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("document is null")]
    NullDocument,
    #[error("'features' is present but is not an array")]
    FeaturesNotArray,
}

/// Coarse classification used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// URL unusable, network failure, or non-2xx status.
    Transport,
    /// Body is not a usable JSON document.
    Parse,
}

impl ExtractError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ExtractError::InvalidUrl { .. }
            | ExtractError::Transport { .. }
            | ExtractError::HttpStatus { .. }
            | ExtractError::FetchTask { .. } => FailureKind::Transport,
            ExtractError::Parse(_)
            | ExtractError::NullDocument
            | ExtractError::FeaturesNotArray => FailureKind::Parse,
        }
    }
}
