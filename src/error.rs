// src/error.rs
// =============================================================================
// Error kinds shared by the fetcher, the scrapers and the site renderer.
//
// The crawl driver and main() work with anyhow::Result and add context;
// everything below it returns these typed errors so callers can tell a
// network failure apart from a local filesystem problem.
// =============================================================================

use std::path::PathBuf;

use thiserror::Error;

use crate::fetch::TransportError;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Network or protocol failure that survived every retry
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Reading or writing a cache entry failed. Never retried.
    #[error("Cache I/O error at {}: {source}", .path.display())]
    CacheIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A selector that must match exactly one element matched `matched`
    #[error("Selector '{selector}' matched {matched} elements, expected exactly 1")]
    ContentShape { selector: String, matched: usize },

    #[error("Invalid CSS selector: {0}")]
    InvalidSelector(String),

    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn cache_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::CacheIo {
            path: path.into(),
            source,
        }
    }
}
