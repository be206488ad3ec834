//! Schema-Scrape: a schema.org vocabulary scraper
//!
//! This crate scrapes the public schema.org documentation site to extract
//! the taxonomy of type names and, for each type, its documented property
//! names, then writes the result as a single pretty-printed JSON file.

pub mod output;
pub mod scraper;

use thiserror::Error;

/// Main error type for Schema-Scrape operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Schema-Scrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

// Re-export commonly used types
pub use output::SchemaEntry;
pub use scraper::{Coordinator, ScrapeOutcome, ScrapeTarget};
