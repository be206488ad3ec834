//! Scrape coordinator - main orchestration logic
//!
//! This module drives the whole scrape:
//! - Fetching and parsing the type index page
//! - Iterating the discovered types strictly sequentially, one fetch at a
//!   time, with a fixed delay between requests
//! - Absorbing per-type failures so one broken page never aborts the run
//! - Writing the JSON output file and reporting the final counts

use crate::output::{write_entries, SchemaEntry};
use crate::scraper::fetcher::{build_http_client, fetch_html};
use crate::scraper::parser::{extract_property_names, extract_type_names};
use crate::Result;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

/// Delay between consecutive type-page requests
const REQUEST_DELAY: Duration = Duration::from_millis(50);

/// The URLs, throttle, and output path a scrape runs against
///
/// `Default` yields the hardcoded production values. There are no CLI flags
/// or configuration files; the struct exists so tests can point the
/// coordinator at a mock server.
#[derive(Debug, Clone)]
pub struct ScrapeTarget {
    /// URL of the full type index page
    pub index_url: String,

    /// Base URL per-type pages hang off of; the discovered type name is
    /// appended raw, without additional escaping
    pub page_base_url: String,

    /// Pause between consecutive per-type requests
    pub request_delay: Duration,

    /// Where the JSON document is written; overwritten if it exists
    pub output_path: PathBuf,
}

impl Default for ScrapeTarget {
    fn default() -> Self {
        Self {
            index_url: "https://schema.org/docs/full.html".to_string(),
            page_base_url: "https://schema.org".to_string(),
            request_delay: REQUEST_DELAY,
            output_path: PathBuf::from("schema-org.json"),
        }
    }
}

/// Summary of a completed scrape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeOutcome {
    /// Number of type names discovered on the index page
    pub discovered: usize,

    /// Number of types whose properties were scraped successfully
    pub scraped: usize,

    /// Whether the output file was written
    pub wrote_output: bool,
}

/// Main scrape coordinator structure
pub struct Coordinator {
    target: ScrapeTarget,
    client: Client,
}

impl Coordinator {
    /// Creates a coordinator for the given target
    pub fn new(target: ScrapeTarget) -> Result<Self> {
        let client = build_http_client()?;
        Ok(Self { target, client })
    }

    /// Runs the scrape to completion
    ///
    /// # Failure semantics
    ///
    /// * A failure fetching the type index propagates out and ends the run.
    /// * A failure on an individual type page is logged and absorbed; that
    ///   type is omitted from the output, never recorded as an empty entry.
    /// * A failure writing the output file is logged and absorbed; the
    ///   in-memory results are unaffected and the final count check still
    ///   runs.
    pub async fn run(&self) -> Result<ScrapeOutcome> {
        tracing::info!("Scraping schema.org types...");
        let index_html = fetch_html(&self.client, &self.target.index_url).await?;
        let types = extract_type_names(&index_html);
        tracing::info!("Discovered {} schema.org types", types.len());

        let mut entries: Vec<SchemaEntry> = Vec::new();

        for type_name in &types {
            tracing::info!(
                "({}) Scraping schema.org properties for {}...",
                entries.len(),
                type_name
            );

            match self.scrape_properties(type_name).await {
                Ok(properties) => entries.push(SchemaEntry {
                    type_name: type_name.clone(),
                    properties,
                }),
                Err(e) => {
                    tracing::error!("Failed to scrape properties for {}: {}", type_name, e);
                }
            }

            // Throttle regardless of outcome.
            tokio::time::sleep(self.target.request_delay).await;
        }

        let wrote_output = match write_entries(&self.target.output_path, &entries) {
            Ok(()) => {
                tracing::info!("Finished scraping schema.org types");
                true
            }
            Err(e) => {
                tracing::error!(
                    "Failed to write {}: {}",
                    self.target.output_path.display(),
                    e
                );
                false
            }
        };

        // Diagnostic only; a mismatch means some types were dropped on error.
        if types.len() != entries.len() {
            tracing::error!(
                "Expected {} schema.org types but got {}",
                types.len(),
                entries.len()
            );
        }

        Ok(ScrapeOutcome {
            discovered: types.len(),
            scraped: entries.len(),
            wrote_output,
        })
    }

    /// Fetches a single type's documentation page and extracts its property
    /// names
    ///
    /// Fetch errors propagate to the caller; they are handled at the loop
    /// boundary in [`run`](Self::run).
    async fn scrape_properties(&self, type_name: &str) -> Result<Vec<String>> {
        let url = format!("{}/{}", self.target.page_base_url, type_name);
        let html = fetch_html(&self.client, &url).await?;
        Ok(extract_property_names(&html))
    }
}
