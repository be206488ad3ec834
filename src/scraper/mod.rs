//! Scraper module for fetching and extracting schema.org documentation
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching
//! - HTML parsing and name extraction
//! - Sequential scrape coordination with a fixed request throttle

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{Coordinator, ScrapeOutcome, ScrapeTarget};
pub use fetcher::{build_http_client, fetch_html};
pub use parser::{extract_property_names, extract_type_names};

use crate::Result;

/// Runs a complete scrape against the given target
///
/// This is the main entry point. It will:
/// 1. Build the HTTP client
/// 2. Fetch the type index and extract the list of type names
/// 3. Scrape each type's property names, one request at a time
/// 4. Write the aggregated result as pretty-printed JSON
///
/// # Arguments
///
/// * `target` - The URLs, throttle, and output path to scrape against
///
/// # Returns
///
/// * `Ok(ScrapeOutcome)` - Scrape ran to completion (individual types may
///   still have been skipped on error; see the outcome counts)
/// * `Err(ScrapeError)` - The initial type-index fetch failed
pub async fn scrape(target: ScrapeTarget) -> Result<ScrapeOutcome> {
    let coordinator = Coordinator::new(target)?;
    coordinator.run().await
}
