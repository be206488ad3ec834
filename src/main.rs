//! Schema-Scrape main entry point
//!
//! Scrapes schema.org's full type index and each type's documented
//! properties, then writes `schema-org.json` to the working directory. All
//! inputs are hardcoded; there are no flags or configuration files.

use anyhow::Context;
use schema_scrape::scraper::{scrape, ScrapeTarget};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let target = ScrapeTarget::default();
    let output_path = target.output_path.clone();

    let outcome = scrape(target)
        .await
        .context("failed to fetch the schema.org type index")?;

    tracing::info!(
        "Scraped {} of {} types into {}",
        outcome.scraped,
        outcome.discovered,
        output_path.display()
    );

    Ok(())
}

/// Sets up the tracing subscriber, defaulting to info-level output
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("schema_scrape=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
