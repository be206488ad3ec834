//! HTTP fetcher implementation
//!
//! This module handles the HTTP side of the scraper:
//! - Building an HTTP client with a proper user agent string
//! - GET requests that return the response body as text
//!
//! There is no retry logic: a transport failure or a non-success status is
//! surfaced to the caller as an error and handled there.

use crate::{Result, ScrapeError};
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client used for all requests
///
/// Uses reqwest's default redirect policy; the only tuning is the user
/// agent, timeouts, and response decompression.
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> std::result::Result<Client, reqwest::Error> {
    let user_agent = format!("schema-scrape/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the response body as text
///
/// Performs exactly one GET request. A non-success status code is an error
/// even though the server responded; the body is not read in that case.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(ScrapeError::Http)` - Transport failure (connect, timeout, ...)
/// * `Err(ScrapeError::Status)` - Server responded with a non-success status
pub async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| ScrapeError::Http {
        url: url.to_string(),
        source,
    })
}
