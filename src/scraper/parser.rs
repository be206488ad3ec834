//! HTML parsers for the schema.org documentation pages
//!
//! Two extraction passes, both of the same shape: parse the document, select
//! nodes by a CSS criterion, project each node to its text content, trim,
//! and collect in document order.
//!
//! An input with zero matching elements yields an empty vector, never an
//! error.

use scraper::{Html, Selector};

/// Extracts the top-level type names from the full type index page
///
/// Type names appear as the text of anchor elements carrying the `core`
/// class marker.
///
/// # Example
///
/// ```
/// use schema_scrape::scraper::extract_type_names;
///
/// let html = r#"<ul><li><a class="core" href="/Book"> Book </a></li></ul>"#;
/// assert_eq!(extract_type_names(html), vec!["Book".to_string()]);
/// ```
pub fn extract_type_names(html: &str) -> Vec<String> {
    select_trimmed_text(html, "a.core")
}

/// Extracts the property names from a single type's documentation page
///
/// Property names are the `core`-marked elements inside the property-name
/// table cells (`.prop-nam`).
pub fn extract_property_names(html: &str) -> Vec<String> {
    select_trimmed_text(html, ".prop-nam .core")
}

/// Selects all elements matching `selector`, projects each to its trimmed
/// text content, and collects the results in document order
fn select_trimmed_text(html: &str, selector: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Both selectors are literals known to parse; a malformed one would
    // simply match nothing.
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect()
}
