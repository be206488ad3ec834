//! Output module for serializing scrape results
//!
//! The result of a scrape is a single JSON document: an array of objects,
//! each with a `type` field and a `properties` array, pretty-printed with
//! 2-space indentation. The file is written once, overwriting any previous
//! run's output.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One scraped type and its property names, in page layout order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaEntry {
    /// The vocabulary type name as discovered on the index page
    #[serde(rename = "type")]
    pub type_name: String,

    /// Property names documented on the type's page
    pub properties: Vec<String>,
}

/// Serializes the entries as pretty-printed JSON and writes them to `path`
///
/// Overwrites an existing file. Serialization and IO failures surface as
/// errors; the in-memory entries are never modified.
pub fn write_entries(path: &Path, entries: &[SchemaEntry]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json)?;
    Ok(())
}
