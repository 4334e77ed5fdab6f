use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::region::RegionEntry;

/// Schema version written to the `version` field of every index
pub const SCHEMA_VERSION: &str = "2.0.0";

/// The index document written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDocument {
    #[serde(rename = "version")]
    pub schema_version: String,
    pub generated_at: DateTime<Utc>,
    #[serde(rename = "repository")]
    pub source_identifier: String,
    pub summary: Summary,
    pub regions: BTreeMap<String, RegionEntry>,
}

/// Repository-wide counts derived from the region map
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total_regions: usize,
    pub total_files: usize,
    pub regions_with_split_files: usize,
    pub by_continent: BTreeMap<String, usize>,
    /// Bytes in dataset files
    pub total_size_bytes: u64,
    pub total_sqlite_files: usize,
    pub total_sqlite_size_bytes: u64,
    /// Dataset files and databases together, in MiB rounded to one decimal
    pub total_size_mb: f64,
}
