use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// All files belonging to one region directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionEntry {
    /// Lower-cased `/`-joined directory path; the key of this entry in the index
    #[serde(skip)]
    pub region_key: String,
    pub region_name: String,
    pub files: Vec<String>,
    pub download_urls: Vec<String>,
    pub file_sizes: Vec<u64>,
    pub total_size: u64,
    pub file_count: usize,
    pub has_split_files: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDate>,
    /// Companion database found in the region directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
}
