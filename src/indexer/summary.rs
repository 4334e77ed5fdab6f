use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::aggregator::KEY_SEPARATOR;
use crate::models::{IndexDocument, RegionEntry, SCHEMA_VERSION, Summary};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Compute repository-wide counts from the completed region map
pub fn build_summary(regions: &BTreeMap<String, RegionEntry>) -> Summary {
    let mut by_continent: BTreeMap<String, usize> = BTreeMap::new();
    for key in regions.keys() {
        let continent = key.split(KEY_SEPARATOR).next().unwrap_or_default();
        *by_continent.entry(continent.to_string()).or_default() += 1;
    }

    let total_size_bytes: u64 = regions.values().map(|r| r.total_size).sum();
    let total_sqlite_size_bytes: u64 = regions.values().filter_map(|r| r.database_size).sum();
    let all_bytes = total_size_bytes + total_sqlite_size_bytes;

    Summary {
        total_regions: regions.len(),
        total_files: regions.values().map(|r| r.file_count).sum(),
        regions_with_split_files: regions.values().filter(|r| r.has_split_files).count(),
        by_continent,
        total_size_bytes,
        total_sqlite_files: regions.values().filter(|r| r.database_file.is_some()).count(),
        total_sqlite_size_bytes,
        total_size_mb: (all_bytes as f64 / BYTES_PER_MB * 10.0).round() / 10.0,
    }
}

/// Assemble the final document around `regions`
pub fn build_document(
    regions: BTreeMap<String, RegionEntry>,
    repository: &str,
    generated_at: DateTime<Utc>,
) -> IndexDocument {
    IndexDocument {
        schema_version: SCHEMA_VERSION.to_string(),
        generated_at,
        source_identifier: repository.to_string(),
        summary: build_summary(&regions),
        regions,
    }
}
