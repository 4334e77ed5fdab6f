//! Groups parsed files into region entries.
//!
//! Grouping is by directory: every file in one directory (compared case-insensitively) belongs
//! to the same region. Within a group the files must agree on their region name and must be
//! either all split parts or all single files. A violation aborts the whole run.
//!
//! A region directory may also hold one companion database, attached by [`attach_databases`].

use std::collections::BTreeMap;

use crate::error::IndexError;
use crate::models::{FileRecord, RegionEntry};
use crate::utils::build_download_url;

/// Separator between directory segments in a region key
pub const KEY_SEPARATOR: &str = "/";

/// Canonical lookup key for a directory path: segments joined by `/`, lower-cased
pub fn region_key(directory_path: &[String]) -> String {
    directory_path.join(KEY_SEPARATOR).to_lowercase()
}

/// Fold parsed records into region entries keyed by [`region_key`]
///
/// Input order does not matter. Files inside a region are ordered by split index (single files
/// count as index 0), ties broken by filename.
///
/// # Errors
///
/// Returns [`IndexError`] when a region's files disagree on the region name, mix split and
/// non-split files, or repeat a filename.
pub fn aggregate_regions(
    records: impl IntoIterator<Item = FileRecord>,
    base_url: &str,
) -> Result<BTreeMap<String, RegionEntry>, IndexError> {
    let mut groups: BTreeMap<String, Vec<FileRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(region_key(&record.directory_path)).or_default().push(record);
    }

    let mut regions = BTreeMap::new();
    for (key, mut group) in groups {
        group.sort_by(|a, b| {
            (a.split_index.unwrap_or(0), &a.filename).cmp(&(b.split_index.unwrap_or(0), &b.filename))
        });
        validate_group(&key, &group)?;
        let entry = build_entry(key.clone(), &group, base_url);
        regions.insert(key, entry);
    }

    Ok(regions)
}

fn validate_group(key: &str, group: &[FileRecord]) -> Result<(), IndexError> {
    let Some(first) = group.first() else {
        return Ok(());
    };

    if let Some(other) = group.iter().find(|r| r.region_name != first.region_name) {
        return Err(IndexError::RegionNameConflict {
            region_key: key.to_string(),
            first_name: first.region_name.clone(),
            first_file: first.filename.clone(),
            second_name: other.region_name.clone(),
            second_file: other.filename.clone(),
        });
    }

    let (split, unsplit): (Vec<&FileRecord>, Vec<&FileRecord>) =
        group.iter().partition(|r| r.split_index.is_some());
    if !split.is_empty() && !unsplit.is_empty() {
        return Err(IndexError::MixedSplitFiles {
            region_key: key.to_string(),
            split_files: split.iter().map(|r| r.filename.clone()).collect(),
            unsplit_files: unsplit.iter().map(|r| r.filename.clone()).collect(),
        });
    }

    // Sorted by (index, filename), so repeats are adjacent
    if let Some(pair) = group.windows(2).find(|w| w[0].filename == w[1].filename) {
        return Err(IndexError::DuplicateFile {
            region_key: key.to_string(),
            filename: pair[0].filename.clone(),
        });
    }

    Ok(())
}

fn build_entry(region_key: String, group: &[FileRecord], base_url: &str) -> RegionEntry {
    let files: Vec<String> = group.iter().map(|r| r.filename.clone()).collect();
    let download_urls =
        files.iter().map(|f| build_download_url(base_url, &region_key, f)).collect();
    let file_sizes: Vec<u64> = group.iter().map(|r| r.size).collect();
    let has_split_files = group.len() > 1 || group.iter().any(|r| r.split_index.is_some());

    RegionEntry {
        region_name: group.first().map(|r| r.region_name.clone()).unwrap_or_default(),
        file_count: files.len(),
        total_size: file_sizes.iter().sum(),
        version: group.iter().filter_map(FileRecord::dataset_version).max().map(|v| v.to_string()),
        last_updated: group.iter().filter_map(FileRecord::dataset_date).max(),
        region_key,
        files,
        download_urls,
        file_sizes,
        has_split_files,
        database_file: None,
        database_size: None,
        database_url: None,
    }
}

/// Attach companion databases to the regions sharing their directory
///
/// A region holds at most one database, and its region name must match the region's files.
/// Databases in a directory without dataset files are returned so the caller can report them.
///
/// # Errors
///
/// Returns [`IndexError::DuplicateDatabase`] when a region directory holds two databases and
/// [`IndexError::RegionNameConflict`] when a database names a different region.
pub fn attach_databases(
    regions: &mut BTreeMap<String, RegionEntry>,
    databases: impl IntoIterator<Item = FileRecord>,
    base_url: &str,
) -> Result<Vec<FileRecord>, IndexError> {
    let mut groups: BTreeMap<String, Vec<FileRecord>> = BTreeMap::new();
    for database in databases {
        groups.entry(region_key(&database.directory_path)).or_default().push(database);
    }

    let mut orphans = Vec::new();
    for (key, mut group) in groups {
        let Some(entry) = regions.get_mut(&key) else {
            orphans.extend(group);
            continue;
        };

        group.sort_by(|a, b| a.filename.cmp(&b.filename));
        if let [first, second, ..] = group.as_slice() {
            return Err(IndexError::DuplicateDatabase {
                region_key: key,
                first_file: first.filename.clone(),
                second_file: second.filename.clone(),
            });
        }
        let Some(database) = group.pop() else {
            continue;
        };

        if database.region_name != entry.region_name {
            return Err(IndexError::RegionNameConflict {
                region_key: key,
                first_name: entry.region_name.clone(),
                first_file: entry.files.first().cloned().unwrap_or_default(),
                second_name: database.region_name,
                second_file: database.filename,
            });
        }

        entry.database_url = Some(build_download_url(base_url, &key, &database.filename));
        entry.database_size = Some(database.size);
        entry.database_file = Some(database.filename);
    }

    Ok(orphans)
}
