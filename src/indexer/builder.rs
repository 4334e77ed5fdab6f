//! Index builder for the dataset directory tree.
//!
//! # Error Handling Strategy
//!
//! - **Skip-level**: files whose name does not follow the convention, that sit directly in the
//!   root, that are symbolic links or whose path is not UTF-8 are logged as warnings and left
//!   out of the index. So are databases in a directory without dataset files.
//! - **Integrity-level**: conflicting region names, mixed split/non-split files or two databases
//!   within one region abort the run with an [`IndexError`](crate::error::IndexError).
//! - **I/O-level**: an unreadable root, directory or output path aborts the run.
//!
//! Nothing is written unless the whole index was built, so a failed run leaves the previous
//! index untouched.

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{SubsecRound, Utc};
use log::{debug, info, warn};

use super::aggregator::{aggregate_regions, attach_databases};
use super::summary::build_document;
use super::walker::{DataFile, matches_extension, walk_data_files};
use crate::config::IndexConfig;
use crate::index_storage::save_index;
use crate::models::{FileRecord, IndexDocument};
use crate::parsers::parse_file_record;

/// A candidate file left out of the index, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of an indexing run
#[derive(Debug, Clone)]
pub struct IndexReport {
    pub document: IndexDocument,
    pub skipped: Vec<SkippedFile>,
}

/// Build the index document for `config.root` without writing it
///
/// Walks the root for dataset files and companion databases, parses each name, groups the
/// results by directory and computes the summary. `generated_at` is the current time truncated
/// to whole seconds.
///
/// # Errors
///
/// Returns an error if the root is not a readable directory, if any directory below it cannot
/// be read, or if a region fails the integrity checks. Non-conforming files are not errors; they
/// are reported in [`IndexReport::skipped`].
///
/// # Examples
///
/// ```no_run
/// use climbs_indexer::{IndexConfig, build_index};
///
/// let report = build_index(&IndexConfig::new("/srv/climbs"))?;
/// println!("Indexed {} regions", report.document.summary.total_regions);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_index(config: &IndexConfig) -> Result<IndexReport> {
    let root = config.root();
    if !root.is_dir() {
        bail!("Index root is not a readable directory: {}", root.display());
    }

    let mut records = Vec::new();
    let mut databases = Vec::new();
    let mut skipped = Vec::new();

    let extensions = [config.extension.as_str(), config.database_extension.as_str()];
    for file in walk_data_files(root, &extensions) {
        let file = file?;
        let is_dataset = file
            .relative_path
            .file_name()
            .is_some_and(|n| matches_extension(&n.to_string_lossy(), &config.extension));
        let extension = if is_dataset { &config.extension } else { &config.database_extension };

        match to_record(&file, extension) {
            Ok(record) => {
                debug!("Parsed {} (region '{}')", file.relative_path.display(), record.region_name);
                if is_dataset { records.push(record) } else { databases.push(record) }
            }
            Err(reason) => {
                warn!("Skipping {}: {}", file.relative_path.display(), reason);
                skipped.push(SkippedFile { path: file.relative_path, reason });
            }
        }
    }

    let file_count = records.len();
    let mut regions = aggregate_regions(records, &config.base_url)
        .with_context(|| format!("Index integrity check failed under {}", root.display()))?;
    let orphans = attach_databases(&mut regions, databases, &config.base_url)
        .with_context(|| format!("Index integrity check failed under {}", root.display()))?;

    for orphan in orphans {
        let path: PathBuf = orphan.directory_path.iter().collect::<PathBuf>().join(&orphan.filename);
        let reason = "database without dataset files in its directory".to_string();
        warn!("Skipping {}: {}", path.display(), reason);
        skipped.push(SkippedFile { path, reason });
    }

    info!(
        "Indexed {} regions from {} files ({} skipped)",
        regions.len(),
        file_count,
        skipped.len()
    );

    let document = build_document(regions, &config.repository, Utc::now().trunc_subsecs(0));
    Ok(IndexReport { document, skipped })
}

/// Build the index and write it atomically to `config.output`
///
/// # Errors
///
/// Everything [`build_index`] returns, plus failures writing the output. The output file is
/// only replaced after a successful build.
pub fn run_index(config: &IndexConfig) -> Result<IndexReport> {
    let report = build_index(config)?;
    save_index(&report.document, &config.output)?;
    info!("Wrote index to {}", config.output.display());
    Ok(report)
}

fn to_record(file: &DataFile, extension: &str) -> Result<FileRecord, String> {
    if file.symlink {
        return Err("symbolic link not followed".to_string());
    }
    let (directory_path, filename) = split_relative_path(&file.relative_path)?;
    if directory_path.is_empty() {
        return Err("not inside a continent directory".to_string());
    }

    let mut record =
        parse_file_record(&filename, &directory_path, extension).map_err(|e| e.to_string())?;
    record.size = file.size;
    Ok(record)
}

/// Split a root-relative path into UTF-8 directory segments and the file name
fn split_relative_path(relative: &Path) -> Result<(Vec<String>, String), String> {
    let non_utf8 = || "path is not valid UTF-8".to_string();

    let filename = relative.file_name().and_then(|n| n.to_str()).ok_or_else(non_utf8)?;
    let directory_path = relative
        .parent()
        .map(|parent| {
            parent
                .components()
                .filter_map(|c| match c {
                    Component::Normal(segment) => Some(segment.to_str().map(str::to_string)),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
        })
        .unwrap_or(Some(Vec::new()))
        .ok_or_else(non_utf8)?;

    Ok((directory_path, filename.to_string()))
}
