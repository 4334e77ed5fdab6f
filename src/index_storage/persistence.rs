//! Index persistence: atomic save and load

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::IndexDocument;

/// Path of the temporary file written next to `output` before the rename
pub fn temp_path(output: &Path) -> PathBuf {
    let mut name = output.file_name().map(OsString::from).unwrap_or_else(|| OsString::from("index"));
    name.push(".tmp");
    output.with_file_name(name)
}

/// Serialize `document` to `output` atomically (temp file + rename)
///
/// Readers of `output` see either the previous index or the new one, never a partial write.
/// The temp file is removed when the write or rename fails.
pub fn save_index(document: &IndexDocument, output: &Path) -> Result<()> {
    let mut json = serde_json::to_string_pretty(document).context("Failed to serialize index")?;
    json.push('\n');

    let temp = temp_path(output);
    let written = fs::write(&temp, json)
        .with_context(|| format!("Failed to write index temp file: {}", temp.display()))
        .and_then(|_| {
            fs::rename(&temp, output).with_context(|| {
                format!("Failed to move index into place: {}", output.display())
            })
        });

    if written.is_err() {
        let _ = fs::remove_file(&temp);
    }
    written
}

/// Load a previously written index, restoring each entry's `region_key` from its map key
pub fn load_index(path: &Path) -> Result<IndexDocument> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read index file: {}", path.display()))?;
    let mut document: IndexDocument = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse index JSON: {}", path.display()))?;

    // The key is stored only as the map key
    for (key, entry) in document.regions.iter_mut() {
        entry.region_key = key.clone();
    }
    Ok(document)
}
