use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use walkdir::{DirEntry, WalkDir};

/// A candidate file found under the index root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFile {
    pub path: PathBuf,
    /// Path relative to the index root, file name included
    pub relative_path: PathBuf,
    pub size: u64,
    /// The entry is a symbolic link; links are reported but never followed
    pub symlink: bool,
}

/// True when `name` ends with `.{extension}`, ignoring ASCII case
pub fn matches_extension(name: &str, extension: &str) -> bool {
    let dot = match name.len().checked_sub(extension.len() + 1) {
        Some(dot) if dot > 0 && name.is_char_boundary(dot) => dot,
        _ => return false,
    };
    name[dot..].strip_prefix('.').is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Lazily walk `root` for files whose name ends with one of `extensions`
///
/// Entries are visited in file-name order so that repeated runs see the same sequence. Every
/// directory is searched, whatever its name. Symbolic links are not followed; a link whose name
/// matches is still yielded with [`DataFile::symlink`] set so the caller can report it.
///
/// # Errors
///
/// Each item is an error when a directory cannot be read or a file's metadata is unavailable;
/// this includes the root itself being missing or unreadable.
pub fn walk_data_files<'a>(
    root: &'a Path,
    extensions: &[&str],
) -> impl Iterator<Item = Result<DataFile>> + use<'a> {
    let extensions: Vec<String> = extensions.iter().map(|e| e.to_string()).collect();

    WalkDir::new(root).sort_by_file_name().into_iter().filter_map(move |entry| match entry {
        Ok(entry) if is_candidate(&entry, &extensions) => Some(to_data_file(root, &entry)),
        Ok(_) => None,
        Err(e) => {
            let path = e.path().unwrap_or(root).display().to_string();
            Some(Err(anyhow!(e).context(format!("Failed to read directory entry: {}", path))))
        }
    })
}

fn is_candidate(entry: &DirEntry, extensions: &[String]) -> bool {
    let file_type = entry.file_type();
    if !file_type.is_file() && !file_type.is_symlink() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    extensions.iter().any(|ext| matches_extension(&name, ext))
}

fn to_data_file(root: &Path, entry: &DirEntry) -> Result<DataFile> {
    let metadata = entry
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", entry.path().display()))?;
    let relative_path = entry.path().strip_prefix(root).unwrap_or(entry.path()).to_path_buf();

    Ok(DataFile {
        path: entry.path().to_path_buf(),
        relative_path,
        size: metadata.len(),
        symlink: entry.path_is_symlink(),
    })
}
