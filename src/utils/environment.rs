use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Get the default index root: the enclosing git repository, else the current directory
pub fn get_repo_root() -> Result<PathBuf> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    Ok(find_repo_root(&cwd).unwrap_or(cwd))
}

/// Walk up from `start` to the nearest directory containing `.git`
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    start.ancestors().find(|dir| dir.join(".git").exists()).map(Path::to_path_buf)
}
