//! Settings for one indexing run.
//!
//! The command line fills an [`IndexConfig`]; the library never reads the environment.

use std::path::{Path, PathBuf};

/// Repository named in the index when none is configured
pub const DEFAULT_REPOSITORY: &str = "stevehollx/global-road-and-trail-climbs";

/// Branch used to derive the default download base URL
pub const DEFAULT_BRANCH: &str = "main";

/// Extension of dataset files, without the dot
pub const DEFAULT_EXTENSION: &str = "xlsx";

/// Extension of the per-region companion database, without the dot
pub const DEFAULT_DATABASE_EXTENSION: &str = "sqlite";

/// Name of the index file written inside the root
pub const INDEX_FILENAME: &str = "index.json";

/// Settings for one indexing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Directory tree to scan
    pub root: PathBuf,
    /// Where the index is written
    pub output: PathBuf,
    /// `owner/name` recorded in the index's `repository` field
    pub repository: String,
    /// Prefix of every download URL
    pub base_url: String,
    /// Extension of dataset files, matched case-insensitively
    pub extension: String,
    /// Extension of the optional companion database in each region directory
    pub database_extension: String,
}

impl IndexConfig {
    /// Default settings for `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            output: root.join(INDEX_FILENAME),
            root,
            repository: DEFAULT_REPOSITORY.to_string(),
            base_url: default_base_url(DEFAULT_REPOSITORY, DEFAULT_BRANCH),
            extension: DEFAULT_EXTENSION.to_string(),
            database_extension: DEFAULT_DATABASE_EXTENSION.to_string(),
        }
    }

    /// Override the output path
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Override the repository; the base URL is not re-derived
    pub fn with_repository(mut self, repository: &str) -> Self {
        self.repository = repository.to_string();
        self
    }

    /// Override the download base URL
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Override the dataset extension; a leading dot is ignored
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Override the companion database extension; a leading dot is ignored
    pub fn with_database_extension(mut self, extension: &str) -> Self {
        self.database_extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Raw-content base URL for `repository` at `branch`
pub fn default_base_url(repository: &str, branch: &str) -> String {
    format!("https://raw.githubusercontent.com/{}/{}", repository, branch)
}
