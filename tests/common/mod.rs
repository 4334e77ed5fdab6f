//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Descriptive part shared by the fixture filenames
pub const DESCRIPTOR: &str = "_climbs_all_basic_2025-11-01_v2.0.0_e0000";

/// Filename following the dataset convention
pub fn dataset_name(region: &str, split: Option<u32>) -> String {
    let split = split.map(|i| format!("-{}", i)).unwrap_or_default();
    format!("{}{}{}.xlsx", region, DESCRIPTOR, split)
}

/// Builder for test dataset directory trees
pub struct DatasetDirBuilder {
    temp_dir: TempDir,
}

impl DatasetDirBuilder {
    /// Create a new builder with an empty root directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the root path
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a file at `relative` with the given content
    pub fn with_file(self, relative: &str, content: &[u8]) -> Self {
        let path = self.temp_dir.path().join(relative);
        fs::create_dir_all(path.parent().expect("file has a parent"))
            .expect("Failed to create directories");
        fs::write(&path, content).expect("Failed to write file");
        self
    }

    /// Add a single-file region in `dir`
    pub fn with_region(self, dir: &str, region: &str) -> Self {
        let relative = format!("{}/{}", dir, dataset_name(region, None));
        self.with_file(&relative, b"xlsx")
    }

    /// Add a split region in `dir` with parts `1..=parts`
    pub fn with_split_region(mut self, dir: &str, region: &str, parts: u32) -> Self {
        for i in 1..=parts {
            let relative = format!("{}/{}", dir, dataset_name(region, Some(i)));
            self = self.with_file(&relative, b"part");
        }
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DatasetDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Default index location for a root
pub fn index_path(root: &Path) -> PathBuf {
    root.join("index.json")
}

/// A small tree resembling the published dataset
pub fn realistic_dataset_dir() -> TempDir {
    DatasetDirBuilder::new()
        .with_region("europe/luxembourg", "Luxembourg")
        .with_split_region("europe/belgium", "Belgium", 3)
        .with_region("europe/isle-of-man", "Isle-of-Man")
        .with_split_region("north-america/united-states-of-america/california", "California", 2)
        .with_region("north-america/united-states-of-america/hawaii", "Hawaii")
        .with_region("oceania/new-zealand", "New-Zealand")
        .with_file("README.md", b"# climbs")
        .with_file("europe/notes.txt", b"todo")
        .build()
}
