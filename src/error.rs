//! Error types for filename parsing and region aggregation.
//!
//! Two severities exist:
//!
//! - [`ParseError`] marks a file that does not follow the naming convention. The indexer logs
//!   it and moves on.
//! - [`IndexError`] marks data that cannot be grouped unambiguously. The run aborts before any
//!   output is written.
//!
//! I/O failures are carried as `anyhow::Error` with path context instead of a dedicated variant.

use thiserror::Error;

/// Reasons a filename is not a dataset file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("does not end with .{expected}")]
    WrongExtension { expected: String },

    #[error("missing '{delimiter}' delimiter")]
    MissingDelimiter { delimiter: &'static str },

    #[error("empty region name before '{delimiter}'")]
    EmptyRegionName { delimiter: &'static str },

    #[error("split suffix '-{suffix}' is not a positive integer")]
    InvalidSplitIndex { suffix: String },
}

/// Data-integrity failures detected while grouping files into regions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error(
        "region '{region_key}' has conflicting region names: '{first_name}' ({first_file}) vs '{second_name}' ({second_file})"
    )]
    RegionNameConflict {
        region_key: String,
        first_name: String,
        first_file: String,
        second_name: String,
        second_file: String,
    },

    #[error(
        "region '{region_key}' mixes split and non-split files: split [{}], non-split [{}]",
        .split_files.join(", "),
        .unsplit_files.join(", ")
    )]
    MixedSplitFiles { region_key: String, split_files: Vec<String>, unsplit_files: Vec<String> },

    #[error("region '{region_key}' has more than one database: {first_file}, {second_file}")]
    DuplicateDatabase { region_key: String, first_file: String, second_file: String },

    #[error("region '{region_key}' contains '{filename}' more than once")]
    DuplicateFile { region_key: String, filename: String },
}
