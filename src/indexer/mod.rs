//! Dataset indexing pipeline
//!
//! The run is four sequential steps over an in-memory collection:
//!
//! 1. [`walker`] lists candidate files under the root.
//! 2. [`crate::parsers`] turns each filename into a [`FileRecord`](crate::models::FileRecord).
//! 3. [`aggregator`] groups records into region entries and checks their integrity.
//! 4. [`summary`] computes the totals and assembles the document.
//!
//! [`builder`] drives the steps and writes the result.

pub mod aggregator;
pub mod builder;
pub mod summary;
pub mod walker;

pub use aggregator::{aggregate_regions, attach_databases, region_key};
pub use builder::{IndexReport, SkippedFile, build_index, run_index};
pub use summary::{build_document, build_summary};
pub use walker::{DataFile, walk_data_files};
