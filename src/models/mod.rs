//! Data models for the dataset index.
//!
//! - [`FileRecord`] - One parsed dataset file
//! - [`RegionEntry`] - Files grouped under one region directory
//! - [`IndexDocument`] / [`Summary`] - The serialized index and its aggregate counts
//!
//! Only [`RegionEntry`], [`IndexDocument`] and [`Summary`] are serialized; their serde field
//! names are the on-disk JSON schema.

pub mod document;
pub mod record;
pub mod region;

pub use document::{IndexDocument, SCHEMA_VERSION, Summary};
pub use record::{DatasetVersion, FileRecord};
pub use region::RegionEntry;
