//! Climbs Indexer - Build a download index for a tree of climb dataset files
//!
//! Dataset files live under `{continent}/{country-or-region}/...` and follow the naming
//! convention `{RegionName}_climbs_{type}_{date}_v{version}_e{elevationCode}[-{splitIndex}].xlsx`.
//! This library:
//!
//! - Walks the tree for dataset files
//! - Parses region names and split-part indices from filenames
//! - Groups files per region directory with download URLs
//! - Summarizes the result and writes `index.json` atomically
//!
//! # Example
//!
//! ```no_run
//! use climbs_indexer::{IndexConfig, run_index};
//!
//! let config = IndexConfig::new("/srv/global-road-and-trail-climbs");
//! let report = run_index(&config)?;
//! println!("Indexed {} regions", report.document.summary.total_regions);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod index_storage;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use config::IndexConfig;
pub use error::{IndexError, ParseError};
pub use indexer::{build_index, run_index};
pub use models::{FileRecord, IndexDocument, RegionEntry, Summary};
pub use parsers::parse_file_record;
