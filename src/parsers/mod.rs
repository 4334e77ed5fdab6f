//! Filename parsing for dataset files
//!
//! Parsing never fails the run: a name that does not follow the convention produces a
//! [`ParseError`](crate::error::ParseError) which the indexer logs before skipping the file.

pub mod filename;

pub use filename::{REGION_DELIMITER, parse_file_record, split_region_name, strip_split_suffix};
