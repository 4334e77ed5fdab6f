//! On-disk storage of the index document
//!
//! The index is a single pretty-printed JSON file, `index.json` in the indexed root by default.
//! Writes go through a sibling `.tmp` file and a rename so consumers never read a half-written
//! index.

pub mod persistence;

pub use persistence::{load_index, save_index};
