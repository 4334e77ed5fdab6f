//! Filename convention parser.
//!
//! Dataset files are named
//! `{RegionName}_climbs_{type}_{date}_v{version}_e{elevationCode}[-{splitIndex}].{ext}`.
//! Parsing is split into two steps that can be checked on their own:
//!
//! 1. [`split_region_name`] strips the extension and cuts the stem at the first `_climbs`.
//! 2. [`strip_split_suffix`] looks for a trailing `-N` on the remainder only, so a region name
//!    such as `Zone-1` never produces a split index.

use crate::error::ParseError;
use crate::models::FileRecord;

/// Token that ends the region name and starts the descriptive suffix
pub const REGION_DELIMITER: &str = "_climbs";

/// Pieces of a filename before split detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts<'a> {
    pub region_name: &'a str,
    /// Stem after the region name, delimiter included
    pub tail: &'a str,
    pub extension: &'a str,
}

/// Strip the extension and separate the region name from the descriptive tail
///
/// The extension comparison ignores ASCII case; the returned extension keeps the on-disk case.
///
/// # Errors
///
/// Returns [`ParseError::WrongExtension`] when the name does not end with `.{extension}`,
/// [`ParseError::MissingDelimiter`] when `_climbs` is absent and
/// [`ParseError::EmptyRegionName`] when nothing precedes it.
pub fn split_region_name<'a>(
    filename: &'a str,
    extension: &str,
) -> Result<NameParts<'a>, ParseError> {
    let wrong_extension = || ParseError::WrongExtension { expected: extension.to_string() };

    let dot = filename.len().checked_sub(extension.len() + 1).ok_or_else(wrong_extension)?;
    if !filename.is_char_boundary(dot) {
        return Err(wrong_extension());
    }
    let (stem, dotted_ext) = filename.split_at(dot);
    let ext = dotted_ext.strip_prefix('.').ok_or_else(wrong_extension)?;
    if !ext.eq_ignore_ascii_case(extension) {
        return Err(wrong_extension());
    }

    let start = stem
        .find(REGION_DELIMITER)
        .ok_or(ParseError::MissingDelimiter { delimiter: REGION_DELIMITER })?;
    if start == 0 {
        return Err(ParseError::EmptyRegionName { delimiter: REGION_DELIMITER });
    }

    Ok(NameParts { region_name: &stem[..start], tail: &stem[start..], extension: ext })
}

/// Detect and remove a trailing `-N` split suffix
///
/// Returns the tail without the suffix and the split index, or the tail unchanged and `None`.
///
/// # Errors
///
/// Returns [`ParseError::InvalidSplitIndex`] for `-0` or a number that does not fit in `u32`.
pub fn strip_split_suffix(tail: &str) -> Result<(&str, Option<u32>), ParseError> {
    let Some(dash) = tail.rfind('-') else {
        return Ok((tail, None));
    };
    let digits = &tail[dash + 1..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok((tail, None));
    }

    match digits.parse::<u32>() {
        Ok(index) if index > 0 => Ok((&tail[..dash], Some(index))),
        _ => Err(ParseError::InvalidSplitIndex { suffix: digits.to_string() }),
    }
}

/// Parse a dataset filename found in `directory_path`
///
/// `size` is left at zero; the indexer fills it from file metadata.
///
/// # Examples
///
/// ```
/// use climbs_indexer::parsers::parse_file_record;
///
/// let dir = vec!["europe".to_string(), "belgium".to_string()];
/// let record = parse_file_record(
///     "Belgium_climbs_all_basic_2025-11-01_v2.0.0_e0000-2.xlsx",
///     &dir,
///     "xlsx",
/// )?;
/// assert_eq!(record.region_name, "Belgium");
/// assert_eq!(record.split_index, Some(2));
/// # Ok::<(), climbs_indexer::error::ParseError>(())
/// ```
pub fn parse_file_record(
    filename: &str,
    directory_path: &[String],
    extension: &str,
) -> Result<FileRecord, ParseError> {
    let parts = split_region_name(filename, extension)?;
    let (descriptor, split_index) = strip_split_suffix(parts.tail)?;

    Ok(FileRecord {
        filename: filename.to_string(),
        directory_path: directory_path.to_vec(),
        region_name: parts.region_name.to_string(),
        split_index,
        descriptor: descriptor.to_string(),
        extension: parts.extension.to_string(),
        size: 0,
    })
}
