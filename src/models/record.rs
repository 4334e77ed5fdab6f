use chrono::NaiveDate;

/// One dataset file discovered under the index root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Base name only, e.g. `Belgium_climbs_all_basic_2025-11-01_v2.0.0_e0000-1.xlsx`
    pub filename: String,
    /// Directory segments from the index root down to the containing directory
    pub directory_path: Vec<String>,
    /// Everything before the first `_climbs`, hyphens preserved
    pub region_name: String,
    /// Trailing `-N` of a multi-part dataset
    pub split_index: Option<u32>,
    /// Text between the region name and the split suffix, starting with the delimiter
    pub descriptor: String,
    /// Extension as found on disk, without the dot
    pub extension: String,
    /// Size on disk in bytes
    pub size: u64,
}

impl FileRecord {
    /// Rebuild the filename from its structural parts
    pub fn rebuild_filename(&self) -> String {
        let split = self.split_index.map(|i| format!("-{}", i)).unwrap_or_default();
        format!("{}{}{}.{}", self.region_name, self.descriptor, split, self.extension)
    }

    /// Dataset version decoded from a `_v<major.minor.patch>` segment, if any
    pub fn dataset_version(&self) -> Option<DatasetVersion> {
        self.descriptor_segments().find_map(DatasetVersion::parse)
    }

    /// Dataset date decoded from a `_YYYY-MM-DD` segment, if any
    pub fn dataset_date(&self) -> Option<NaiveDate> {
        self.descriptor_segments().find_map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
    }

    fn descriptor_segments(&self) -> impl Iterator<Item = &str> {
        self.descriptor.split('_').filter(|s| !s.is_empty())
    }
}

/// Dotted numeric dataset version, e.g. `v2.0.0`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DatasetVersion(Vec<u32>);

impl DatasetVersion {
    /// Parse a `v`-prefixed dotted version; anything else yields `None`
    pub fn parse(segment: &str) -> Option<Self> {
        let digits = segment.strip_prefix('v')?;
        let parts = digits.split('.').map(|p| p.parse::<u32>().ok()).collect::<Option<Vec<_>>>()?;
        if parts.is_empty() { None } else { Some(Self(parts)) }
    }
}

impl std::fmt::Display for DatasetVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|p| p.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}
