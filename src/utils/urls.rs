use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// Characters that may not appear verbatim inside a single URL path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'^')
    .add(b'|')
    .add(b'[')
    .add(b']');

/// Percent-encodes one path segment, leaving unreserved characters untouched
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT_ENCODE_SET).to_string()
}

/// Builds the download URL of `filename` inside the region directory `region_key`
///
/// # Examples
///
/// ```
/// use climbs_indexer::utils::build_download_url;
///
/// let url = build_download_url(
///     "https://example.org/raw/main/",
///     "europe/belgium",
///     "Belgium_climbs_all-1.xlsx",
/// );
/// assert_eq!(url, "https://example.org/raw/main/europe/belgium/Belgium_climbs_all-1.xlsx");
/// ```
pub fn build_download_url(base_url: &str, region_key: &str, filename: &str) -> String {
    let mut url = base_url.trim_end_matches('/').to_string();
    for segment in region_key.split('/').filter(|s| !s.is_empty()) {
        url.push('/');
        url.push_str(&encode_segment(segment));
    }
    url.push('/');
    url.push_str(&encode_segment(filename));
    url
}
