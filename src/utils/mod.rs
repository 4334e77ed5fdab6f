pub mod environment;
pub mod urls;

pub use environment::{find_repo_root, get_repo_root};
pub use urls::{build_download_url, encode_segment};
