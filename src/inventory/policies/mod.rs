mod source_url_policy;

pub use source_url_policy::{SourceUrlPolicy, DEFAULT_HOSTING_HOST, DEFAULT_SOURCE_URL_LABELS};
