use super::{RepositoryLicense, Requirement};
use serde::{Deserialize, Serialize};

/// Column names of the report, in output order
pub const REPORT_HEADER: [&str; 5] = ["name", "version", "source_url", "license", "license_url"];

/// One row of the license report.
///
/// The shape is fixed: absent values are empty fields, never missing columns.
/// Field order matches [`REPORT_HEADER`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    pub source_url: Option<String>,
    pub license: Option<String>,
    pub license_url: Option<String>,
}

impl ReportRow {
    /// Builds the row for a manifest requirement
    pub fn for_requirement(
        requirement: &Requirement,
        source_url: Option<String>,
        license: Option<RepositoryLicense>,
    ) -> Self {
        Self::build(
            requirement.name().to_string(),
            requirement.version().to_string(),
            source_url,
            license,
        )
    }

    /// Builds the row for an extra entry; name and version are unknown
    pub fn for_extra(source_url: String, license: Option<RepositoryLicense>) -> Self {
        Self::build(String::new(), String::new(), Some(source_url), license)
    }

    fn build(
        name: String,
        version: String,
        source_url: Option<String>,
        license: Option<RepositoryLicense>,
    ) -> Self {
        let (license, license_url) = match license {
            Some(found) => (Some(found.name().to_string()), Some(found.url().to_string())),
            None => (None, None),
        };
        Self {
            name,
            version,
            source_url,
            license,
            license_url,
        }
    }

    /// True when every field is empty
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.version.is_empty()
            && is_empty(&self.source_url)
            && is_empty(&self.license)
            && is_empty(&self.license_url)
    }
}

fn is_empty(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}
