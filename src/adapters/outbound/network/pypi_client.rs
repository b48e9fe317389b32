use crate::inventory::domain::{PackageName, ProjectUrls};
use crate::ports::outbound::PackageRegistry;
use crate::shared::error::InventoryError;
use crate::shared::Result;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Public PyPI base URL
pub const DEFAULT_REGISTRY_URL: &str = "https://pypi.org";

#[derive(Debug, Deserialize)]
struct PyPiPackageInfo {
    info: PyPiInfo,
}

#[derive(Debug, Deserialize)]
struct PyPiInfo {
    #[serde(default)]
    project_urls: Option<BTreeMap<String, Option<String>>>,
}

/// PyPiRegistryClient adapter for reading project metadata from the PyPI JSON API
///
/// One blocking request per lookup. Failures are returned as errors without
/// retrying; the caller treats them as fatal.
pub struct PyPiRegistryClient {
    client: Client,
    base_url: String,
}

impl PyPiRegistryClient {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a client for the public PyPI instance
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_REGISTRY_URL)
    }

    /// Creates a client for a PyPI-compatible registry at `base_url`
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("license-inventory/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Validates a URL path component before it is placed in a request URL
    fn validate_url_component(component: &str) -> Result<()> {
        if component.contains('/') || component.contains('\\') || component.contains("..") {
            anyhow::bail!(
                "Security: package name '{}' contains path separators which are not allowed",
                component
            );
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!(
                "Security: package name '{}' contains URL-unsafe characters",
                component
            );
        }

        Ok(())
    }

    fn metadata_url(&self, name: &str) -> String {
        format!("{}/pypi/{}/json", self.base_url, urlencoding::encode(name))
    }

    fn fetch_package_info(&self, name: &str) -> Result<PyPiPackageInfo> {
        let registry_error = |details: String| -> anyhow::Error {
            InventoryError::RegistryError {
                package: name.to_string(),
                details,
            }
            .into()
        };

        let response = self
            .client
            .get(self.metadata_url(name))
            .send()
            .map_err(|e| registry_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(registry_error(format!(
                "PyPI API returned status code {}",
                response.status()
            )));
        }

        response
            .json::<PyPiPackageInfo>()
            .map_err(|e| registry_error(format!("Malformed metadata: {}", e)))
    }
}

impl PackageRegistry for PyPiRegistryClient {
    fn fetch_project_urls(&self, package: &PackageName) -> Result<ProjectUrls> {
        let name = package.registry_name();
        Self::validate_url_component(name)?;

        let package_info = self.fetch_package_info(name)?;

        Ok(package_info
            .info
            .project_urls
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(label, url)| url.map(|url| (label, url)))
            .collect())
    }
}
