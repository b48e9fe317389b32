use crate::inventory::domain::{PackageName, ProjectUrls};
use crate::shared::Result;

/// PackageRegistry port for package metadata lookups (e.g. the PyPI JSON API)
pub trait PackageRegistry {
    /// Fetches the labeled project URLs declared for a package
    ///
    /// # Returns
    /// The label -> URL mapping; empty when the package declares none
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The registry answers with a non-success status (including unknown packages)
    /// - The response is not valid metadata JSON
    fn fetch_project_urls(&self, package: &PackageName) -> Result<ProjectUrls>;
}
