use crate::inventory::domain::{RepositoryId, RepositoryLicense};
use crate::shared::Result;

/// LicenseRepository port for the hosting platform's license detection
///
/// This port abstracts the external service (e.g. the GitHub REST API)
/// that reports which license a repository carries.
pub trait LicenseRepository {
    /// Fetches the detected license of a repository
    ///
    /// # Returns
    /// - `Ok(Some(license))` when the platform detected a license
    /// - `Ok(None)` when the repository does not exist or has no detected license
    ///
    /// # Errors
    /// Returns an error for every other failure: missing credentials,
    /// authentication or rate-limit rejections, unexpected status codes,
    /// transport errors and malformed responses
    fn fetch_repository_license(&self, repository: &RepositoryId)
        -> Result<Option<RepositoryLicense>>;
}
