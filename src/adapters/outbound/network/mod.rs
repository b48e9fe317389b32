/// Network adapters for external API calls
mod github_client;
mod pypi_client;

pub use github_client::{GitHubLicenseRepository, DEFAULT_HOSTING_API_URL, DEFAULT_TOKEN_ENV};
pub use pypi_client::{PyPiRegistryClient, DEFAULT_REGISTRY_URL};
