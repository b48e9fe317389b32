use crate::inventory::domain::{RepositoryId, RepositoryLicense};
use crate::ports::outbound::LicenseRepository;
use crate::shared::error::InventoryError;
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

/// Public GitHub REST API base URL
pub const DEFAULT_HOSTING_API_URL: &str = "https://api.github.com";

/// Environment variable holding the API token unless configured otherwise
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_API_TOKEN";

#[derive(Debug, Deserialize)]
struct GitHubRepositoryLicense {
    url: Option<String>,
    html_url: Option<String>,
    license: Option<GitHubLicense>,
}

#[derive(Debug, Deserialize)]
struct GitHubLicense {
    name: String,
    url: Option<String>,
}

/// GitHubLicenseRepository adapter for the GitHub "repository license" endpoint
///
/// The API token is handed in at construction. A client without a token can be
/// built, but every lookup through it fails with `MissingCredential`.
pub struct GitHubLicenseRepository {
    client: Client,
    api_url: String,
    token: Option<String>,
    token_env: String,
}

impl GitHubLicenseRepository {
    const TIMEOUT_SECONDS: u64 = 30;
    const API_VERSION: &'static str = "2022-11-28";

    /// Creates a client for the public GitHub API
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_api_url(DEFAULT_HOSTING_API_URL, token, DEFAULT_TOKEN_ENV)
    }

    /// Creates a client for a GitHub-compatible API at `api_url`
    ///
    /// `token_env` only names the credential source in error messages.
    pub fn with_api_url(api_url: &str, token: Option<String>, token_env: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("license-inventory/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
            token_env: token_env.to_string(),
        })
    }

    fn license_url(&self, repository: &RepositoryId) -> String {
        format!(
            "{}/repos/{}/{}/license",
            self.api_url,
            urlencoding::encode(repository.owner()),
            urlencoding::encode(repository.repo())
        )
    }
}

impl LicenseRepository for GitHubLicenseRepository {
    fn fetch_repository_license(
        &self,
        repository: &RepositoryId,
    ) -> Result<Option<RepositoryLicense>> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| InventoryError::MissingCredential {
                env_var: self.token_env.clone(),
            })?;

        let api_error = |details: String| -> anyhow::Error {
            InventoryError::HostingApiError {
                repository: repository.to_string(),
                details,
            }
            .into()
        };

        let response = self
            .client
            .get(self.license_url(repository))
            .bearer_auth(token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", Self::API_VERSION)
            .send()
            .map_err(|e| api_error(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(api_error(format!("GitHub API returned status code {}", status)));
        }

        let body: GitHubRepositoryLicense = response
            .json()
            .map_err(|e| api_error(format!("Malformed license response: {}", e)))?;

        let Some(license) = body.license else {
            return Ok(None);
        };

        let url = body
            .url
            .or(body.html_url)
            .or(license.url)
            .unwrap_or_default();

        Ok(Some(RepositoryLicense::new(license.name, url)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use serde_json::json;

    fn client_for(server: &MockServer, token: Option<&str>) -> GitHubLicenseRepository {
        GitHubLicenseRepository::with_api_url(
            &server.base_url(),
            token.map(str::to_string),
            DEFAULT_TOKEN_ENV,
        )
        .unwrap()
    }

    #[test]
    fn test_github_client_creation() {
        assert!(GitHubLicenseRepository::new(None).is_ok());
    }

    #[test]
    fn test_fetch_license_success() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET").path("/repos/psf/requests/license");
            then.status(200).json_body(json!({
                "name": "LICENSE",
                "path": "LICENSE",
                "url": "https://api.github.com/repos/psf/requests/contents/LICENSE?ref=main",
                "html_url": "https://github.com/psf/requests/blob/main/LICENSE",
                "license": {
                    "key": "apache-2.0",
                    "name": "Apache License 2.0",
                    "spdx_id": "Apache-2.0",
                    "url": "https://api.github.com/licenses/apache-2.0"
                }
            }));
        });

        let client = client_for(&server, Some("test-token"));
        let license = client
            .fetch_repository_license(&RepositoryId::new("psf", "requests"))
            .unwrap()
            .unwrap();

        mock.assert();
        assert_eq!(license.name(), "Apache License 2.0");
        assert_eq!(
            license.url(),
            "https://api.github.com/repos/psf/requests/contents/LICENSE?ref=main"
        );
    }

    #[test]
    fn test_fetch_license_not_found_is_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/repos/ghost/gone/license");
            then.status(404).json_body(json!({ "message": "Not Found" }));
        });

        let client = client_for(&server, Some("test-token"));
        let result = client
            .fetch_repository_license(&RepositoryId::new("ghost", "gone"))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_fetch_license_without_detected_license_is_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/repos/org/unlicensed/license");
            then.status(200)
                .json_body(json!({ "url": "https://api.github.com/x", "license": null }));
        });

        let client = client_for(&server, Some("test-token"));
        let result = client
            .fetch_repository_license(&RepositoryId::new("org", "unlicensed"))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_fetch_license_unauthorized_is_fatal() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/repos/psf/requests/license");
            then.status(401).json_body(json!({ "message": "Bad credentials" }));
        });

        let client = client_for(&server, Some("expired"));
        let err = client
            .fetch_repository_license(&RepositoryId::new("psf", "requests"))
            .unwrap_err();
        assert!(err.to_string().contains("psf/requests"));
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn test_fetch_license_rate_limited_is_fatal() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/repos/psf/requests/license");
            then.status(403)
                .json_body(json!({ "message": "API rate limit exceeded" }));
        });

        let client = client_for(&server, Some("test-token"));
        assert!(client
            .fetch_repository_license(&RepositoryId::new("psf", "requests"))
            .is_err());
    }

    #[test]
    fn test_fetch_license_without_token_makes_no_request() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET");
            then.status(200);
        });

        let client = client_for(&server, None);
        let err = client
            .fetch_repository_license(&RepositoryId::new("psf", "requests"))
            .unwrap_err();

        assert_eq!(mock.hits(), 0);
        match err.downcast_ref::<InventoryError>() {
            Some(InventoryError::MissingCredential { env_var }) => {
                assert_eq!(env_var, DEFAULT_TOKEN_ENV)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_blank_token_counts_as_missing() {
        let server = MockServer::start();
        let client = client_for(&server, Some("   "));
        assert!(client
            .fetch_repository_license(&RepositoryId::new("a", "b"))
            .is_err());
    }
}
