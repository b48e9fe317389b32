use crate::shared::error::InventoryError;
use crate::shared::Result;
use url::Url;

/// Repository identifier on the hosting platform (`owner/repo`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryId {
    owner: String,
    repo: String,
}

impl RepositoryId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Derives the identifier from a repository URL.
    ///
    /// Only the first two path segments are used, so
    /// `https://github.com/owner/repo/tree/main/sub` maps to `owner/repo`.
    /// A trailing `.git` on the repository segment is dropped.
    ///
    /// # Returns
    /// `Ok(None)` when the path has fewer than two segments
    ///
    /// # Errors
    /// Returns an error if the string is not an absolute URL
    pub fn from_url(source_url: &str) -> Result<Option<Self>> {
        let parsed = Url::parse(source_url.trim()).map_err(|e| InventoryError::InvalidSourceUrl {
            url: source_url.to_string(),
            details: e.to_string(),
        })?;

        let mut segments = parsed
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|segment| !segment.is_empty());

        let (Some(owner), Some(repo)) = (segments.next(), segments.next()) else {
            return Ok(None);
        };

        let repo = repo.strip_suffix(".git").unwrap_or(repo);
        if repo.is_empty() {
            return Ok(None);
        }

        Ok(Some(Self::new(owner, repo)))
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl std::fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// License detected by the hosting platform for one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLicense {
    name: String,
    url: String,
}

impl RepositoryLicense {
    pub fn new(name: String, url: String) -> Self {
        Self { name, url }
    }

    /// Display name, e.g. "BSD 3-Clause \"New\" or \"Revised\" License"
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference URL of the detected license file
    pub fn url(&self) -> &str {
        &self.url
    }
}
