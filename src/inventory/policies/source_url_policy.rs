use crate::inventory::domain::ProjectUrls;
use crate::shared::error::InventoryError;
use crate::shared::Result;
use regex::Regex;

/// Project URL labels checked by default, highest priority first
pub const DEFAULT_SOURCE_URL_LABELS: [&str; 5] =
    ["Source", "Code", "Source Code", "Homepage", "Repository"];

/// Hosting platform domain accepted by default
pub const DEFAULT_HOSTING_HOST: &str = "github.com";

/// SourceUrlPolicy selects the declared project URL that most plausibly points
/// at the source repository.
///
/// Labels are searched in priority order; the first value whose URL is on the
/// hosting platform (`http`/`https`, optional `www.`) wins. Label comparison
/// ignores ASCII case.
#[derive(Debug, Clone)]
pub struct SourceUrlPolicy {
    labels: Vec<String>,
    pattern: Regex,
}

impl SourceUrlPolicy {
    pub fn new(labels: Vec<String>, hosting_host: &str) -> Result<Self> {
        if labels.is_empty() {
            return Err(InventoryError::Validation {
                message: "At least one source URL label is required".to_string(),
            }
            .into());
        }
        if hosting_host.trim().is_empty() {
            return Err(InventoryError::Validation {
                message: "Hosting host must not be empty".to_string(),
            }
            .into());
        }

        let pattern = Regex::new(&format!(
            r"^https?://(www\.)?{}(/|$)",
            regex::escape(hosting_host.trim())
        ))?;

        Ok(Self { labels, pattern })
    }

    /// True when the URL is on the hosting platform
    pub fn is_hosting_url(&self, url: &str) -> bool {
        self.pattern.is_match(url.trim())
    }

    /// Picks the source URL from the labeled project URLs.
    ///
    /// # Returns
    /// The first hosting-platform URL in label priority order, or `None`
    pub fn select(&self, project_urls: &ProjectUrls) -> Option<String> {
        self.labels.iter().find_map(|label| {
            project_urls
                .iter()
                .filter(|(key, _)| key.trim().eq_ignore_ascii_case(label))
                .map(|(_, url)| url.trim())
                .find(|url| self.is_hosting_url(url))
                .map(str::to_string)
        })
    }
}

impl Default for SourceUrlPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_SOURCE_URL_LABELS
                .iter()
                .map(|label| label.to_string())
                .collect(),
            DEFAULT_HOSTING_HOST,
        )
        .expect("default source URL policy is valid")
    }
}
