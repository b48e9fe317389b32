use license_inventory::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock LicenseRepository keyed by `owner/repo`
#[derive(Default, Clone)]
pub struct MockLicenseRepository {
    pub licenses: HashMap<String, RepositoryLicense>,
    pub lookups: Arc<Mutex<Vec<String>>>,
    pub should_fail: bool,
}

impl MockLicenseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_license(mut self, repository: &str, license: &str, url: &str) -> Self {
        self.licenses.insert(
            repository.to_string(),
            RepositoryLicense::new(license.to_string(), url.to_string()),
        );
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

impl LicenseRepository for MockLicenseRepository {
    fn fetch_repository_license(
        &self,
        repository: &RepositoryId,
    ) -> Result<Option<RepositoryLicense>> {
        self.lookups.lock().unwrap().push(repository.to_string());

        if self.should_fail {
            anyhow::bail!("Mock license repository failure: 401 Bad credentials");
        }

        Ok(self.licenses.get(&repository.to_string()).cloned())
    }
}
