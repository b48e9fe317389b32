use license_inventory::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock PackageRegistry keyed by registry name, recording every lookup
#[derive(Default, Clone)]
pub struct MockPackageRegistry {
    pub projects: HashMap<String, ProjectUrls>,
    pub lookups: Arc<Mutex<Vec<String>>>,
    pub should_fail: bool,
}

impl MockPackageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, name: &str, urls: &[(&str, &str)]) -> Self {
        self.projects.insert(
            name.to_string(),
            urls.iter()
                .map(|(label, url)| (label.to_string(), url.to_string()))
                .collect(),
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

impl PackageRegistry for MockPackageRegistry {
    fn fetch_project_urls(&self, package: &PackageName) -> Result<ProjectUrls> {
        let name = package.registry_name().to_string();
        self.lookups.lock().unwrap().push(name.clone());

        if self.should_fail {
            anyhow::bail!("Mock package registry failure for {}", name);
        }

        Ok(self.projects.get(&name).cloned().unwrap_or_default())
    }
}
