use crate::shared::error::InventoryError;
use crate::shared::Result;
use std::path::PathBuf;

/// InventoryRequest - Input files for one inventory run
#[derive(Debug, Clone)]
pub struct InventoryRequest {
    /// Pinned requirements manifest (`name==version` lines)
    pub requirements_path: PathBuf,
    /// Manual `name url` overrides
    pub overrides_path: PathBuf,
    /// Bare repository URLs to include beyond the manifest
    pub extras_path: Option<PathBuf>,
    /// Pre-filled report whose rows are passed through unchanged
    pub manual_entries_path: Option<PathBuf>,
}

impl InventoryRequest {
    pub fn new(
        requirements_path: PathBuf,
        overrides_path: PathBuf,
        extras_path: Option<PathBuf>,
        manual_entries_path: Option<PathBuf>,
    ) -> Self {
        Self {
            requirements_path,
            overrides_path,
            extras_path,
            manual_entries_path,
        }
    }

    pub fn builder() -> InventoryRequestBuilder {
        InventoryRequestBuilder::default()
    }
}

/// Builder for [`InventoryRequest`]; requirements and overrides are mandatory
#[derive(Debug, Default)]
pub struct InventoryRequestBuilder {
    requirements_path: Option<PathBuf>,
    overrides_path: Option<PathBuf>,
    extras_path: Option<PathBuf>,
    manual_entries_path: Option<PathBuf>,
}

impl InventoryRequestBuilder {
    pub fn requirements_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.requirements_path = Some(path.into());
        self
    }

    pub fn overrides_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.overrides_path = Some(path.into());
        self
    }

    pub fn extras_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.extras_path = Some(path.into());
        self
    }

    pub fn manual_entries_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manual_entries_path = Some(path.into());
        self
    }

    pub fn build(self) -> Result<InventoryRequest> {
        let requirements_path = self.requirements_path.ok_or_else(|| InventoryError::Validation {
            message: "requirements_path is required".to_string(),
        })?;
        let overrides_path = self.overrides_path.ok_or_else(|| InventoryError::Validation {
            message: "overrides_path is required".to_string(),
        })?;

        Ok(InventoryRequest::new(
            requirements_path,
            overrides_path,
            self.extras_path,
            self.manual_entries_path,
        ))
    }
}
