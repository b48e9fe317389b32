//! license-inventory - License report generator for pinned Python requirements
//!
//! Reads a pinned requirements manifest, locates each package's source
//! repository through the PyPI JSON API, asks the GitHub API for the detected
//! license, and writes a `name,version,source_url,license,license_url` CSV.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`inventory`): Requirements, overrides, report rows and the source URL heuristic
//! - **Application Layer** (`application`): The inventory use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use license_inventory::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateInventoryUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     PyPiRegistryClient::new()?,
//!     GitHubLicenseRepository::new(std::env::var("GITHUB_API_TOKEN").ok())?,
//!     StderrProgressReporter::new(),
//!     SourceUrlPolicy::default(),
//! );
//!
//! let request = InventoryRequest::builder()
//!     .requirements_path("requirements.txt")
//!     .overrides_path("overrides.txt")
//!     .extras_path("extras.txt")
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! let output = CsvReportFormatter::new().format(&response.rows)?;
//! StdoutPresenter::new().present(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::CsvReportFormatter;
    pub use crate::adapters::outbound::network::{GitHubLicenseRepository, PyPiRegistryClient};
    pub use crate::application::dto::{InventoryRequest, InventoryResponse, InventoryStats};
    pub use crate::application::use_cases::GenerateInventoryUseCase;
    pub use crate::inventory::domain::{
        OverrideTable, PackageName, ProjectUrls, ReportRow, RepositoryId, RepositoryLicense,
        Requirement, RequirementLine, Version,
    };
    pub use crate::inventory::policies::SourceUrlPolicy;
    pub use crate::inventory::services::{OverrideParser, RequirementParser};
    pub use crate::ports::outbound::{
        InputReader, LicenseRepository, ManualEntriesReader, OutputPresenter, PackageRegistry,
        ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
