pub mod override_table;
pub mod report_row;
pub mod repository;
pub mod requirement;

pub use override_table::OverrideTable;
pub use report_row::ReportRow;
pub use repository::{RepositoryId, RepositoryLicense};
pub use requirement::{PackageName, ProjectUrls, Requirement, RequirementLine, Version};
