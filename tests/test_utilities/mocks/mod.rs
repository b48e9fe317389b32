/// Mock implementations for testing
mod mock_input_reader;
mod mock_license_repository;
mod mock_package_registry;
mod mock_progress_reporter;

pub use mock_input_reader::{MockInputReader, MockManualEntriesReader};
pub use mock_license_repository::MockLicenseRepository;
pub use mock_package_registry::MockPackageRegistry;
pub use mock_progress_reporter::MockProgressReporter;
