/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod input_reader;
pub mod license_repository;
pub mod manual_entries_reader;
pub mod output_presenter;
pub mod package_registry;
pub mod progress_reporter;
pub mod report_formatter;

pub use input_reader::InputReader;
pub use license_repository::LicenseRepository;
pub use manual_entries_reader::ManualEntriesReader;
pub use output_presenter::OutputPresenter;
pub use package_registry::PackageRegistry;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
