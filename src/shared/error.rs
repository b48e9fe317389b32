use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The report was written
    Success = 0,
    /// Application error (parse failure, missing input, registry or API failure)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for license inventory generation.
///
/// Every variant is fatal for the run. The two recoverable "not found"
/// conditions (no source URL, no detected license) are not errors and never
/// reach this type.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Failed to parse requirement: {line:?}\n\n💡 Hint: Requirements must be pinned as `name==version` (editable `-e` lines are skipped)")]
    RequirementParse { line: String },

    #[error("Failed to parse override on line {line_number}: {line:?}\n\n💡 Hint: Each override line must contain exactly a package name and a URL separated by whitespace")]
    OverrideParse { line_number: usize, line: String },

    #[error("Failed to read manual entries: {path}\nDetails: {details}\n\n💡 Hint: The file must be a CSV report with the header name,version,source_url,license,license_url")]
    ManualEntriesParse { path: PathBuf, details: String },

    #[error("Invalid source URL: {url:?}\nDetails: {details}")]
    InvalidSourceUrl { url: String, details: String },

    #[error("Failed to fetch registry metadata for package '{package}'\nDetails: {details}\n\n💡 Hint: Please check your internet connection and that the package exists on the registry")]
    RegistryError { package: String, details: String },

    #[error("Hosting API request for repository '{repository}' failed\nDetails: {details}\n\n💡 Hint: Check that the API token is valid and that the rate limit has not been exceeded")]
    HostingApiError { repository: String, details: String },

    #[error("No API token available for the hosting platform\n\n💡 Hint: Set the {env_var} environment variable (a .env file in the working directory is also read)")]
    MissingCredential { env_var: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for value objects and builders
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
