use crate::inventory::domain::report_row::REPORT_HEADER;
use crate::inventory::domain::ReportRow;
use crate::ports::outbound::{InputReader, ManualEntriesReader};
use crate::shared::error::InventoryError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading input files from the file system
///
/// Implements both InputReader (line-oriented text inputs) and
/// ManualEntriesReader (CSV report rows).
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path, description: &str) -> Result<String> {
        validate_regular_file(path, description)?;

        fs::read_to_string(path).map_err(|e| {
            InventoryError::FileReadError {
                path: path.to_path_buf(),
                details: format!("Failed to read {}: {}", description, e),
            }
            .into()
        })
    }

    /// Parses report rows from CSV text with the standard header
    fn parse_report_rows(content: &str, path: &Path) -> Result<Vec<ReportRow>> {
        let manual_error = |details: String| -> anyhow::Error {
            InventoryError::ManualEntriesParse {
                path: path.to_path_buf(),
                details,
            }
            .into()
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| manual_error(e.to_string()))?
            .clone();
        let missing: Vec<&str> = REPORT_HEADER
            .iter()
            .copied()
            .filter(|column| !headers.iter().any(|h| h.trim() == *column))
            .collect();
        if !missing.is_empty() {
            return Err(manual_error(format!(
                "Missing column(s): {}",
                missing.join(", ")
            )));
        }

        reader
            .deserialize::<ReportRow>()
            .enumerate()
            .map(|(index, record)| {
                // header is line 1
                record.map_err(|e| manual_error(format!("Row {}: {}", index + 2, e)))
            })
            .collect()
    }
}

impl InputReader for FileSystemReader {
    fn read_input(&self, path: &Path, description: &str) -> Result<String> {
        self.safe_read_file(path, description)
    }
}

impl ManualEntriesReader for FileSystemReader {
    fn read_manual_entries(&self, path: &Path) -> Result<Vec<ReportRow>> {
        let content = self.safe_read_file(path, "manual entries file")?;
        Self::parse_report_rows(&content, path)
    }
}
