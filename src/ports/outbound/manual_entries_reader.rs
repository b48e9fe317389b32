use crate::inventory::domain::ReportRow;
use crate::shared::Result;
use std::path::Path;

/// ManualEntriesReader port for loading pre-filled report rows
pub trait ManualEntriesReader {
    /// Reads a report file with the standard five-column header
    ///
    /// # Returns
    /// The rows in file order, exactly as written
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid report
    fn read_manual_entries(&self, path: &Path) -> Result<Vec<ReportRow>>;
}
