use crate::inventory::domain::ReportRow;
use crate::shared::Result;

/// ReportFormatter port for serializing the final report
pub trait ReportFormatter {
    /// Formats the rows, header first, in the given order
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, rows: &[ReportRow]) -> Result<String>;
}
