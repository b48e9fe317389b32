use crate::inventory::domain::report_row::REPORT_HEADER;
use crate::inventory::domain::ReportRow;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// CsvReportFormatter adapter producing the comma-separated license report
///
/// The header is always written, also for an empty report. Fields containing
/// the delimiter, quotes or line breaks are quoted.
pub struct CsvReportFormatter;

impl CsvReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvReportFormatter {
    fn format(&self, rows: &[ReportRow]) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(REPORT_HEADER)?;
        for row in rows.iter().filter(|row| !row.is_blank()) {
            writer.serialize(row)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e))?;
        Ok(String::from_utf8(bytes)?)
    }
}
