/// Formatter adapters for report output formats
mod csv_formatter;

pub use csv_formatter::CsvReportFormatter;
