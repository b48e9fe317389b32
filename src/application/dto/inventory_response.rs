use crate::inventory::domain::ReportRow;

/// Counters collected during one inventory run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStats {
    pub manual_rows: usize,
    pub requirement_rows: usize,
    pub extra_rows: usize,
    pub skipped_editable: usize,
    pub unresolved_sources: usize,
    pub unresolved_licenses: usize,
}

/// InventoryResponse - Ordered report rows produced by the use case
///
/// Rows are ordered manual entries first, then manifest requirements, then
/// extra entries.
#[derive(Debug, Clone)]
pub struct InventoryResponse {
    pub rows: Vec<ReportRow>,
    pub stats: InventoryStats,
}

impl InventoryResponse {
    pub fn new(rows: Vec<ReportRow>, stats: InventoryStats) -> Self {
        Self { rows, stats }
    }
}
