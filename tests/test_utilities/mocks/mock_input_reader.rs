use license_inventory::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock InputReader serving file contents from memory
#[derive(Default)]
pub struct MockInputReader {
    pub files: HashMap<PathBuf, String>,
}

impl MockInputReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl InputReader for MockInputReader {
    fn read_input(&self, path: &Path, description: &str) -> Result<String> {
        match self.files.get(path) {
            Some(content) => Ok(content.clone()),
            None => anyhow::bail!("Mock {} not found: {}", description, path.display()),
        }
    }
}

/// Mock ManualEntriesReader returning fixed rows
#[derive(Default)]
pub struct MockManualEntriesReader {
    pub rows: Vec<ReportRow>,
}

impl MockManualEntriesReader {
    pub fn new(rows: Vec<ReportRow>) -> Self {
        Self { rows }
    }
}

impl ManualEntriesReader for MockManualEntriesReader {
    fn read_manual_entries(&self, _path: &Path) -> Result<Vec<ReportRow>> {
        Ok(self.rows.clone())
    }
}
