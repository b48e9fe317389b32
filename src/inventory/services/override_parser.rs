use crate::inventory::domain::OverrideTable;
use crate::shared::error::InventoryError;
use crate::shared::Result;

/// OverrideParser builds the override table from `name url` lines
pub struct OverrideParser;

impl OverrideParser {
    /// Parses the whole overrides file content.
    ///
    /// Blank and `#` comment lines are ignored. Every other line must contain
    /// exactly two whitespace-separated tokens. Duplicates: last one wins.
    ///
    /// # Errors
    /// Returns `InventoryError::OverrideParse` for the first malformed line
    pub fn parse(content: &str) -> Result<OverrideTable> {
        let mut table = OverrideTable::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            log::info!("Override {}", line);

            let tokens: Vec<&str> = line.split_whitespace().collect();
            let [name, url] = tokens.as_slice() else {
                return Err(InventoryError::OverrideParse {
                    line_number: index + 1,
                    line: raw.to_string(),
                }
                .into());
            };

            table.insert(*name, *url);
        }

        Ok(table)
    }
}
