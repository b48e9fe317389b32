use crate::inventory::domain::{Requirement, RequirementLine};
use crate::shared::error::InventoryError;
use crate::shared::Result;

/// Prefixes marking an editable install, with or without a separator
/// (`-e ./path`, `-e./path`, `--editable git+https://...`)
const EDITABLE_MARKERS: [&str; 2] = ["--editable", "-e"];

/// Delimiter introducing an environment marker (`pkg==1.0; python_version < "3.8"`)
const MARKER_DELIMITER: char = ';';

const PIN_OPERATOR: &str = "==";

/// RequirementParser turns manifest lines into pinned requirements
pub struct RequirementParser;

impl RequirementParser {
    /// Parses one raw manifest line.
    ///
    /// # Returns
    /// - `Pinned` for `name==version` (environment marker stripped)
    /// - `Editable` for editable-install lines
    /// - `Ignored` for blank and comment-only lines
    ///
    /// # Errors
    /// Returns `InventoryError::RequirementParse` with the original line if the
    /// line is not a valid pin
    pub fn parse(line: &str) -> Result<RequirementLine> {
        let stripped = line.trim();

        if stripped.is_empty() || stripped.starts_with('#') {
            return Ok(RequirementLine::Ignored);
        }

        if Self::is_editable(stripped) {
            return Ok(RequirementLine::Editable(stripped.to_string()));
        }

        let pinned = match stripped.split_once(MARKER_DELIMITER) {
            Some((before, _marker)) => before,
            None => stripped,
        };

        let parse_error = || -> anyhow::Error {
            InventoryError::RequirementParse {
                line: line.to_string(),
            }
            .into()
        };

        let (name, version) = pinned.split_once(PIN_OPERATOR).ok_or_else(parse_error)?;
        let requirement = Requirement::new(name.trim().to_string(), version.trim().to_string())
            .map_err(|_| parse_error())?;

        Ok(RequirementLine::Pinned(requirement))
    }

    fn is_editable(stripped: &str) -> bool {
        EDITABLE_MARKERS
            .iter()
            .any(|marker| stripped.starts_with(marker))
    }
}
