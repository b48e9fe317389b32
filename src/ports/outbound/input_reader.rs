use crate::shared::Result;
use std::path::Path;

/// InputReader port for reading line-oriented input files
///
/// Abstracts access to the requirements, overrides and extras files.
pub trait InputReader {
    /// Reads the whole file as UTF-8 text
    ///
    /// # Arguments
    /// * `path` - Path of the input file
    /// * `description` - Human-readable file role used in error messages
    ///   (e.g. "requirements file")
    ///
    /// # Errors
    /// Returns an error if the file does not exist, is not a regular file,
    /// is too large, or cannot be read
    fn read_input(&self, path: &Path, description: &str) -> Result<String>;
}
