use clap::Parser;
use std::path::PathBuf;

/// Output path that selects standard output
pub const STDOUT_MARKER: &str = "-";

/// Build a license report for pinned Python requirements
#[derive(Parser, Debug)]
#[command(name = "license-inventory")]
#[command(version)]
#[command(
    about = "Build a CSV license report for pinned Python requirements",
    long_about = None
)]
pub struct Args {
    /// Pinned requirements manifest (`name==version` per line)
    pub requirements: PathBuf,

    /// Overrides file: `<package-name> <url>` per line
    pub overrides: PathBuf,

    /// Extra repository URLs to include, one per line
    pub extras: PathBuf,

    /// Optional pre-filled report CSV, then the output CSV path (`-` for stdout)
    #[arg(
        value_name = "[MANUAL] OUTPUT",
        num_args = 1..=2,
        required = true
    )]
    pub rest: Vec<PathBuf>,

    /// Configuration file (defaults to ./license-inventory.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Manual-entries file, present only when five positionals were given
    pub fn manual_entries(&self) -> Option<&PathBuf> {
        match self.rest.as_slice() {
            [manual, _output] => Some(manual),
            _ => None,
        }
    }

    /// Output path; `None` means standard output
    pub fn output(&self) -> Option<&PathBuf> {
        self.rest
            .last()
            .filter(|path| path.as_os_str() != STDOUT_MARKER)
    }
}
