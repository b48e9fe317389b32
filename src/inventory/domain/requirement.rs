use crate::shared::error::InventoryError;
use crate::shared::Result;
use std::collections::BTreeMap;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Maximum length for package versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// Labeled project URLs declared in registry metadata (label -> URL)
pub type ProjectUrls = BTreeMap<String, String>;

/// NewType wrapper for package name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            return Err(validation("Package name cannot be empty"));
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            return Err(validation(format!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            )));
        }

        let (base, extras) = match name.split_once('[') {
            Some((base, extras)) => (base, Some(extras)),
            None => (name.as_str(), None),
        };

        // The base name ends up in a registry URL path
        let valid_base = base.starts_with(|c: char| c.is_ascii_alphanumeric())
            && base.ends_with(|c: char| c.is_ascii_alphanumeric())
            && base
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
        if !valid_base {
            return Err(validation(format!(
                "Package name '{}' contains invalid characters. Names must start and end with a letter or digit and contain only alphanumerics, hyphens, underscores, and dots.",
                name
            )));
        }

        if let Some(extras) = extras {
            let closed = extras
                .strip_suffix(']')
                .is_some_and(|inner| !inner.contains(['[', ']']));
            if !closed {
                return Err(validation(format!(
                    "Package name '{}' has a malformed extras list",
                    name
                )));
            }
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name used for registry lookups, without an extras suffix
    /// (`requests[socks]` -> `requests`).
    pub fn registry_name(&self) -> &str {
        match self.0.split_once('[') {
            Some((base, _)) => base,
            None => &self.0,
        }
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for an opaque package version
///
/// Versions are not interpreted; only emptiness, length and embedded
/// whitespace are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        if version.is_empty() {
            return Err(validation("Package version cannot be empty"));
        }

        if version.len() > MAX_VERSION_LENGTH {
            return Err(validation(format!(
                "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            )));
        }

        if version.chars().any(char::is_whitespace) {
            return Err(validation(format!(
                "Package version '{}' contains whitespace",
                version
            )));
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pinned requirement taken from one manifest line
#[derive(Debug, Clone, PartialEq)]
pub struct Requirement {
    name: PackageName,
    version: Version,
}

impl Requirement {
    pub fn new(name: String, version: String) -> Result<Self> {
        Ok(Self {
            name: PackageName::new(name)?,
            version: Version::new(version)?,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn package_name(&self) -> &PackageName {
        &self.name
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }
}

/// Outcome of parsing one manifest line
#[derive(Debug, Clone, PartialEq)]
pub enum RequirementLine {
    /// A `name==version` requirement
    Pinned(Requirement),
    /// An editable install (`-e ...`); carries the stripped line for logging
    Editable(String),
    /// Blank or comment-only line
    Ignored,
}

fn validation(message: impl Into<String>) -> anyhow::Error {
    InventoryError::Validation {
        message: message.into(),
    }
    .into()
}
