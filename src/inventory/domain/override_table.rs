use std::collections::HashMap;

/// Manually supplied package name -> source URL mapping.
///
/// Consulted before any registry heuristic. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideTable {
    entries: HashMap<String, String>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry; a later entry for the same name replaces the earlier one
    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.entries.insert(name.into(), url.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OverrideTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, url) in iter {
            table.insert(name, url);
        }
        table
    }
}
