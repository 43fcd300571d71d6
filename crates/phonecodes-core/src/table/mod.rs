//! Symbol tables: substring → substring mappings for one conversion direction.
//!
//! Tables are immutable once built and shared across conversions. The
//! embedded tables live in `src/data/*.toml` and are parsed lazily into
//! `&'static` singletons (see [`TableId::table`]).

mod embedded;
pub mod inventory;

use std::collections::{BTreeSet, HashMap};

pub use embedded::TableId;

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("missing [{0}] table")]
    MissingSection(String),
    #[error("empty key in symbol table")]
    EmptyKey,
    #[error("value for key {key:?} is not a string")]
    NonStringValue { key: String },
}

/// Mapping from source symbols (one or more chars) to destination symbols.
///
/// Values may be empty, which deletes the matched symbol. Keys are never
/// empty: `insert` rejects them and `FromIterator` drops them, since a
/// zero-length key would let the lattice advance without consuming input.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    map: HashMap<String, String>,
    /// Longest key, in chars. Bounds the lattice search window.
    max_key_chars: usize,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping, returning the previous value for `key` if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Option<String>, TableError> {
        let key = key.into();
        if key.is_empty() {
            return Err(TableError::EmptyKey);
        }
        self.max_key_chars = self.max_key_chars.max(key.chars().count());
        Ok(self.map.insert(key, value.into()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn max_key_chars(&self) -> usize {
        self.max_key_chars
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The destination symbol inventory of this table.
    pub fn values(&self) -> BTreeSet<&str> {
        self.map.values().map(String::as_str).collect()
    }

    /// Parse the `[section]` table of a TOML document into a symbol table.
    pub fn parse_toml(toml_str: &str, section: &str) -> Result<Self, TableError> {
        let doc: toml::Table = toml_str
            .parse()
            .map_err(|e: toml::de::Error| TableError::Parse(e.to_string()))?;
        let entries = doc
            .get(section)
            .and_then(toml::Value::as_table)
            .ok_or_else(|| TableError::MissingSection(section.to_string()))?;

        let mut table = SymbolTable::new();
        for (key, value) in entries {
            let value = value
                .as_str()
                .ok_or_else(|| TableError::NonStringValue { key: key.clone() })?;
            table.insert(key.as_str(), value)?;
        }
        Ok(table)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = SymbolTable::new();
        for (k, v) in iter {
            // Empty keys are skipped
            let _ = table.insert(k, v);
        }
        table
    }
}
