//! The pattern catalogue: one entry per example with its intent and the
//! situations that call for it.
//!
//! The catalogue ships inside the binary (`catalog.toml` at the crate root)
//! and can also be loaded from any TOML file with the same layout:
//!
//! ```toml
//! [[pattern]]
//! key = "observer"
//! name = "Observer"
//! category = "behavioural"
//! summary = "..."
//! when_to_use = ["...", "..."]
//! ```

use crate::error::CatalogError;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

const EMBEDDED_CATALOG: &str = include_str!("../catalog.toml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Behavioural,
    Creational,
    Structural,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Behavioural,
        Category::Creational,
        Category::Structural,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Behavioural => "Behavioural",
            Category::Creational => "Creational",
            Category::Structural => "Structural",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatternEntry {
    pub key: String,
    pub name: String,
    pub category: Category,
    pub summary: String,
    pub when_to_use: Vec<String>,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(rename = "pattern", default)]
    patterns: Vec<PatternEntry>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<PatternEntry>,
}

impl Catalog {
    /// Parses the catalogue compiled into the crate.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_toml(EMBEDDED_CATALOG)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parses and validates a catalogue. Keys must be unique and every entry
    /// needs at least one "when to use" note.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;

        let mut seen = HashSet::new();
        for entry in &file.patterns {
            if !seen.insert(entry.key.as_str()) {
                return Err(CatalogError::DuplicateKey(entry.key.clone()));
            }
            if entry.when_to_use.is_empty() {
                return Err(CatalogError::EmptyRationale(entry.key.clone()));
            }
        }

        Ok(Self {
            entries: file.patterns,
        })
    }

    pub fn get(&self, key: &str) -> Result<&PatternEntry, CatalogError> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .ok_or_else(|| CatalogError::UnknownPattern(key.to_string()))
    }

    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &PatternEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
