//! Named period table consulted before numeric parsing

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

static EMBEDDED_TABLE: OnceLock<ExemptionTable> = OnceLock::new();

const EMBEDDED_TOML: &str = include_str!("../../configs/exemptions.toml");

/// A named period with a fixed year range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exemption {
    pub pattern: String,
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Deserialize)]
struct ExemptionFile {
    #[serde(default)]
    period: Vec<Exemption>,
}

/// Ordered period table
///
/// Lookup returns the first entry in definition order whose pattern occurs
/// in the descriptor, ignoring case. A pattern that is a substring of a
/// later one shadows it: with `Roman period` listed before
/// `early Roman period`, the latter never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExemptionTable {
    entries: Vec<Exemption>,
    folded: Vec<String>,
}

impl ExemptionTable {
    /// Build a table, validating each entry
    pub fn new(entries: Vec<Exemption>) -> Result<Self> {
        for entry in &entries {
            if entry.pattern.trim().is_empty() {
                return Err(CoreError::InvalidExemption {
                    pattern: entry.pattern.clone(),
                    reason: "empty pattern".to_string(),
                });
            }
            if entry.min > entry.max {
                return Err(CoreError::InvalidExemption {
                    pattern: entry.pattern.clone(),
                    reason: format!("min {} exceeds max {}", entry.min, entry.max),
                });
            }
        }

        let folded = entries.iter().map(|e| e.pattern.to_lowercase()).collect();
        Ok(Self { entries, folded })
    }

    /// The table shipped with the crate, parsed once per process
    pub fn embedded() -> &'static ExemptionTable {
        EMBEDDED_TABLE.get_or_init(|| {
            Self::from_toml_str(EMBEDDED_TOML).expect("embedded exemption table is valid")
        })
    }

    /// Parse a `[[period]]` table from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ExemptionFile = toml::from_str(content)?;
        let table = Self::new(file.period)?;
        log::debug!("loaded exemption table with {} periods", table.len());
        Ok(table)
    }

    /// Read a `[[period]]` table from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// First entry whose pattern occurs in `descriptor`
    pub fn lookup(&self, descriptor: &str) -> Option<&Exemption> {
        let haystack = descriptor.to_lowercase();
        self.folded
            .iter()
            .position(|pattern| haystack.contains(pattern.as_str()))
            .map(|index| &self.entries[index])
    }

    pub fn entries(&self) -> &[Exemption] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
