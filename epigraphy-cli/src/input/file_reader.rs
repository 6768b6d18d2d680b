//! Reading transcriptions and raw records

use crate::error::CliError;
use anyhow::{Context, Result};
use epigraphy_core::RawRecord;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// File reader for text and record inputs
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read `path`, or standard input when no path is given
    pub fn read_text_or_stdin(path: Option<&Path>) -> Result<String> {
        match path {
            Some(path) => Self::read_text(path),
            None => {
                let mut content = String::new();
                io::stdin()
                    .read_to_string(&mut content)
                    .context("Failed to read standard input")?;
                Ok(content)
            }
        }
    }

    /// Read raw records from a JSON array or a JSON lines file
    pub fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
        let content = Self::read_text(path)?;
        let records = parse_records(&content, &path.display().to_string())?;
        log::debug!("read {} records from {}", records.len(), path.display());
        Ok(records)
    }
}

/// Decode records; a document starting with `[` is one JSON array,
/// anything else is one record per non-blank line
pub fn parse_records(content: &str, source: &str) -> Result<Vec<RawRecord>> {
    if content.trim_start().starts_with('[') {
        return serde_json::from_str::<Vec<RawRecord>>(content).map_err(|e| {
            CliError::InvalidRecord {
                file: source.to_string(),
                line: None,
                reason: e.to_string(),
            }
            .into()
        });
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| -> Result<RawRecord> {
            serde_json::from_str(line).map_err(|e| {
                CliError::InvalidRecord {
                    file: source.to_string(),
                    line: Some(index + 1),
                    reason: e.to_string(),
                }
                .into()
            })
        })
        .collect()
}
