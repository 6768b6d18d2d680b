//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::Result;
use glob::glob;
use std::collections::HashSet;
use std::path::PathBuf;

/// Expand patterns to files, in pattern order
///
/// Matches of one pattern are sorted; a file matched twice keeps its first
/// position. Every pattern must match at least one file.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut seen = HashSet::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        let mut matched: Vec<PathBuf> = paths
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .collect();
        if matched.is_empty() {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }
        matched.sort();

        for path in matched {
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    Ok(files)
}
