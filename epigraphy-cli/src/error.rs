//! Error handling for the CLI application

use std::fmt;

/// CLI-specific failures
#[derive(Debug)]
pub enum CliError {
    /// No input file matched a pattern
    FileNotFound(String),
    /// Glob pattern could not be parsed
    InvalidPattern(String),
    /// Configuration file rejected
    ConfigError(String),
    /// A record in an input file could not be decoded
    InvalidRecord {
        /// File the record came from
        file: String,
        /// 1-based line for JSON lines input
        line: Option<usize>,
        /// Decoder message
        reason: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(pattern) => write!(f, "No input files match: {pattern}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidRecord {
                file,
                line: Some(line),
                reason,
            } => write!(f, "Invalid record in {file}:{line}: {reason}"),
            CliError::InvalidRecord {
                file,
                line: None,
                reason,
            } => write!(f, "Invalid records in {file}: {reason}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
