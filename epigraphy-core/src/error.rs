//! Configuration error types
//!
//! Cleaning and date resolution never fail on data. Errors only arise while
//! building the read-only tables those components run on.

use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed configuration document
    #[error("configuration error: {0}")]
    Config(String),

    /// Exemption entry that cannot produce a valid range
    #[error("invalid exemption '{pattern}': {reason}")]
    InvalidExemption {
        /// Pattern of the offending entry
        pattern: String,
        /// Why the entry was rejected
        reason: String,
    },

    /// Pattern derived from configuration failed to compile
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// I/O error while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::Config(err.to_string())
    }
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, CoreError>;
