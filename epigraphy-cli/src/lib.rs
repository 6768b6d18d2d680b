//! Epigraphy CLI library
//!
//! Command-line front end for cleaning Greek inscription transcriptions and
//! resolving their chronological descriptors into year ranges.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
