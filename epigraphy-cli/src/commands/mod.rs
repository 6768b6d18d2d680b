//! CLI command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use epigraphy_core::{DateRangeParser, ExemptionTable};
use std::path::Path;
use std::sync::Arc;

pub mod clean;
pub mod date;
pub mod list;
pub mod process;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Clean and date raw inscription records into a dataset
    Process(process::ProcessArgs),

    /// Clean a single transcription
    Clean(clean::CleanArgs),

    /// Resolve chronological descriptors to year ranges
    Date(date::DateArgs),

    /// List built-in tables
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Clean(args) => args.execute(),
            Commands::Date(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

/// Initialize logging from the `-v` count; quiet disables it
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A second initialization in the same process is a no-op
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

/// Date parser over the table at `path`, or the built-in table
pub fn load_parser(path: Option<&Path>) -> Result<DateRangeParser> {
    match path {
        Some(path) => {
            let table = ExemptionTable::from_file(path)
                .with_context(|| format!("Failed to load exemption table: {}", path.display()))?;
            log::info!("using {} periods from {}", table.len(), path.display());
            Ok(DateRangeParser::new(Arc::new(table)))
        }
        None => Ok(DateRangeParser::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: list::ListCommands::Periods { exemptions: None },
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Periods"));

        let date_cmd = Commands::Date(date::DateArgs {
            descriptors: vec!["ca. 450 BC".to_string()],
            json: false,
            exemptions: None,
        });
        assert!(format!("{:?}", date_cmd).contains("ca. 450 BC"));
    }

    #[test]
    fn test_load_parser_default() {
        let parser = load_parser(None).unwrap();
        assert_eq!(parser.table().len(), ExemptionTable::embedded().len());
    }

    #[test]
    fn test_load_parser_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("periods.toml");
        fs::write(&path, "[[period]]\npattern = \"Geometric\"\nmin = -900\nmax = -700\n").unwrap();

        let parser = load_parser(Some(&path)).unwrap();
        assert_eq!(parser.table().len(), 1);
        assert_eq!(parser.parse("Late Geometric").map(|r| r.min), Some(-900));
    }

    #[test]
    fn test_load_parser_invalid_table() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("periods.toml");
        fs::write(&path, "[[period]]\npattern = \"Geometric\"\nmin = -700\nmax = -900\n").unwrap();

        let err = load_parser(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to load exemption table"));
        assert!(format!("{err:#}").contains("invalid exemption 'Geometric'"));
    }
}
