//! List command implementation

use anyhow::Result;
use clap::Subcommand;
use std::io::{self, Write};
use std::path::PathBuf;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List named periods in lookup order
    Periods {
        /// Period table to list instead of the built-in one
        #[arg(long, value_name = "FILE")]
        exemptions: Option<PathBuf>,
    },
}

impl ListCommands {
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Periods { exemptions } => {
                let parser = super::load_parser(exemptions.as_deref())?;
                let mut out = io::stdout().lock();
                write_periods(&mut out, parser.table())
            }
        }
    }
}

/// `min max pattern` per period, in table order
fn write_periods(out: &mut impl Write, table: &epigraphy_core::ExemptionTable) -> Result<()> {
    for period in table.entries() {
        writeln!(out, "{:>6} {:>6}  {}", period.min, period.max, period.pattern)?;
    }
    out.flush()?;
    Ok(())
}
