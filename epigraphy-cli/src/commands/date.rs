//! Date command implementation

use anyhow::Result;
use clap::Args;
use epigraphy_core::{DateRange, DateRangeParser};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the date command
#[derive(Debug, Args)]
pub struct DateArgs {
    /// Descriptors such as "ca. 450 BC" or "late 2nd c. AD"
    #[arg(value_name = "DESCRIPTOR", required = true)]
    pub descriptors: Vec<String>,

    /// Print a JSON array instead of one line per descriptor
    #[arg(long)]
    pub json: bool,

    /// Period table replacing the built-in one
    #[arg(long, value_name = "FILE")]
    pub exemptions: Option<PathBuf>,
}

/// One resolved descriptor, null fields when unresolved
#[derive(Debug, Serialize)]
struct Resolution<'a> {
    descriptor: &'a str,
    date_min: Option<i32>,
    date_max: Option<i32>,
    date_circa: Option<bool>,
}

impl<'a> Resolution<'a> {
    fn new(descriptor: &'a str, range: Option<DateRange>) -> Self {
        Self {
            descriptor,
            date_min: range.map(|r| r.min),
            date_max: range.map(|r| r.max),
            date_circa: range.map(|r| r.circa),
        }
    }
}

impl DateArgs {
    /// Execute the date command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(0, false);
        let parser = super::load_parser(self.exemptions.as_deref())?;
        let mut out = io::stdout().lock();
        self.write_resolutions(&mut out, &parser)
    }

    fn write_resolutions(&self, out: &mut impl Write, parser: &DateRangeParser) -> Result<()> {
        let resolutions: Vec<Resolution<'_>> = self
            .descriptors
            .iter()
            .map(|d| Resolution::new(d, parser.parse(d)))
            .collect();

        if self.json {
            serde_json::to_writer_pretty(&mut *out, &resolutions)?;
            writeln!(out)?;
        } else {
            for resolution in &resolutions {
                match (resolution.date_min, resolution.date_max, resolution.date_circa) {
                    (Some(min), Some(max), Some(circa)) => writeln!(out, "{min} {max} {circa}")?,
                    _ => writeln!(out, "unresolved")?,
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}
