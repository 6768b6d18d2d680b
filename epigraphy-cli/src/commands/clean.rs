//! Clean command implementation

use crate::input::FileReader;
use anyhow::Result;
use clap::Args;
use epigraphy_core::InscriptionCleaner;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the clean command
#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Transcription file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Stop after normalization, keeping sentence punctuation and accents
    #[arg(long)]
    pub normalize_only: bool,
}

impl CleanArgs {
    /// Execute the clean command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(0, false);
        let raw = FileReader::read_text_or_stdin(self.input.as_deref())?;
        let cleaner = InscriptionCleaner::greek();

        let mut out = io::stdout().lock();
        writeln!(out, "{}", self.render(&cleaner, &raw))?;
        out.flush()?;
        Ok(())
    }

    fn render(&self, cleaner: &InscriptionCleaner, raw: &str) -> String {
        if self.normalize_only {
            cleaner.normalizer().normalize(raw)
        } else {
            cleaner.clean(raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_modes() {
        let cleaner = InscriptionCleaner::greek();
        let raw = "ΤΗΙ ΒΟΥΛΗΙ : ΚΑΙ ΤΩΙ ΔΗΜΩΙ";

        let full = CleanArgs {
            input: None,
            normalize_only: false,
        };
        assert_eq!(full.render(&cleaner, raw), "τηι βουληι. και τωι δημωι.");

        let normalized = CleanArgs {
            input: None,
            normalize_only: true,
        };
        assert_eq!(normalized.render(&cleaner, raw), "τηι βουληι. και τωι δημωι");
    }
}
