//! Process command implementation

use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{open_output, DatasetWriter, FrequencyCounter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use epigraphy_core::{DateRangeParser, InscriptionCleaner, RawRecord, Record};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input record files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Dataset output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Minimum cleaned length, not counting missing-character markers
    #[arg(long, value_name = "N")]
    pub min_text_len: Option<usize>,

    /// Word frequency output file
    #[arg(long, value_name = "FILE")]
    pub word_list: Option<PathBuf>,

    /// Main region frequency output file
    #[arg(long, value_name = "FILE")]
    pub region_main_list: Option<PathBuf>,

    /// Sub region frequency output file
    #[arg(long, value_name = "FILE")]
    pub region_sub_list: Option<PathBuf>,

    /// Worker threads (default: all cores)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Period table replacing the built-in one
    #[arg(long, value_name = "FILE")]
    pub exemptions: Option<PathBuf>,

    /// Pretty-print the dataset JSON
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings after merging the config file with command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    min_text_len: usize,
    threads: usize,
    exemptions: Option<PathBuf>,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting record processing");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let settings = self.settings(&config);
        log::debug!("Settings: {:?}", settings);

        let files = resolve_patterns(&self.input)?;
        let mut raw_records = Vec::new();
        for file in &files {
            let records = FileReader::read_records(file)?;
            log::info!("{}: {} records", file.display(), records.len());
            raw_records.extend(records);
        }

        let cleaner = InscriptionCleaner::greek();
        let parser = super::load_parser(settings.exemptions.as_deref())?;

        let total = raw_records.len();
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_records(total as u64);

        let records = build_records(raw_records, &cleaner, &parser, settings.threads, &progress)?;
        let records = filter_short(records, &cleaner, settings.min_text_len);
        progress.finish(records.len(), total);

        let writer = open_output(self.output.as_deref())?;
        DatasetWriter::new(writer)
            .pretty(self.pretty)
            .write(&records)?;

        self.write_frequencies(&records)?;

        if !self.quiet {
            let dated = records.iter().filter(|r| r.date_min.is_some()).count();
            eprintln!(
                "Processed {} records from {} files: kept {}, dated {}",
                total,
                files.len(),
                records.len(),
                dated
            );
        }

        Ok(())
    }

    fn settings(&self, config: &CliConfig) -> Settings {
        let threads = self
            .threads
            .filter(|&n| n > 0)
            .or(Some(config.performance.worker_threads).filter(|&n| n > 0))
            .unwrap_or_else(num_cpus::get);

        Settings {
            min_text_len: self.min_text_len.unwrap_or(config.processing.min_text_len),
            threads,
            exemptions: self
                .exemptions
                .clone()
                .or_else(|| config.processing.exemptions.clone()),
        }
    }

    fn write_frequencies(&self, records: &[Record]) -> Result<()> {
        if let Some(path) = &self.word_list {
            let mut words = FrequencyCounter::new();
            for record in records {
                words.add_words(&record.text);
            }
            write_counter(&words, path, "word")?;
        }

        if let Some(path) = &self.region_main_list {
            let mut regions = FrequencyCounter::new();
            for record in records {
                regions.add(&record.region_main_key());
            }
            write_counter(&regions, path, "main region")?;
        }

        if let Some(path) = &self.region_sub_list {
            let mut regions = FrequencyCounter::new();
            for record in records {
                regions.add(&record.region_sub_key());
            }
            write_counter(&regions, path, "sub region")?;
        }

        Ok(())
    }
}

fn write_counter(counter: &FrequencyCounter, path: &Path, kind: &str) -> Result<()> {
    counter.write_to(path)?;
    log::info!("wrote {} {} entries to {}", counter.len(), kind, path.display());
    Ok(())
}

/// Build records on a dedicated pool, keeping input order
fn build_records(
    raw_records: Vec<RawRecord>,
    cleaner: &InscriptionCleaner,
    parser: &DateRangeParser,
    threads: usize,
    progress: &ProgressReporter,
) -> Result<Vec<Record>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("Failed to build worker pool")?;

    Ok(pool.install(|| {
        raw_records
            .into_par_iter()
            .map(|raw| {
                let record = Record::build(raw, cleaner, parser);
                progress.record_completed();
                record
            })
            .collect()
    }))
}

/// Records whose text is long enough once markers are discounted
fn filter_short(records: Vec<Record>, cleaner: &InscriptionCleaner, min_text_len: usize) -> Vec<Record> {
    let before = records.len();
    let kept: Vec<Record> = records
        .into_iter()
        .filter(|r| cleaner.significant_len(&r.text) >= min_text_len)
        .collect();
    log::debug!("dropped {} short records", before - kept.len());
    kept
}
