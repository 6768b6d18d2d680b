//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress bar over records, silent when quiet
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize the bar for `total_records`
    pub fn init_records(&mut self, total_records: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_records);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} records {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// One record built; callable from worker threads
    pub fn record_completed(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.inc(1);
        }
    }

    /// Finish with a summary of kept records
    pub fn finish(&self, kept: usize, total: usize) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("kept {kept} of {total}"));
        }
    }
}
