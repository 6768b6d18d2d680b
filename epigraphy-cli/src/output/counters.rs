//! Frequency lists written next to the dataset

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid word pattern"));

/// Occurrence counts keyed by string
///
/// Entries are ranked by count, ties keeping first-seen order.
#[derive(Debug, Default)]
pub struct FrequencyCounter {
    counts: HashMap<String, (usize, usize)>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`
    pub fn add(&mut self, key: &str) {
        let next_rank = self.counts.len();
        self.counts
            .entry(key.to_string())
            .or_insert((0, next_rank))
            .0 += 1;
    }

    /// Count every word of `text`
    pub fn add_words(&mut self, text: &str) {
        for word in WORD.find_iter(text) {
            self.add(word.as_str());
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries, most common first
    pub fn most_common(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(key, &(count, first_seen))| (key.as_str(), count, first_seen))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        entries
            .into_iter()
            .map(|(key, count, _)| (key, count))
            .collect()
    }

    /// `key;count` lines, most common first
    pub fn render(&self) -> String {
        self.most_common()
            .into_iter()
            .map(|(key, count)| format!("{key};{count}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write [`Self::render`] to `path`
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())
            .with_context(|| format!("Failed to write frequency list: {}", path.display()))
    }
}
