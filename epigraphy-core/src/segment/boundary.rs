//! Rule-based sentence boundary detection

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Range;
use std::path::Path;

const EMBEDDED_CONFIG: &str = include_str!("../../configs/boundary.toml");

/// Splits text into sentence spans
///
/// Spans are byte ranges into the input, ascending and non-overlapping.
/// Implementations must be deterministic.
pub trait SentenceBoundary: Send + Sync + std::fmt::Debug {
    /// Sentence spans of `text`
    fn spans(&self, text: &str) -> Vec<Range<usize>>;
}

/// TOML schema for boundary rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryConfig {
    pub metadata: MetadataConfig,
    pub terminators: TerminatorConfig,
    #[serde(default)]
    pub abbreviations: AbbreviationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminatorConfig {
    pub chars: Vec<char>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbbreviationConfig {
    #[serde(default)]
    pub single_letter: bool,
    #[serde(default)]
    pub words: Vec<String>,
}

impl BoundaryConfig {
    /// Rules shipped with the crate
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }

    /// Parse rules from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read rules from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// Abbreviation-aware splitter driven by [`BoundaryConfig`]
///
/// A run of terminators closes a sentence when it is followed by whitespace
/// or the end of the text, unless the word ending at the run is a known
/// abbreviation.
#[derive(Debug, Clone)]
pub struct RuleBasedBoundary {
    terminators: HashSet<char>,
    abbreviations: HashSet<String>,
    single_letter: bool,
}

impl RuleBasedBoundary {
    /// Build the splitter from configuration
    pub fn from_config(config: &BoundaryConfig) -> Self {
        Self {
            terminators: config.terminators.chars.iter().copied().collect(),
            abbreviations: config
                .abbreviations
                .words
                .iter()
                .map(|w| w.trim_end_matches('.').to_lowercase())
                .collect(),
            single_letter: config.abbreviations.single_letter,
        }
    }

    fn is_terminator(&self, ch: char) -> bool {
        self.terminators.contains(&ch)
    }

    /// Does `prefix` end in an abbreviation?
    fn ends_with_abbreviation(&self, prefix: &str) -> bool {
        let word = prefix.rsplit(char::is_whitespace).next().unwrap_or("");
        if word.is_empty() {
            return false;
        }
        if self.single_letter {
            let mut chars = word.chars();
            if matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic()) {
                return true;
            }
        }
        self.abbreviations.contains(&word.to_lowercase())
    }
}

impl Default for RuleBasedBoundary {
    fn default() -> Self {
        let config = BoundaryConfig::embedded().expect("embedded boundary config is valid");
        Self::from_config(&config)
    }
}

impl SentenceBoundary for RuleBasedBoundary {
    fn spans(&self, text: &str) -> Vec<Range<usize>> {
        let mut spans = Vec::new();
        let mut start: Option<usize> = None;
        let mut chars = text.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            let sentence_start = match start {
                Some(s) => s,
                None if ch.is_whitespace() => continue,
                None => {
                    start = Some(pos);
                    pos
                }
            };

            if !self.is_terminator(ch) {
                continue;
            }

            let mut end = pos + ch.len_utf8();
            while let Some(&(next_pos, next)) = chars.peek() {
                if !self.is_terminator(next) {
                    break;
                }
                end = next_pos + next.len_utf8();
                chars.next();
            }

            let at_break = chars.peek().map_or(true, |&(_, next)| next.is_whitespace());
            if at_break && !self.ends_with_abbreviation(&text[sentence_start..pos]) {
                spans.push(sentence_start..end);
                start = None;
            }
        }

        if let Some(s) = start {
            let end = text.trim_end().len();
            if end > s {
                spans.push(s..end);
            }
        }

        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences<'a>(boundary: &RuleBasedBoundary, text: &'a str) -> Vec<&'a str> {
        boundary.spans(text).into_iter().map(|r| &text[r]).collect()
    }

    #[test]
    fn test_embedded_config() {
        let config = BoundaryConfig::embedded().unwrap();
        assert_eq!(config.metadata.code, "grc");
        assert_eq!(config.terminators.chars, vec!['.']);
    }

    #[test]
    fn test_split_on_terminator() {
        let boundary = RuleBasedBoundary::default();
        assert_eq!(
            sentences(&boundary, "ἔδοξεν τῆι βουλῆι. ἐπεστάτει ἀρχ. "),
            vec!["ἔδοξεν τῆι βουλῆι.", "ἐπεστάτει ἀρχ."]
        );
    }

    #[test]
    fn test_terminator_inside_word_is_not_boundary() {
        let boundary = RuleBasedBoundary::default();
        assert_eq!(sentences(&boundary, "αβ.γδ εζ"), vec!["αβ.γδ εζ"]);
    }

    #[test]
    fn test_terminator_run_stays_together() {
        let boundary = RuleBasedBoundary::default();
        assert_eq!(sentences(&boundary, "αβ... γδ."), vec!["αβ...", "γδ."]);
    }

    #[test]
    fn test_abbreviations() {
        let config = BoundaryConfig::from_toml_str(
            r#"
            [metadata]
            code = "grc"
            name = "Test"

            [terminators]
            chars = ["."]

            [abbreviations]
            single_letter = true
            words = ["ἀρχ."]
        "#,
        )
        .unwrap();
        let boundary = RuleBasedBoundary::from_config(&config);

        assert_eq!(
            sentences(&boundary, "ἐπὶ ἀρχ. Νικίου. ἔδοξεν α. β."),
            vec!["ἐπὶ ἀρχ. Νικίου.", "ἔδοξεν α. β."]
        );
    }

    #[test]
    fn test_empty_and_blank() {
        let boundary = RuleBasedBoundary::default();
        assert!(boundary.spans("").is_empty());
        assert!(boundary.spans("   ").is_empty());
    }
}
