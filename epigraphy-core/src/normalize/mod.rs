//! Transcription normalizer
//!
//! Turns an editorially annotated transcription into canonical text over a
//! closed [`Alphabet`]. The work is split into 28 pure `text -> text` stages
//! applied in a fixed order; every stage relies on what the earlier ones have
//! already removed, so the table order is part of the contract.
//!
//! ```rust
//! use epigraphy_core::normalize::TextNormalizer;
//!
//! let normalizer = TextNormalizer::greek();
//! let text = normalizer.normalize("{ΤΟΥ} (?) [ΣΩΚΡΑΤΗΣ]");
//! assert_eq!(text, "σωκρατησ");
//! ```
//!
//! Two properties hold for every input: the output contains only symbols of
//! the alphabet, and normalizing the output again changes nothing.

pub mod stages;

use crate::alphabet::{Alphabet, GreekAlphabet};
use crate::error::{CoreError, Result};
use regex::Regex;
use std::sync::Arc;

/// One named rewrite step
#[derive(Clone, Copy)]
pub struct Stage {
    /// Stable identifier used in logs and tests
    pub name: &'static str,
    /// The rewrite itself
    pub apply: fn(&str, &StageContext<'_>) -> String,
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage").field("name", &self.name).finish()
    }
}

/// The pipeline, in application order
pub static STAGES: [Stage; 28] = [
    Stage { name: "drop_citation_lines", apply: stages::drop_citation_lines },
    Stage { name: "unify_brackets", apply: stages::unify_brackets },
    Stage { name: "truncate_at_vacat", apply: stages::truncate_at_vacat },
    Stage { name: "colon_to_full_stop", apply: stages::colon_to_full_stop },
    Stage { name: "join_hyphenated_lines", apply: stages::join_hyphenated_lines },
    Stage { name: "strip_greek_numerals", apply: stages::strip_greek_numerals },
    Stage { name: "collapse_separators", apply: stages::collapse_separators },
    Stage { name: "drop_uncertainty_marks", apply: stages::drop_uncertainty_marks },
    Stage { name: "drop_deletions", apply: stages::drop_deletions },
    Stage { name: "unwrap_insertions", apply: stages::unwrap_insertions },
    Stage { name: "strip_latin_line_numbers", apply: stages::strip_latin_line_numbers },
    Stage { name: "lowercase", apply: stages::lowercase },
    Stage { name: "alphabet_filter", apply: stages::alphabet_filter },
    Stage { name: "drop_vacat_counts", apply: stages::drop_vacat_counts },
    Stage { name: "resolve_parentheses", apply: stages::resolve_parentheses },
    Stage { name: "unify_lunate_sigma", apply: stages::unify_lunate_sigma },
    Stage { name: "drop_latin_lines", apply: stages::drop_latin_lines },
    Stage { name: "unify_dashes", apply: stages::unify_dashes },
    Stage { name: "expand_gap_counts", apply: stages::expand_gap_counts },
    Stage { name: "mark_missing", apply: stages::mark_missing },
    Stage { name: "join_bracket_pairs", apply: stages::join_bracket_pairs },
    Stage { name: "whitelist", apply: stages::whitelist },
    Stage { name: "collapse_numbers", apply: stages::collapse_numbers },
    Stage { name: "drop_empty_brackets", apply: stages::drop_empty_brackets },
    Stage { name: "tighten_punctuation", apply: stages::tighten_punctuation },
    Stage { name: "trim_leading", apply: stages::trim_leading },
    Stage { name: "dedupe_punctuation", apply: stages::dedupe_punctuation },
    Stage { name: "collapse_whitespace", apply: stages::collapse_whitespace },
];

/// Patterns that depend on the alphabet's punctuation and markers
#[derive(Debug, Clone)]
pub struct AlphabetPatterns {
    space_before_punctuation: Regex,
    repeated_punctuation: Regex,
    missing_run: Regex,
}

impl AlphabetPatterns {
    /// Compile the patterns for `alphabet`
    pub fn compile(alphabet: &dyn Alphabet) -> Result<Self> {
        if alphabet.punctuation().is_empty() {
            return Err(CoreError::Config(format!(
                "alphabet '{}' defines no punctuation",
                alphabet.name()
            )));
        }

        let punctuation: String = alphabet
            .punctuation()
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        let closing = format!(
            "{punctuation}{}",
            regex::escape(&alphabet.end_marker().to_string())
        );
        let missing = regex::escape(&alphabet.missing().to_string());

        Ok(Self {
            space_before_punctuation: Regex::new(&format!(r"\s+([{closing}])"))?,
            repeated_punctuation: Regex::new(&format!("([{punctuation}])+"))?,
            missing_run: Regex::new(&format!(r"{missing}(?:\s+{missing})+"))?,
        })
    }
}

/// What a stage may consult besides its input
#[derive(Debug, Clone, Copy)]
pub struct StageContext<'a> {
    /// Target inventory
    pub alphabet: &'a dyn Alphabet,
    patterns: &'a AlphabetPatterns,
}

/// Ordered stage pipeline bound to one alphabet
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    alphabet: Arc<dyn Alphabet>,
    patterns: AlphabetPatterns,
}

impl TextNormalizer {
    /// Create a normalizer for `alphabet`
    pub fn new(alphabet: Arc<dyn Alphabet>) -> Result<Self> {
        let patterns = AlphabetPatterns::compile(alphabet.as_ref())?;
        Ok(Self { alphabet, patterns })
    }

    /// Normalizer over the built-in Greek alphabet
    pub fn greek() -> Self {
        Self::new(Arc::new(GreekAlphabet::new())).expect("Greek alphabet patterns are valid")
    }

    /// The alphabet this normalizer targets
    pub fn alphabet(&self) -> &Arc<dyn Alphabet> {
        &self.alphabet
    }

    /// Context handed to each stage
    pub fn context(&self) -> StageContext<'_> {
        StageContext {
            alphabet: self.alphabet.as_ref(),
            patterns: &self.patterns,
        }
    }

    /// Run every stage over `raw`
    pub fn normalize(&self, raw: &str) -> String {
        self.run_stages(raw, STAGES.len())
    }

    /// Run the first `count` stages only
    pub fn run_stages(&self, raw: &str, count: usize) -> String {
        let ctx = self.context();
        let trace = log::log_enabled!(log::Level::Trace);

        STAGES
            .iter()
            .take(count)
            .enumerate()
            .fold(raw.to_string(), |text, (index, stage)| {
                let next = (stage.apply)(&text, &ctx);
                if trace && next != text {
                    log::trace!("stage {} ({}) rewrote text", index + 1, stage.name);
                }
                next
            })
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::greek()
    }
}
