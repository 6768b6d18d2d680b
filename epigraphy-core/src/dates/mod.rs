//! Chronological descriptor resolution
//!
//! Turns free-text dates such as `"ca. 450 BC"`, `"408/7 BC"` or
//! `"late 2nd c. AD"` into a [`DateRange`] of signed years (BC negative,
//! no year zero correction) plus a circa flag.
//!
//! ```rust
//! use epigraphy_core::dates::{DateRange, DateRangeParser};
//!
//! let parser = DateRangeParser::default();
//! assert_eq!(
//!     parser.parse("108/7 BC"),
//!     Some(DateRange { min: -108, max: -107, circa: false })
//! );
//! assert_eq!(parser.parse("undated"), None);
//! ```

pub mod exemptions;
pub mod grammar;

pub use exemptions::{Exemption, ExemptionTable};
pub use grammar::{Era, Outcome};

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, LazyLock};

const CIRCA_WORDS: [&str; 6] = ["?", "probably", "perhaps", "perh.", "prob.", "or"];

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("valid parenthetical pattern"));

static MONTHS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Jan\.|January|Feb\.|February|Mar\.|March|Apr\.|April|May|Jun\.|June|Jul\.|July|Aug\.|August|Sept\.|September|Oct\.|October|Nov\.|November|Dec\.|December",
    )
    .expect("valid month pattern")
});

static CIRCA_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)ca(?:\W|$)").expect("valid circa pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

static DEFAULT_TABLE: LazyLock<Arc<ExemptionTable>> =
    LazyLock::new(|| Arc::new(ExemptionTable::embedded().clone()));

static ERA_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|\s)(BC|AD|a\.|p\.)(?:$|\s|\?)").expect("valid era pattern")
});

/// Resolved year range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub min: i32,
    pub max: i32,
    /// The descriptor hedges the date
    pub circa: bool,
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.min, self.max)
    }
}

/// Descriptor to [`DateRange`] resolver
///
/// Named periods in the [`ExemptionTable`] take priority over the numeric
/// grammar. Nothing here fails: an unusable descriptor yields `None`.
#[derive(Debug, Clone)]
pub struct DateRangeParser {
    table: Arc<ExemptionTable>,
}

impl DateRangeParser {
    pub fn new(table: Arc<ExemptionTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ExemptionTable {
        &self.table
    }

    /// Resolve `descriptor`
    pub fn parse(&self, descriptor: &str) -> Option<DateRange> {
        let text = PARENTHETICAL.replace_all(descriptor, "");
        let text = MONTHS.replace_all(&text, "");
        let circa = is_circa(&text);

        if let Some(period) = self.table.lookup(&text) {
            return Some(DateRange {
                min: period.min,
                max: period.max,
                circa,
            });
        }

        let text = WHITESPACE.replace_all(&text, " ");
        let text = text.trim();

        let Some(era) = ERA_MARKER
            .captures(text)
            .and_then(|caps| Era::from_token(&caps[1]))
        else {
            log::debug!("no era marker in '{descriptor}'");
            return None;
        };

        let resolved = grammar::resolve(text, era);
        if resolved.is_none() {
            log::debug!("unresolved date descriptor '{descriptor}'");
        }
        resolved.map(|(min, max)| DateRange { min, max, circa })
    }
}

impl Default for DateRangeParser {
    fn default() -> Self {
        Self::new(Arc::clone(&*DEFAULT_TABLE))
    }
}

/// Does the descriptor hedge its date?
///
/// A standalone `ca` or any of the hedge words anywhere in the text.
pub fn is_circa(text: &str) -> bool {
    CIRCA_TOKEN.is_match(text) || CIRCA_WORDS.iter().any(|word| text.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: i32, max: i32, circa: bool) -> Option<DateRange> {
        Some(DateRange { min, max, circa })
    }

    #[test]
    fn test_default_parsers_share_table() {
        let a = DateRangeParser::default();
        let b = DateRangeParser::default();
        assert!(Arc::ptr_eq(&a.table, &b.table));
        assert_eq!(a.table(), ExemptionTable::embedded());
    }

    #[test]
    fn test_exemption_priority() {
        let parser = DateRangeParser::default();
        assert_eq!(parser.parse("Classical period"), range(-479, -323, false));
        assert_eq!(parser.parse("early Roman period"), range(-200, 600, false));
        assert_eq!(parser.parse("reign of Hadrian?"), range(117, 138, true));
    }

    #[test]
    fn test_circa_detection() {
        assert!(is_circa("ca. 450 BC"));
        assert!(is_circa("after ca 300"));
        assert!(is_circa("350 BC?"));
        assert!(is_circa("perhaps 2nd c. AD"));
        assert!(is_circa("4th or 3rd c. BC"));
        assert!(!is_circa("Caria, 450 BC"));
        assert!(!is_circa("Classical period"));
    }

    #[test]
    fn test_numeric() {
        let parser = DateRangeParser::default();
        assert_eq!(parser.parse("ca. 450 BC"), range(-450, -450, true));
        assert_eq!(parser.parse("108/7 BC"), range(-108, -107, false));
        assert_eq!(parser.parse("AD 43"), range(43, 43, false));
        assert_eq!(parser.parse("mid-2nd c. AD"), range(126, 175, false));
    }

    #[test]
    fn test_preprocessing() {
        let parser = DateRangeParser::default();
        assert_eq!(parser.parse("17 March 212 AD"), range(212, 212, false));
        assert_eq!(parser.parse("  329/8   BC (Ath.)"), range(-329, -328, false));
        assert_eq!(parser.parse("(Roman period) 20 AD"), range(20, 20, false));
    }

    #[test]
    fn test_unresolved() {
        let parser = DateRangeParser::default();
        assert_eq!(parser.parse(""), None);
        assert_eq!(parser.parse("undated"), None);
        assert_eq!(parser.parse("450 bce"), None);
        assert_eq!(parser.parse("400-450 BC"), None);
    }

    #[test]
    fn test_custom_table() {
        let table = ExemptionTable::new(vec![Exemption {
            pattern: "Minoan".to_string(),
            min: -3000,
            max: -1100,
        }])
        .unwrap();
        let parser = DateRangeParser::new(Arc::new(table));
        assert_eq!(parser.parse("Late Minoan IIIA"), range(-3000, -1100, false));
        assert_eq!(parser.parse("Classical period"), None);
    }

    #[test]
    fn test_display() {
        let date = DateRange {
            min: -108,
            max: -107,
            circa: false,
        };
        assert_eq!(date.to_string(), "-108 -107");
    }
}
