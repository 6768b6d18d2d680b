//! Inscription records and date extraction from their metadata

use crate::dates::{DateRange, DateRangeParser};
use crate::pipeline::InscriptionCleaner;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Region id used when a record carries no region
pub const UNKNOWN_REGION: i64 = -1;

/// Separator between metadata clauses
pub const CLAUSE_SEPARATOR: char = '—';

static DATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\W(BC|AD|period|reign|a\.|p\.|aet\.)(?:\W|$)").expect("valid date token pattern")
});

static PAGE_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+\d").expect("valid page reference pattern"));

fn unknown_region() -> i64 {
    UNKNOWN_REGION
}

/// An inscription as extracted from its source page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: i64,
    /// Transcription with editorial markup
    pub text: String,
    #[serde(default)]
    pub metadata: String,
    #[serde(default = "unknown_region")]
    pub region_main_id: i64,
    #[serde(default)]
    pub region_main: String,
    #[serde(default = "unknown_region")]
    pub region_sub_id: i64,
    #[serde(default)]
    pub region_sub: String,
}

impl Default for RawRecord {
    fn default() -> Self {
        Self {
            id: 0,
            text: String::new(),
            metadata: String::new(),
            region_main_id: UNKNOWN_REGION,
            region_main: String::new(),
            region_sub_id: UNKNOWN_REGION,
            region_sub: String::new(),
        }
    }
}

/// A cleaned, dated inscription
///
/// An unresolved date leaves `date_min`, `date_max` and `date_circa` all
/// `None`, serialized as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub text: String,
    pub metadata: String,
    pub region_main_id: i64,
    pub region_main: String,
    pub region_sub_id: i64,
    pub region_sub: String,
    pub date_str: String,
    pub date_min: Option<i32>,
    pub date_max: Option<i32>,
    pub date_circa: Option<bool>,
}

impl Record {
    /// Clean the transcription and date the record from its metadata
    pub fn build(raw: RawRecord, cleaner: &InscriptionCleaner, parser: &DateRangeParser) -> Self {
        let text = cleaner.clean(&raw.text);
        let date = extract_date(&raw.metadata, parser);

        Self {
            id: raw.id,
            text,
            metadata: raw.metadata,
            region_main_id: raw.region_main_id,
            region_main: raw.region_main,
            region_sub_id: raw.region_sub_id,
            region_sub: raw.region_sub,
            date_str: date.date_str,
            date_min: date.range.map(|r| r.min),
            date_max: date.range.map(|r| r.max),
            date_circa: date.range.map(|r| r.circa),
        }
    }

    pub fn date_range(&self) -> Option<DateRange> {
        match (self.date_min, self.date_max) {
            (Some(min), Some(max)) => Some(DateRange {
                min,
                max,
                circa: self.date_circa.unwrap_or(false),
            }),
            _ => None,
        }
    }

    /// Frequency key of the main region, `name_id`
    pub fn region_main_key(&self) -> String {
        format!("{}_{}", self.region_main, self.region_main_id)
    }

    /// Frequency key of the sub region, `name_id`
    pub fn region_sub_key(&self) -> String {
        format!("{}_{}", self.region_sub, self.region_sub_id)
    }
}

/// Date information found in a metadata line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateExtraction {
    /// Last clause that looks like a date
    pub date_str: String,
    /// Range of the last clause that resolved
    pub range: Option<DateRange>,
}

/// Scan the `—`-separated metadata clauses for dates
pub fn extract_date(metadata: &str, parser: &DateRangeParser) -> DateExtraction {
    let mut extraction = DateExtraction::default();

    for clause in metadata.split(CLAUSE_SEPARATOR) {
        if !is_date_clause(clause) {
            continue;
        }
        extraction.date_str = clause.to_string();
        if let Some(range) = parser.parse(clause) {
            extraction.range = Some(range);
        }
    }

    extraction
}

/// Does `clause` carry an era or period token?
///
/// `p.` followed by a number is a page reference, not an era.
pub fn is_date_clause(clause: &str) -> bool {
    let mut start = 0;
    while let Some(caps) = DATE_TOKEN.captures_at(clause, start) {
        let token = &caps[1];
        let after = caps.get(1).map_or(clause.len(), |m| m.end());
        if token != "p." || !PAGE_REFERENCE.is_match(&clause[after..]) {
            return true;
        }
        let matched = caps.get(0).map_or(after, |m| m.start());
        start = matched + clause[matched..].chars().next().map_or(1, char::len_utf8);
    }
    false
}
