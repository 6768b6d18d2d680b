//! Numeric date grammar
//!
//! Four matchers are tried in a fixed order against a whitespace-collapsed
//! descriptor. Each one either resolves a range, reports that it matched but
//! the bounds contradict each other, or does not apply. Only
//! [`Outcome::NoMatch`] lets the next matcher run.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Era of the descriptor; BC years are negated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Era {
    Bc,
    Ad,
}

impl Era {
    /// Read an era token: `BC` and `a.` are BC, `AD` and `p.` are AD
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "bc" | "a." => Some(Era::Bc),
            "ad" | "p." => Some(Era::Ad),
            _ => None,
        }
    }

    fn apply(self, year: i32) -> i32 {
        match self {
            Era::Bc => -year,
            Era::Ad => year,
        }
    }
}

/// Result of one matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Matched with consistent bounds
    Resolved { min: i32, max: i32 },
    /// Matched but the bounds are inverted
    Contradiction,
    /// Pattern absent
    NoMatch,
}

/// A named grammar rule
#[derive(Clone, Copy)]
pub struct Matcher {
    pub name: &'static str,
    pub apply: fn(&str, Era) -> Outcome,
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher").field("name", &self.name).finish()
    }
}

/// The grammar, in the order the branches are tried
pub static MATCHERS: [Matcher; 4] = [
    Matcher { name: "double_bounded", apply: double_bounded },
    Matcher { name: "single_year", apply: single_year },
    Matcher { name: "anchored_year", apply: anchored_year },
    Matcher { name: "century_span", apply: century_span },
];

const EARLY_WORDS: [&str; 5] = ["early", "first half", "1st half", "beginning", "beg."];
const LATE_WORDS: [&str; 4] = ["late", "second half", "2nd half", "end"];
const MID_WORDS: [&str; 3] = ["mid", "mid.", "mid-"];

static DOUBLE_BOUNDED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\s?([0-9]{1,4})(?:/[0-9]{1,2})?\s?-\s?([0-9]{1,4})(?:/([0-9]{1,2}))?\??\s+(?:BC|AD|a\.|p\.)",
    )
    .expect("valid double-bounded pattern")
});

static SINGLE_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]{1,4})(?:/([0-9]{1,4}))?\??\s+(?:BC|AD|a\.|p\.)")
        .expect("valid single-year pattern")
});

static ANCHORED_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:BC|AD|a\.|p\.) ([0-9]{1,4})(?:[^0-9]|$)")
        .expect("valid anchored-year pattern")
});

static CENTURY_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    let modifiers = EARLY_WORDS
        .iter()
        .chain(LATE_WORDS.iter())
        .chain(MID_WORDS.iter())
        .map(|word| format!(r"{}\s?", regex::escape(word)))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"(?i)(?:(?P<mod1>{modifiers})?(?P<n1>[0-9]{{1,2}})(?:st|nd|rd|th)\s?(?:/|-|or)\s?)?(?P<mod2>{modifiers})?(?P<n2>[0-9]{{1,2}})(?:st|nd|rd|th) (?:c\.\s)?(?:BC|AD|a\.|p\.)"
    ))
    .expect("valid century-span pattern")
});

/// Run the matchers in order until one applies
pub fn resolve(text: &str, era: Era) -> Option<(i32, i32)> {
    for matcher in &MATCHERS {
        match (matcher.apply)(text, era) {
            Outcome::Resolved { min, max } => {
                log::trace!("'{text}' resolved by {}", matcher.name);
                return Some((min, max));
            }
            Outcome::Contradiction => {
                log::debug!("'{text}' has contradictory bounds ({})", matcher.name);
                return None;
            }
            Outcome::NoMatch => {}
        }
    }
    None
}

/// Rebuild an abbreviated year by replacing the trailing digits of `full`
/// with `minor`, so `409` and `8` give `408`
pub fn splice_year(full: &str, minor: &str) -> Option<i32> {
    let keep = full.len().saturating_sub(minor.len());
    format!("{}{}", &full[..keep], minor).parse().ok()
}

fn year(caps: &Captures<'_>, group: usize) -> Option<i32> {
    caps.get(group)?.as_str().parse().ok()
}

/// (a) `X[/x]-Y[/y] ERA`
///
/// BC ranges are written high to low and need `X >= Y`; AD ranges need
/// `X <= Y`.
pub fn double_bounded(text: &str, era: Era) -> Outcome {
    let Some(caps) = DOUBLE_BOUNDED.captures(text) else {
        return Outcome::NoMatch;
    };
    let (Some(low), Some(mut high)) = (year(&caps, 1), year(&caps, 2)) else {
        return Outcome::NoMatch;
    };
    if let Some(minor) = caps.get(3) {
        match splice_year(&caps[2], minor.as_str()) {
            Some(spliced) => high = spliced,
            None => return Outcome::NoMatch,
        }
    }

    match era {
        Era::Bc if low >= high => Outcome::Resolved {
            min: -low,
            max: -high,
        },
        Era::Ad if low <= high => Outcome::Resolved {
            min: low,
            max: high,
        },
        _ => Outcome::Contradiction,
    }
}

/// (b) `X[/x][?] ERA`
///
/// Inverted bounds are swapped rather than rejected.
pub fn single_year(text: &str, era: Era) -> Outcome {
    let Some(caps) = SINGLE_YEAR.captures(text) else {
        return Outcome::NoMatch;
    };
    let Some(first) = year(&caps, 1) else {
        return Outcome::NoMatch;
    };
    let second = match caps.get(2) {
        Some(minor) => match splice_year(&caps[1], minor.as_str()) {
            Some(spliced) => spliced,
            None => return Outcome::NoMatch,
        },
        None => first,
    };

    let (a, b) = (era.apply(first), era.apply(second));
    Outcome::Resolved {
        min: a.min(b),
        max: a.max(b),
    }
}

/// (c) `ERA X` at the start of the descriptor
///
/// No earlier matcher leaves a bound behind, so the year stands alone.
pub fn anchored_year(text: &str, era: Era) -> Outcome {
    match ANCHORED_YEAR.captures(text).and_then(|caps| year(&caps, 1)) {
        Some(y) => {
            let y = era.apply(y);
            Outcome::Resolved { min: y, max: y }
        }
        None => Outcome::NoMatch,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Modifier {
    Early,
    Late,
    Mid,
}

impl Modifier {
    fn parse(raw: &str) -> Option<Self> {
        let word = raw.trim().to_lowercase();
        let word = word.as_str();
        if EARLY_WORDS.contains(&word) {
            Some(Modifier::Early)
        } else if LATE_WORDS.contains(&word) {
            Some(Modifier::Late)
        } else if MID_WORDS.contains(&word) {
            Some(Modifier::Mid)
        } else {
            None
        }
    }

    /// Narrow a span; the trim does not depend on which century the word qualifies
    fn narrow(self, (min, max): (i32, i32)) -> (i32, i32) {
        match self {
            Modifier::Early => (min, max - 50),
            Modifier::Late => (min + 50, max),
            Modifier::Mid => (min + 25, max - 25),
        }
    }
}

/// Year bounds of the `n`th century
fn century(n: i32, era: Era) -> (i32, i32) {
    match era {
        Era::Ad => (n * 100 - 99, n * 100),
        Era::Bc => (-(n * 100), -(n * 100 - 99)),
    }
}

/// (d) `[mod] N1th (/|-|or) [mod] N2th [c.] ERA`, or only the second half
///
/// The span runs from the start of the first century to the end of the
/// second. Each modifier then trims the whole span: early pulls in the
/// upper bound, late the lower bound, mid both.
pub fn century_span(text: &str, era: Era) -> Outcome {
    let Some(caps) = CENTURY_SPAN.captures(text) else {
        return Outcome::NoMatch;
    };
    let Some(n2) = caps.name("n2").and_then(|m| m.as_str().parse().ok()) else {
        return Outcome::NoMatch;
    };
    let modifier = |name: &str| caps.name(name).and_then(|m| Modifier::parse(m.as_str()));

    let first = caps
        .name("n1")
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(n2);
    let base = (century(first, era).0, century(n2, era).1);

    let (min, max) = [modifier("mod1"), modifier("mod2")]
        .into_iter()
        .flatten()
        .fold(base, |span, m| m.narrow(span));

    if min <= max {
        Outcome::Resolved { min, max }
    } else {
        Outcome::Contradiction
    }
}
