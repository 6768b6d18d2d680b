//! The individual rewrite stages
//!
//! Each function is pure and total. The numbered comments give the position
//! of the stage in [`super::STAGES`]; a stage may assume everything the
//! lower-numbered stages guarantee.

use super::StageContext;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Greek acrophonic and alphabetic numeral glyphs
const NUMERAL_GLYPHS: &str = r"∶ΠTϛΙΔͰΗΧΜΤ\x{10140}-\x{10156}";

/// Characters that delimit a numeral run
const NUMERAL_DELIMITERS: &str = r"\s.⏑—\-,․\[\]";

/// Longest illegible span expanded from an explicit count
const MAX_GAP_COUNT: usize = 500;

static CITATION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?:IG|SEG|BCH|Agora|vacat) .*\n?").expect("valid citation pattern")
});

static VACAT_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)vacat .*\n?").expect("valid vacat pattern"));

static COLON_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" [:∶]+ ").expect("valid colon pattern"));

static STROKED_NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w∙]+ʹ").expect("valid stroked numeral pattern"));

static BRACKETED_NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\[[{NUMERAL_GLYPHS}]+\]")).expect("valid bracketed numeral pattern")
});

static DELIMITED_NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?P<pre>[{NUMERAL_DELIMITERS}]|^)[{NUMERAL_GLYPHS}]+(?P<post>[{NUMERAL_DELIMITERS}]|$)"
    ))
    .expect("valid delimited numeral pattern")
});

static SEPARATOR_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*[∶⋮·\x{0387}⁙;\x{037E}|]+\s*").expect("valid separator pattern")
});

static UNCERTAINTY_MARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(\?\)").expect("valid uncertainty pattern"));

static DELETION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]*\}").expect("valid deletion pattern"));

static INSERTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([^<>]*)>").expect("valid insertion pattern"));

static LATIN_LINE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)\[M{0,4}(?:CM|CD|D?C{0,3})(?:XC|XL|L?X{0,3})(?:IX|IV|V?I{0,3})\][ \t]*$")
        .expect("valid latin numeral pattern")
});

static VACAT_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\d+\s)?\s*v[\w.?]*(?:\s\d+(?:\.\d+)?)?").expect("valid vacat count pattern")
});

static PAREN_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^()]*)\)").expect("valid parenthesis pattern"));

static PAREN_ANY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("valid parenthesis pattern"));

static DASH_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"—(?:\s+—)+").expect("valid dash run pattern"));

static GAP_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\.|․|—)+\s?(?:c\.)?(\d+)(?:[-‑—]\d+)?\s?(?:\.|․|—)*")
        .expect("valid gap count pattern")
});

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid digit pattern"));

static PLACEHOLDER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\s+0)+").expect("valid placeholder pattern"));

static EMPTY_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\s*\]").expect("valid bracket pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// 1. Lines opened by a bibliographic siglum are citations, not text
pub fn drop_citation_lines(text: &str, _ctx: &StageContext<'_>) -> String {
    CITATION_LINE.replace_all(text, "").into_owned()
}

/// 2. Double brackets become single brackets
pub fn unify_brackets(text: &str, _ctx: &StageContext<'_>) -> String {
    text.replace('〚', "[").replace('〛', "]")
}

/// 3. Nothing after `vacat` on a line is inscribed text
pub fn truncate_at_vacat(text: &str, _ctx: &StageContext<'_>) -> String {
    VACAT_TAIL.replace_all(text, "\n").into_owned()
}

/// 4. Spaced colon separators end a sentence
pub fn colon_to_full_stop(text: &str, _ctx: &StageContext<'_>) -> String {
    COLON_SEPARATOR.replace_all(text, ". ").into_owned()
}

/// 5. Words hyphenated across a line break are rejoined
pub fn join_hyphenated_lines(text: &str, _ctx: &StageContext<'_>) -> String {
    text.replace("-\n", "")
}

/// 6. Numerals: keraia-marked words and bracketed runs vanish, delimited
/// runs become the `0` placeholder
///
/// Neighbouring runs share their delimiter, so the delimited rewrite runs
/// twice.
pub fn strip_greek_numerals(text: &str, _ctx: &StageContext<'_>) -> String {
    let text = STROKED_NUMERAL.replace_all(text, "");
    let text = BRACKETED_NUMERAL.replace_all(&text, "");
    let text = DELIMITED_NUMERAL.replace_all(&text, "${pre}0${post}");
    DELIMITED_NUMERAL
        .replace_all(&text, "${pre}0${post}")
        .into_owned()
}

/// 7. Interpuncts and similar separators become one space
pub fn collapse_separators(text: &str, _ctx: &StageContext<'_>) -> String {
    SEPARATOR_RUN.replace_all(text, " ").into_owned()
}

/// 8. `(?)` annotations
pub fn drop_uncertainty_marks(text: &str, _ctx: &StageContext<'_>) -> String {
    UNCERTAINTY_MARK.replace_all(text, "").into_owned()
}

/// 9. `{...}` marks letters the editor deletes
pub fn drop_deletions(text: &str, _ctx: &StageContext<'_>) -> String {
    DELETION.replace_all(text, "").into_owned()
}

/// 10. `<...>` insertions keep their content
///
/// Innermost pairs unwrap first; no `<` precedes a `>` afterwards.
pub fn unwrap_insertions(text: &str, _ctx: &StageContext<'_>) -> String {
    let mut text = text.to_string();
    while INSERTION.is_match(&text) {
        text = INSERTION.replace_all(&text, "$1").into_owned();
    }
    text
}

/// 11. Roman line numbers in brackets at the end of a line
pub fn strip_latin_line_numbers(text: &str, _ctx: &StageContext<'_>) -> String {
    LATIN_LINE_NUMBER.replace_all(text, "").into_owned()
}

/// 12.
pub fn lowercase(text: &str, _ctx: &StageContext<'_>) -> String {
    text.to_lowercase()
}

/// 13. Script-specific letterform unification
pub fn alphabet_filter(text: &str, ctx: &StageContext<'_>) -> String {
    ctx.alphabet.filter(text)
}

/// 14. `v`, `v.`, `vac.`, `vac.?` with optional counts on either side
pub fn drop_vacat_counts(text: &str, _ctx: &StageContext<'_>) -> String {
    VACAT_COUNT.replace_all(text, "").into_owned()
}

/// 15. Parentheses around letters only are unwrapped; anything else in
/// parentheses is an editorial note and goes
pub fn resolve_parentheses(text: &str, ctx: &StageContext<'_>) -> String {
    let unwrapped = PAREN_GROUP.replace_all(text, |caps: &Captures<'_>| {
        let content = &caps[1];
        if !content.is_empty() && content.chars().all(|c| ctx.alphabet.is_letter(c)) {
            content.to_string()
        } else {
            caps[0].to_string()
        }
    });
    PAREN_ANY.replace_all(&unwrapped, "").into_owned()
}

/// 16. Lunate sigma
pub fn unify_lunate_sigma(text: &str, _ctx: &StageContext<'_>) -> String {
    text.replace('ϲ', "σ")
}

/// 17. Empty lines and lines with 10% or more ASCII Latin letters
pub fn drop_latin_lines(text: &str, _ctx: &StageContext<'_>) -> String {
    text.lines()
        .filter(|line| {
            let total = line.chars().count();
            let latin = line.chars().filter(|c| c.is_ascii_lowercase()).count();
            total > 0 && latin * 10 < total
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// 18. Hyphens and metrical breves become em dashes, then dash runs split by
/// whitespace are closed up
pub fn unify_dashes(text: &str, _ctx: &StageContext<'_>) -> String {
    let unified: String = text
        .chars()
        .map(|c| match c {
            '⏑' | '⏕' | '-' => '—',
            other => other,
        })
        .collect();
    DASH_RUN
        .replace_all(&unified, |caps: &Captures<'_>| {
            caps[0].chars().filter(|c| !c.is_whitespace()).collect::<String>()
        })
        .into_owned()
}

/// 19. Dot or dash runs carrying a count (`.. c.5 ..`, `—7-8—`) become that
/// many missing markers; with a range only the first count is used
///
/// A zero count is not an annotation and is left for later stages.
pub fn expand_gap_counts(text: &str, ctx: &StageContext<'_>) -> String {
    GAP_COUNT
        .replace_all(text, |caps: &Captures<'_>| {
            match caps[1].parse::<usize>() {
                Ok(count) if (1..=MAX_GAP_COUNT).contains(&count) => {
                    ctx.alphabet.missing().to_string().repeat(count)
                }
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// 20. Remaining dash and dot-leader glyphs mark one missing character each
pub fn mark_missing(text: &str, ctx: &StageContext<'_>) -> String {
    let missing = ctx.alphabet.missing();
    text.chars()
        .map(|c| match c {
            '\u{2013}' | '\u{2014}' | '․' => missing,
            other => other,
        })
        .collect()
}

/// 21. Brackets emptied or split by earlier deletions
pub fn join_bracket_pairs(text: &str, _ctx: &StageContext<'_>) -> String {
    text.replace("][", "").replace("[]", "")
}

/// 22. Anything outside the closed symbol set becomes a space
pub fn whitelist(text: &str, ctx: &StageContext<'_>) -> String {
    let space = ctx.alphabet.space();
    text.chars()
        .map(|c| if ctx.alphabet.contains(c) { c } else { space })
        .collect()
}

/// 23. Digit runs become `0`; placeholders separated by whitespace merge
pub fn collapse_numbers(text: &str, _ctx: &StageContext<'_>) -> String {
    let text = DIGITS.replace_all(text, "0");
    PLACEHOLDER_RUN.replace_all(&text, " 0").into_owned()
}

/// 24.
pub fn drop_empty_brackets(text: &str, _ctx: &StageContext<'_>) -> String {
    EMPTY_BRACKETS.replace_all(text, "").into_owned()
}

/// 25. No whitespace before punctuation or the end marker
pub fn tighten_punctuation(text: &str, ctx: &StageContext<'_>) -> String {
    ctx.patterns
        .space_before_punctuation
        .replace_all(text, "$1")
        .into_owned()
}

/// 26.
pub fn trim_leading(text: &str, ctx: &StageContext<'_>) -> String {
    let space = ctx.alphabet.space();
    text.trim_start_matches(|c: char| c == space || ctx.alphabet.is_punctuation(c))
        .to_string()
}

/// 27. A run of punctuation keeps its last mark
pub fn dedupe_punctuation(text: &str, ctx: &StageContext<'_>) -> String {
    ctx.patterns
        .repeated_punctuation
        .replace_all(text, "$1")
        .into_owned()
}

/// 28. Single spaces, missing-marker runs closed up, no outer whitespace
pub fn collapse_whitespace(text: &str, ctx: &StageContext<'_>) -> String {
    let text = WHITESPACE.replace_all(text, " ");
    let text = ctx
        .patterns
        .missing_run
        .replace_all(&text, |caps: &Captures<'_>| {
            caps[0].chars().filter(|c| !c.is_whitespace()).collect::<String>()
        });
    text.trim().to_string()
}
