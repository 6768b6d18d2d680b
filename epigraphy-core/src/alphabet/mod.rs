//! Closed symbol inventories for canonical text
//!
//! An [`Alphabet`] fixes every code point that may survive cleaning: the
//! letters of the target script, numerals, punctuation, the space, the
//! missing-character marker and the start/end markers. It also owns the
//! script-specific character filter applied mid-pipeline.

mod greek;

pub use greek::GreekAlphabet;

use std::fmt;

/// Symbol inventory and character filter for one writing system
///
/// Implementations are immutable and shared across threads.
pub trait Alphabet: Send + Sync + fmt::Debug {
    /// Human readable name
    fn name(&self) -> &str;

    /// Ordered letter inventory
    fn letters(&self) -> &[char];

    /// Numeral symbols kept until digit runs collapse to the placeholder
    fn numerals(&self) -> &[char];

    /// Punctuation marks; the first one terminates rejoined sentences
    fn punctuation(&self) -> &[char];

    /// Word separator
    fn space(&self) -> char {
        ' '
    }

    /// Stands in for one illegible source character
    fn missing(&self) -> char;

    /// Start-of-text marker
    fn start_marker(&self) -> char;

    /// End-of-text marker
    fn end_marker(&self) -> char;

    /// Script-specific unification of case and letterform variants
    fn filter(&self, text: &str) -> String;

    /// Is `ch` one of the letters?
    fn is_letter(&self, ch: char) -> bool {
        self.letters().contains(&ch)
    }

    /// Is `ch` one of the punctuation marks?
    fn is_punctuation(&self, ch: char) -> bool {
        self.punctuation().contains(&ch)
    }

    /// Is `ch` one of the numeral symbols?
    fn is_numeral(&self, ch: char) -> bool {
        self.numerals().contains(&ch)
    }

    /// Membership in the closed symbol set
    fn contains(&self, ch: char) -> bool {
        self.is_letter(ch)
            || self.is_numeral(ch)
            || self.is_punctuation(ch)
            || ch == self.space()
            || ch == self.missing()
            || ch == self.start_marker()
            || ch == self.end_marker()
    }

    /// Mark appended to each sentence when text is rejoined
    fn terminator(&self) -> char {
        self.punctuation().first().copied().unwrap_or('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Latin;

    impl Alphabet for Latin {
        fn name(&self) -> &str {
            "latin"
        }

        fn letters(&self) -> &[char] {
            &['a', 'b', 'c']
        }

        fn numerals(&self) -> &[char] {
            &['0']
        }

        fn punctuation(&self) -> &[char] {
            &['!', '.']
        }

        fn missing(&self) -> char {
            '_'
        }

        fn start_marker(&self) -> char {
            '<'
        }

        fn end_marker(&self) -> char {
            '>'
        }

        fn filter(&self, text: &str) -> String {
            text.to_string()
        }
    }

    #[test]
    fn test_default_membership() {
        let alphabet = Latin;
        assert!(alphabet.contains('a'));
        assert!(alphabet.contains('0'));
        assert!(alphabet.contains('!'));
        assert!(alphabet.contains(' '));
        assert!(alphabet.contains('_'));
        assert!(alphabet.contains('<'));
        assert!(!alphabet.contains('d'));
        assert!(!alphabet.contains('1'));
    }

    #[test]
    fn test_terminator_is_first_punctuation() {
        assert_eq!(Latin.terminator(), '!');
    }
}
