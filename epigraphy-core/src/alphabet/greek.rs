use super::Alphabet;
use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Monotonic tonos vowels and their polytonic oxia code points
const TONOS_TO_OXIA: [(char, char); 9] = [
    ('\u{03AC}', '\u{1F71}'), // ά
    ('\u{03AD}', '\u{1F73}'), // έ
    ('\u{03AE}', '\u{1F75}'), // ή
    ('\u{03AF}', '\u{1F77}'), // ί
    ('\u{03CC}', '\u{1F79}'), // ό
    ('\u{03CD}', '\u{1F7B}'), // ύ
    ('\u{03CE}', '\u{1F7D}'), // ώ
    ('\u{0390}', '\u{1FD3}'), // ΐ
    ('\u{03B0}', '\u{1FE3}'), // ΰ
];

const FINAL_SIGMA: char = 'ς';

const NUMERALS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

const PUNCTUATION: [char; 1] = ['.'];

/// Polytonic Greek inventory
///
/// Letters are the 24 lowercase base letters (final sigma folded into `σ`)
/// plus every lowercase precomposed form built on them: dialytika vowels and
/// the Greek Extended block. Accents survive normalization and are removed
/// afterwards by [`crate::accents::strip_accents`].
#[derive(Debug, Clone)]
pub struct GreekAlphabet {
    letters: Vec<char>,
    letter_set: HashSet<char>,
}

impl GreekAlphabet {
    /// Build the inventory
    pub fn new() -> Self {
        let base: Vec<char> = ('α'..='ω').filter(|&c| c != FINAL_SIGMA).collect();
        let mut letters = base.clone();

        let precomposed = ['\u{03CA}', '\u{03CB}']
            .into_iter()
            .chain('\u{1F00}'..='\u{1FFF}');
        for ch in precomposed {
            if is_accented_form(ch, &base) && !is_filtered(ch) {
                letters.push(ch);
            }
        }

        let letter_set = letters.iter().copied().collect();
        Self {
            letters,
            letter_set,
        }
    }
}

impl Default for GreekAlphabet {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase precomposed letter whose decomposition is a base letter and marks
fn is_accented_form(ch: char, base: &[char]) -> bool {
    if !ch.is_lowercase() || ch.to_lowercase().ne(std::iter::once(ch)) {
        return false;
    }
    let mut parts = std::iter::once(ch).nfd();
    match parts.next() {
        Some(first) if base.contains(&first) => parts.all(is_combining_mark),
        _ => false,
    }
}

/// Characters the filter rewrites never belong to the inventory
fn is_filtered(ch: char) -> bool {
    ch == FINAL_SIGMA || TONOS_TO_OXIA.iter().any(|&(tonos, _)| tonos == ch)
}

impl Alphabet for GreekAlphabet {
    fn name(&self) -> &str {
        "greek"
    }

    fn letters(&self) -> &[char] {
        &self.letters
    }

    fn numerals(&self) -> &[char] {
        &NUMERALS
    }

    fn punctuation(&self) -> &[char] {
        &PUNCTUATION
    }

    fn missing(&self) -> char {
        '-'
    }

    fn start_marker(&self) -> char {
        '<'
    }

    fn end_marker(&self) -> char {
        '>'
    }

    fn filter(&self, text: &str) -> String {
        text.chars()
            .map(|ch| {
                if ch == FINAL_SIGMA {
                    return 'σ';
                }
                TONOS_TO_OXIA
                    .iter()
                    .find(|&&(tonos, _)| tonos == ch)
                    .map_or(ch, |&(_, oxia)| oxia)
            })
            .collect()
    }

    fn is_letter(&self, ch: char) -> bool {
        self.letter_set.contains(&ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_letters_present() {
        let alphabet = GreekAlphabet::new();
        for ch in "αβγδεζηθικλμνξοπρστυφχψω".chars() {
            assert!(alphabet.is_letter(ch), "missing {ch}");
        }
    }

    #[test]
    fn test_precomposed_letters_present() {
        let alphabet = GreekAlphabet::new();
        for ch in ['ἀ', 'ἔ', 'ῆ', 'ᾳ', 'ῷ', 'ϊ', '\u{1F71}'] {
            assert!(alphabet.is_letter(ch), "missing {ch}");
        }
    }

    #[test]
    fn test_excluded_symbols() {
        let alphabet = GreekAlphabet::new();
        for ch in ['ς', 'ά', 'Α', 'Ἀ', 'ϛ', 'ϲ', '᾽', 'a'] {
            assert!(!alphabet.is_letter(ch), "unexpected {ch}");
        }
    }

    #[test]
    fn test_filter_folds_sigma_and_tonos() {
        let alphabet = GreekAlphabet::new();
        assert_eq!(alphabet.filter("λόγος"), "λ\u{1F79}γοσ");
        assert_eq!(alphabet.filter("abc"), "abc");
    }

    #[test]
    fn test_filter_is_identity_on_letters() {
        let alphabet = GreekAlphabet::new();
        let letters: String = alphabet.letters().iter().collect();
        assert_eq!(alphabet.filter(&letters), letters);
    }

    #[test]
    fn test_markers() {
        let alphabet = GreekAlphabet::new();
        assert_eq!(alphabet.missing(), '-');
        assert_eq!(alphabet.terminator(), '.');
        assert!(alphabet.contains('<'));
        assert!(alphabet.contains('>'));
        assert!(alphabet.contains('7'));
        assert!(!alphabet.contains('['));
    }
}
