//! Sentence segmentation of normalized text

pub mod boundary;

pub use boundary::{BoundaryConfig, RuleBasedBoundary, SentenceBoundary};

use crate::alphabet::Alphabet;
use std::sync::Arc;

/// Splits canonical text into punctuation-free sentences
///
/// Boundaries come from a pluggable [`SentenceBoundary`]. Within each unit
/// every run of alphabet punctuation becomes a single space, whitespace is
/// collapsed, and units of one character or less are discarded.
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    alphabet: Arc<dyn Alphabet>,
    boundary: Arc<dyn SentenceBoundary>,
}

impl SentenceSegmenter {
    pub fn new(alphabet: Arc<dyn Alphabet>, boundary: Arc<dyn SentenceBoundary>) -> Self {
        Self { alphabet, boundary }
    }

    /// Segment `text` into sentences in input order
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.boundary
            .spans(text)
            .into_iter()
            .filter_map(|span| {
                let sentence = self.clean_unit(&text[span]);
                (sentence.chars().count() > 1).then_some(sentence)
            })
            .collect()
    }

    fn clean_unit(&self, unit: &str) -> String {
        let spaced: String = unit
            .chars()
            .map(|c| if self.alphabet.is_punctuation(c) { ' ' } else { c })
            .collect();
        spaced.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
