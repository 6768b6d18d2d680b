//! End-to-end cleaning of one transcription

use crate::accents::strip_accents;
use crate::alphabet::{Alphabet, GreekAlphabet};
use crate::error::Result;
use crate::normalize::TextNormalizer;
use crate::segment::{RuleBasedBoundary, SentenceBoundary, SentenceSegmenter};
use std::sync::Arc;

/// Raw transcription to model-ready text
///
/// Runs the normalizer, segments the result into sentences, terminates each
/// sentence with the alphabet's first punctuation mark, joins them with a
/// space and finally strips accents.
#[derive(Debug, Clone)]
pub struct InscriptionCleaner {
    normalizer: TextNormalizer,
    segmenter: SentenceSegmenter,
}

impl InscriptionCleaner {
    /// Wire a cleaner from an alphabet and a boundary detector
    pub fn new(alphabet: Arc<dyn Alphabet>, boundary: Arc<dyn SentenceBoundary>) -> Result<Self> {
        let normalizer = TextNormalizer::new(Arc::clone(&alphabet))?;
        let segmenter = SentenceSegmenter::new(alphabet, boundary);
        Ok(Self {
            normalizer,
            segmenter,
        })
    }

    /// Greek alphabet with the embedded boundary rules
    pub fn greek() -> Self {
        let alphabet: Arc<dyn Alphabet> = Arc::new(GreekAlphabet::new());
        Self {
            normalizer: TextNormalizer::greek(),
            segmenter: SentenceSegmenter::new(alphabet, Arc::new(RuleBasedBoundary::default())),
        }
    }

    pub fn alphabet(&self) -> &Arc<dyn Alphabet> {
        self.normalizer.alphabet()
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Clean a raw transcription
    pub fn clean(&self, raw: &str) -> String {
        let normalized = self.normalizer.normalize(raw);
        let terminator = self.alphabet().terminator();

        let joined = self
            .segmenter
            .segment(&normalized)
            .into_iter()
            .map(|mut sentence| {
                sentence.push(terminator);
                sentence
            })
            .collect::<Vec<_>>()
            .join(" ");

        strip_accents(&joined)
    }

    /// Characters of `text` other than the missing-character marker
    pub fn significant_len(&self, text: &str) -> usize {
        let missing = self.alphabet().missing();
        text.chars().filter(|&c| c != missing).count()
    }
}

impl Default for InscriptionCleaner {
    fn default() -> Self {
        Self::greek()
    }
}
