//! Canonical text cleaning and date-range resolution for ancient inscriptions
//!
//! Two rule engines live here. The text side turns an editorially annotated
//! transcription into a canonical symbol stream over a closed alphabet; the
//! date side turns a free-text chronological description into a signed year
//! range with a circa flag.
//!
//! # Architecture
//!
//! - **alphabet**: closed symbol inventories behind the [`Alphabet`] trait
//! - **normalize**: the ordered stage table of [`TextNormalizer`]
//! - **segment**: pluggable sentence boundaries and [`SentenceSegmenter`]
//! - **accents**: diacritic removal
//! - **pipeline**: [`InscriptionCleaner`], the full text data flow
//! - **dates**: [`DateRangeParser`] with its [`ExemptionTable`] and grammar
//! - **record**: the dataset record schema and metadata date extraction
//!
//! # Example
//!
//! ```rust
//! use epigraphy_core::{DateRange, DateRangeParser, InscriptionCleaner};
//!
//! let cleaner = InscriptionCleaner::greek();
//! assert_eq!(cleaner.clean("{ΤΟΥ} (?) [ΣΩΚΡΑΤΗΣ]"), "σωκρατησ.");
//!
//! let parser = DateRangeParser::default();
//! assert_eq!(
//!     parser.parse("ca. 450 BC"),
//!     Some(DateRange { min: -450, max: -450, circa: true })
//! );
//! ```

pub mod accents;
pub mod alphabet;
pub mod dates;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod record;
pub mod segment;

pub use accents::strip_accents;
pub use alphabet::{Alphabet, GreekAlphabet};
pub use dates::{DateRange, DateRangeParser, Exemption, ExemptionTable};
pub use error::{CoreError, Result};
pub use normalize::TextNormalizer;
pub use pipeline::InscriptionCleaner;
pub use record::{extract_date, DateExtraction, RawRecord, Record};
pub use segment::{BoundaryConfig, RuleBasedBoundary, SentenceBoundary, SentenceSegmenter};
