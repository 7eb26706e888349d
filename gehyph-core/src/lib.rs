//! Rule-based syllable boundary detection for Georgian
//!
//! This crate holds the pure part of the hyphenation engine: character
//! tables, word normalization, the vowel-pair boundary algorithm, the
//! orphan/widow correction pass and script-run tokenization. It performs
//! no I/O and keeps no state between calls.
//!
//! # Architecture
//!
//! - **Language layer**: vowel and letter tables, harmonic consonant clusters
//! - **Domain layer**: normalizer, boundary algorithm, orphan pass, tokenizer
//!
//! Dictionary overlay, configuration and text wrappers live in
//! `gehyph-engine`.
//!
//! # Example
//!
//! ```rust
//! use gehyph_core::{apply_algorithm, fix_orphans, Bounds, HarmonicClusters};
//!
//! let clusters = HarmonicClusters::default();
//! let word = apply_algorithm("საქართველო", "-", &Bounds::default(), &clusters);
//! assert_eq!(fix_orphans(&word, "-"), "სა-ქარ-თვე-ლო");
//! ```

#![warn(missing_docs)]

pub mod domain;
pub mod error;
pub mod language;

pub use domain::*;
pub use error::{CoreError, Result};
pub use language::tables::{DEFAULT_BREAK_MARKER, DICTIONARY_DELIMITER};
pub use language::{is_georgian, is_georgian_letter, HarmonicClusters, LetterClass};
