//! Georgian hyphenation engine
//!
//! This crate wraps the pure algorithm from `gehyph-core` in a configurable
//! [`Hyphenator`]: exception dictionary overlay, asynchronous dictionary
//! sources with a bounded wait, text and HTML wrappers and export formats.
//!
//! # Example
//!
//! ```rust
//! use gehyph_engine::{Hyphenator, HyphenatorConfig};
//!
//! let mut hyphenator = Hyphenator::with_config(HyphenatorConfig::visible()).unwrap();
//! assert_eq!(hyphenator.hyphenate("საქართველო"), "სა-ქარ-თვე-ლო");
//!
//! hyphenator.add_exception("კომპიუტერი", "კომ-პიუ-ტე-რი");
//! assert_eq!(hyphenator.hyphenate("კომპიუტერი"), "კომ-პიუ-ტე-რი");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dictionary;
pub mod error;
pub mod export;
pub mod hyphenator;
pub mod source;
pub mod text;

pub use config::{ConfigUpdate, HyphenatorConfig, DEFAULT_LOAD_TIMEOUT_MS};
pub use dictionary::ExceptionDictionary;
pub use error::{DictionaryError, EngineError, Result};
pub use export::{hunspell_entry, tex_pattern};
pub use hyphenator::{DictionaryStatus, Hyphenator, HyphenatorBuilder};
pub use source::{DictionaryEntries, DictionarySource, JsonFileSource, JsonTextSource};
pub use text::{MIN_TEXT_WORD_LEN, SKIPPED_TAGS};

// Re-export from core for convenience
pub use gehyph_core::{
    is_georgian, lookup_key, segments, Bounds, CoreError, HarmonicClusters, Segment,
    DEFAULT_BREAK_MARKER,
};

use std::sync::OnceLock;

static DEFAULT_HYPHENATOR: OnceLock<Hyphenator> = OnceLock::new();

/// Shared hyphenator with the default configuration
pub fn default_hyphenator() -> &'static Hyphenator {
    DEFAULT_HYPHENATOR.get_or_init(Hyphenator::new)
}

/// Hyphenate one word with the default configuration
pub fn hyphenate(word: &str) -> String {
    default_hyphenator().hyphenate(word)
}

/// Hyphenate running text with the default configuration
pub fn hyphenate_text(text: &str) -> String {
    default_hyphenator().hyphenate_text(text)
}

/// Syllables of one word with the default configuration
pub fn syllables(word: &str) -> Vec<String> {
    default_hyphenator().syllables(word)
}

/// TeX pattern for one word
pub fn to_tex_pattern(word: &str) -> String {
    default_hyphenator().to_tex_pattern(word)
}

/// Hunspell entry for one word
pub fn to_hunspell(word: &str) -> String {
    default_hyphenator().to_hunspell(word)
}
