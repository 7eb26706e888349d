//! Output formatting module

use anyhow::Result;
use gehyph_engine::{segments, Hyphenator, Segment, MIN_TEXT_WORD_LEN};
use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one hyphenated document
    fn format_document(&mut self, document: &HyphenatedDocument) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod patterns;
pub mod text;

pub use json::JsonFormatter;
pub use patterns::{PatternFormatter, PatternStyle};
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Hyphenated text, layout preserved
    Text,
    /// JSON array of documents with per-word syllables
    Json,
    /// TeX hyphenation patterns, one word per line
    Tex,
    /// Hunspell hyphenation entries, one word per line
    Hunspell,
}

impl OutputFormat {
    /// Every format with a one-line description
    pub const ALL: [(OutputFormat, &'static str); 4] = [
        (OutputFormat::Text, "Hyphenated text with the configured break marker"),
        (OutputFormat::Json, "JSON array of documents with syllables per word"),
        (OutputFormat::Tex, "TeX patterns such as .სა1ქარ1თვე1ლო."),
        (OutputFormat::Hunspell, "Hunspell entries such as სა=ქარ=თვე=ლო"),
    ];

    /// Build a formatter writing to `writer`
    pub fn formatter<W>(self, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Tex => Box::new(PatternFormatter::new(writer, PatternStyle::Tex)),
            OutputFormat::Hunspell => {
                Box::new(PatternFormatter::new(writer, PatternStyle::Hunspell))
            }
        }
    }
}

/// A hyphenated word and its syllables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordSyllables {
    /// The word as it appears in the input
    pub word: String,
    /// Syllables in order
    pub syllables: Vec<String>,
}

/// Result of hyphenating one input document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HyphenatedDocument {
    /// Where the input came from
    pub source: String,
    /// Full hyphenated text
    pub text: String,
    /// Distinct hyphenatable Georgian words, in order of first appearance
    pub words: Vec<WordSyllables>,
}

impl HyphenatedDocument {
    /// Hyphenate `content` and collect its words
    pub fn build(source: &str, content: &str, hyphenator: &Hyphenator, html: bool) -> Self {
        let text = if html {
            hyphenator.hyphenate_html(content)
        } else {
            hyphenator.hyphenate_text(content)
        };

        let plain = hyphenator.unhyphenate(content);
        let mut seen = HashSet::new();
        let words = segments(&plain)
            .filter_map(|segment| match segment {
                Segment::Georgian(word) if word.chars().count() >= MIN_TEXT_WORD_LEN => Some(word),
                _ => None,
            })
            .filter(|word| seen.insert(*word))
            .map(|word| WordSyllables {
                word: word.to_string(),
                syllables: hyphenator.syllables(word),
            })
            .collect();

        Self {
            source: source.to_string(),
            text,
            words,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gehyph_engine::HyphenatorConfig;

    #[test]
    fn test_build_collects_distinct_words() {
        let h = Hyphenator::with_config(HyphenatorConfig::visible()).unwrap();
        let doc = HyphenatedDocument::build("<text>", "ბარბი და ბარბი, კლასი", &h, false);
        assert_eq!(doc.text, "ბარ-ბი და ბარ-ბი, კლა-სი");
        let words: Vec<&str> = doc.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["ბარბი", "კლასი"]);
        assert_eq!(doc.words[1].syllables, vec!["კლა", "სი"]);
    }

    #[test]
    fn test_build_html() {
        let h = Hyphenator::with_config(HyphenatorConfig::visible()).unwrap();
        let doc = HyphenatedDocument::build("<text>", "<b>ბარბი</b>", &h, true);
        assert_eq!(doc.text, "<b>ბარ-ბი</b>");
    }

    #[test]
    fn test_all_formats_listed() {
        assert_eq!(OutputFormat::ALL.len(), 4);
    }
}
