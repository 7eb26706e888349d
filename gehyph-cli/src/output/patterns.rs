//! TeX and Hunspell pattern output

use super::{HyphenatedDocument, OutputFormatter};
use anyhow::Result;
use gehyph_engine::{hunspell_entry, tex_pattern};
use std::collections::HashSet;
use std::io::Write;

/// Pattern notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternStyle {
    /// `.სა1ქარ1თვე1ლო.`
    Tex,
    /// `სა=ქარ=თვე=ლო`
    Hunspell,
}

/// Writes one pattern per distinct word across all documents
pub struct PatternFormatter<W: Write> {
    writer: W,
    style: PatternStyle,
    seen: HashSet<String>,
}

impl<W: Write> PatternFormatter<W> {
    /// Create a new pattern formatter
    pub fn new(writer: W, style: PatternStyle) -> Self {
        Self {
            writer,
            style,
            seen: HashSet::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for PatternFormatter<W> {
    fn format_document(&mut self, document: &HyphenatedDocument) -> Result<()> {
        for entry in &document.words {
            if !self.seen.insert(entry.word.clone()) {
                continue;
            }
            let line = match self.style {
                PatternStyle::Tex => tex_pattern(&entry.syllables),
                PatternStyle::Hunspell => hunspell_entry(&entry.syllables),
            };
            writeln!(self.writer, "{line}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
