//! Plain text output formatter

use super::{HyphenatedDocument, OutputFormatter};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - writes the hyphenated text unchanged
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, document: &HyphenatedDocument) -> Result<()> {
        self.writer.write_all(document.text.as_bytes())?;
        if !document.text.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
