//! JSON output formatter

use super::{HyphenatedDocument, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<HyphenatedDocument>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &HyphenatedDocument) -> Result<()> {
        self.documents.push(document.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::WordSyllables;

    #[test]
    fn test_json_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter
            .format_document(&HyphenatedDocument {
                source: "<text>".to_string(),
                text: "ბარ-ბი".to_string(),
                words: vec![WordSyllables {
                    word: "ბარბი".to_string(),
                    syllables: vec!["ბარ".to_string(), "ბი".to_string()],
                }],
            })
            .unwrap();
        formatter.finish().unwrap();

        let value: serde_json::Value = serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(value[0]["source"], "<text>");
        assert_eq!(value[0]["text"], "ბარ-ბი");
        assert_eq!(value[0]["words"][0]["syllables"][1], "ბი");
    }

    #[test]
    fn test_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "[]\n");
    }
}
