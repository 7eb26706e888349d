//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;

/// One unit of input text and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDocument {
    /// File path, `<text>` or `<stdin>`
    pub source: String,
    /// UTF-8 content
    pub content: String,
}

/// Gather inputs: inline text wins, then file patterns, then stdin
pub fn collect_inputs(text: Option<&str>, patterns: &[String]) -> Result<Vec<InputDocument>> {
    if let Some(text) = text {
        return Ok(vec![InputDocument {
            source: "<text>".to_string(),
            content: text.to_string(),
        }]);
    }

    if patterns.is_empty() {
        return Ok(vec![InputDocument {
            source: "<stdin>".to_string(),
            content: FileReader::read_stdin()?,
        }]);
    }

    resolve_patterns(patterns)?
        .into_iter()
        .map(|path| {
            Ok(InputDocument {
                content: FileReader::read_text(&path)?,
                source: path.display().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_inline_text_wins() {
        let docs = collect_inputs(Some("ბარბი"), &["ignored/*.txt".to_string()]).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].source, "<text>");
        assert_eq!(docs[0].content, "ბარბი");
    }

    #[test]
    fn test_files_in_sorted_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("2.txt"), "კლასი").unwrap();
        fs::write(temp_dir.path().join("1.txt"), "ბარბი").unwrap();

        let pattern = format!("{}/*.txt", temp_dir.path().display());
        let docs = collect_inputs(None, &[pattern]).unwrap();
        let contents: Vec<&str> = docs.iter().map(|d| d.content.as_str()).collect();
        assert_eq!(contents, vec!["ბარბი", "კლასი"]);
        assert!(docs[0].source.ends_with("1.txt"));
    }
}
