//! Asynchronous exception dictionary sources
//!
//! A source yields the raw word-to-form map. The hyphenator bounds every
//! fetch with its configured timeout, so a source itself never needs one.

use crate::dictionary::ExceptionDictionary;
use crate::error::DictionaryError;
use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};

/// Raw entries returned by a source
pub type DictionaryEntries = HashMap<String, String>;

/// Something that can produce exception dictionary data
///
/// Any `Fn() -> impl Future<Output = Result<DictionaryEntries, DictionaryError>>`
/// is a source, which is how hosts plug in their own fetchers.
pub trait DictionarySource {
    /// Fetch the entries
    fn fetch(&self) -> impl Future<Output = Result<DictionaryEntries, DictionaryError>> + Send;

    /// Short human-readable description for log messages
    fn describe(&self) -> String {
        "custom source".to_string()
    }
}

/// JSON dictionary file read with `tokio::fs`
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Source reading `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// File this source reads
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DictionarySource for JsonFileSource {
    fn fetch(&self) -> impl Future<Output = Result<DictionaryEntries, DictionaryError>> + Send {
        let path = self.path.clone();
        async move {
            let text = tokio::fs::read_to_string(&path).await?;
            ExceptionDictionary::parse_json(&text)
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// JSON dictionary text already in memory, e.g. an embedded asset
#[derive(Debug, Clone)]
pub struct JsonTextSource {
    text: String,
}

impl JsonTextSource {
    /// Source parsing `text`
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }
}

impl DictionarySource for JsonTextSource {
    fn fetch(&self) -> impl Future<Output = Result<DictionaryEntries, DictionaryError>> + Send {
        let parsed = ExceptionDictionary::parse_json(&self.text);
        async move { parsed }
    }

    fn describe(&self) -> String {
        "inline JSON".to_string()
    }
}

impl<F, Fut> DictionarySource for F
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<DictionaryEntries, DictionaryError>> + Send,
{
    fn fetch(&self) -> impl Future<Output = Result<DictionaryEntries, DictionaryError>> + Send {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_json_file_source() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"საქართველო": "სა-ქარ-თვე-ლო"}}"#).unwrap();

        let source = JsonFileSource::new(file.path());
        let entries = source.fetch().await.unwrap();
        assert_eq!(entries.get("საქართველო").map(String::as_str), Some("სა-ქარ-თვე-ლო"));
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = JsonFileSource::new("/nonexistent/gehyph/dictionary.json");
        assert!(matches!(source.fetch().await, Err(DictionaryError::Io(_))));
    }

    #[tokio::test]
    async fn test_text_source() {
        let entries = JsonTextSource::new(r#"{"ენა": "ე-ნა"}"#).fetch().await.unwrap();
        assert_eq!(entries.len(), 1);

        let bad = JsonTextSource::new("not json").fetch().await;
        assert!(matches!(bad, Err(DictionaryError::Parse(_))));
    }

    #[tokio::test]
    async fn test_closure_source() {
        let source = || async {
            let mut entries = DictionaryEntries::new();
            entries.insert("ბარბი".to_string(), "ბარ-ბი".to_string());
            Ok::<_, DictionaryError>(entries)
        };
        assert_eq!(source.fetch().await.unwrap().len(), 1);
        assert_eq!(source.describe(), "custom source");
    }
}
