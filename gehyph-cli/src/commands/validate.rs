//! Validate command implementation

use crate::error::CliError;
use crate::input::FileReader;
use anyhow::Result;
use clap::Args;
use gehyph_engine::{lookup_key, DictionaryEntries, ExceptionDictionary};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the JSON exception dictionary to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub dictionary: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating dictionary: {}", self.dictionary.display());

        let content = FileReader::read_text(&self.dictionary)?;
        let entries = match ExceptionDictionary::parse_json(&content) {
            Ok(entries) => entries,
            Err(e) => {
                println!("✗ Dictionary is invalid!");
                println!("  Error: {e}");
                return Err(CliError::InvalidDictionary(e.to_string()).into());
            }
        };

        println!("✓ Dictionary is valid!");
        println!("  Entries: {}", entries.len());

        let issues = check_entries(&entries);
        if !issues.is_empty() {
            println!("  {} entries need attention:", issues.len());
            for issue in &issues {
                println!("    {issue}");
            }
        }
        Ok(())
    }
}

/// Entries that parse but will not behave as their author expects
pub fn check_entries(entries: &DictionaryEntries) -> Vec<String> {
    let mut issues: Vec<String> = entries
        .iter()
        .filter_map(|(word, form)| check_entry(word, form))
        .collect();
    issues.sort();
    issues
}

fn check_entry(word: &str, form: &str) -> Option<String> {
    let key = lookup_key(word);
    if key.is_empty() || form.is_empty() {
        return Some(format!("{word:?}: empty word or hyphenation"));
    }
    if lookup_key(form) != key {
        return Some(format!("{word}: letters of '{form}' differ from the word"));
    }

    let syllables: Vec<&str> = form.split('-').collect();
    if syllables.iter().any(|s| s.is_empty()) {
        return Some(format!("{word}: empty syllable in '{form}'"));
    }
    let single = |s: &&str| s.chars().count() == 1;
    if syllables.len() > 1 && (single(&syllables[0]) || syllables.last().is_some_and(single)) {
        return Some(format!(
            "{word}: one-letter edge syllable in '{form}' is merged by the orphan pass"
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn entries(pairs: &[(&str, &str)]) -> DictionaryEntries {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_clean_entries() {
        let issues = check_entries(&entries(&[
            ("საქართველო", "სა-ქარ-თვე-ლო"),
            ("ენა", "ენა"),
        ]));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_flagged_entries() {
        let issues = check_entries(&entries(&[
            ("ბარბი", "ბარ-ბა"),
            ("კლასი", "კლა--სი"),
            ("იარაღი", "ი-ა-რა-ღი"),
        ]));
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().any(|i| i.contains("differ")));
        assert!(issues.iter().any(|i| i.contains("empty syllable")));
        assert!(issues.iter().any(|i| i.contains("one-letter")));
    }

    #[test]
    fn test_validate_valid_dictionary() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{"საქართველო": "სა-ქარ-თვე-ლო"}}"#).unwrap();

        let args = ValidateArgs {
            dictionary: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_dictionary() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{"საქართველო": ["სა", "ქარ"]}}"#).unwrap();

        let args = ValidateArgs {
            dictionary: temp_file.path().to_path_buf(),
        };
        let err = args.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidDictionary(_))
        ));
    }
}
