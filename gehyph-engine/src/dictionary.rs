//! Exception dictionary overlay
//!
//! Entries map a lookup key to a `-`-delimited hyphenated form. Keys are
//! normalized on the way in, so `"(სა-ქარ)"` and `"საქარ"` address the same
//! entry.

use crate::error::DictionaryError;
use gehyph_core::{lookup_key, DICTIONARY_DELIMITER};
use log::debug;
use std::collections::{BTreeMap, HashMap};

/// Word-to-hyphenation exceptions that take precedence over the algorithm
#[derive(Debug, Clone, Default)]
pub struct ExceptionDictionary {
    entries: HashMap<String, String>,
}

impl ExceptionDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat JSON object of word to hyphenated form
    pub fn parse_json(json: &str) -> Result<HashMap<String, String>, DictionaryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Insert or replace one entry
    ///
    /// Returns false when the key is empty after normalization or the form
    /// holds nothing but delimiters.
    pub fn insert(&mut self, word: &str, hyphenated: &str) -> bool {
        let key = lookup_key(word);
        if key.is_empty() || hyphenated.chars().all(|c| c == DICTIONARY_DELIMITER) {
            return false;
        }
        self.entries.insert(key, hyphenated.to_string());
        true
    }

    /// Merge `entries` into the dictionary, returning how many were accepted
    pub fn load<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let accepted = entries
            .into_iter()
            .filter(|(word, form)| self.insert(word, form))
            .count();
        debug!("loaded {accepted} dictionary entries ({} total)", self.len());
        accepted
    }

    /// Parse and merge JSON dictionary data
    pub fn load_json(&mut self, json: &str) -> Result<usize, DictionaryError> {
        let parsed = Self::parse_json(json)?;
        Ok(self.load(parsed))
    }

    /// Stored form for `key`, with delimiters replaced by `marker`
    pub fn lookup(&self, key: &str, marker: &str) -> Option<String> {
        let stored = self.entries.get(key)?;
        debug!("dictionary hit for {key}");
        Some(stored.replace(DICTIONARY_DELIMITER, marker))
    }

    /// Raw stored form for `word`
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(&lookup_key(word)).map(String::as_str)
    }

    /// Remove the entry for `word`
    pub fn remove(&mut self, word: &str) -> bool {
        self.entries.remove(&lookup_key(word)).is_some()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted copy of every entry
    pub fn export(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
