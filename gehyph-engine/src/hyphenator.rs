//! The hyphenation engine instance
//!
//! A `Hyphenator` owns its configuration, harmonic cluster set and
//! exception dictionary. Hyphenating never fails and never mutates; every
//! change goes through `&mut self`.

use crate::config::{ConfigUpdate, HyphenatorConfig};
use crate::dictionary::ExceptionDictionary;
use crate::error::{DictionaryError, EngineError, Result};
use crate::source::DictionarySource;
use gehyph_core::language::tables::LOOKUP_PUNCTUATION;
use gehyph_core::{
    apply_algorithm, collapse_markers, fix_orphans, fragments, normalize, strip_markers, Bounds,
    HarmonicClusters,
};
use log::{debug, warn};
use std::collections::{BTreeMap, HashMap};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of an external dictionary load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryStatus {
    /// Entries merged into the dictionary
    Loaded {
        /// Number of accepted entries
        entries: usize,
    },
    /// An external source was already loaded; nothing fetched
    AlreadyLoaded,
    /// Fetch failed or timed out; the engine stays in algorithm-only mode
    Unavailable {
        /// Why the source could not be used
        reason: String,
    },
}

impl DictionaryStatus {
    /// Whether dictionary data is in use after the call
    pub fn is_available(&self) -> bool {
        !matches!(self, DictionaryStatus::Unavailable { .. })
    }
}

/// Georgian hyphenation engine
#[derive(Debug, Clone)]
pub struct Hyphenator {
    config: HyphenatorConfig,
    bounds: Bounds,
    clusters: HarmonicClusters,
    dictionary: ExceptionDictionary,
    source_loaded: bool,
}

impl Default for Hyphenator {
    fn default() -> Self {
        Self::new()
    }
}

impl Hyphenator {
    /// Create a hyphenator with the default configuration
    pub fn new() -> Self {
        Self {
            config: HyphenatorConfig::default(),
            bounds: Bounds::default(),
            clusters: HarmonicClusters::default(),
            dictionary: ExceptionDictionary::new(),
            source_loaded: false,
        }
    }

    /// Create a hyphenator with a custom configuration
    pub fn with_config(config: HyphenatorConfig) -> Result<Self> {
        let bounds = config.validate()?;
        Ok(Self {
            config,
            bounds,
            ..Self::new()
        })
    }

    /// Create a builder
    pub fn builder() -> HyphenatorBuilder {
        HyphenatorBuilder::new()
    }

    /// Current configuration
    pub fn config(&self) -> &HyphenatorConfig {
        &self.config
    }

    /// Apply a partial configuration change
    ///
    /// The update is validated as a whole. On rejection the previous
    /// configuration stays in effect.
    pub fn configure(&mut self, update: ConfigUpdate) -> Result<()> {
        let candidate = self.config.merged(&update);
        match candidate.validate() {
            Ok(bounds) => {
                debug!("configuration updated: {candidate:?}");
                self.config = candidate;
                self.bounds = bounds;
                Ok(())
            }
            Err(e) => {
                warn!("rejected configuration update: {e}");
                Err(e)
            }
        }
    }

    /// Merge exception entries, returning how many were accepted
    pub fn load_dictionary<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.dictionary.load(entries)
    }

    /// Parse and merge a JSON object of word to `-`-delimited form
    pub fn load_dictionary_json(&mut self, json: &str) -> Result<usize> {
        Ok(self.dictionary.load_json(json)?)
    }

    /// Fetch entries from `source`, bounded by the configured timeout
    ///
    /// Only the first successful external load is performed; later calls
    /// report `AlreadyLoaded`. Failures are logged and leave the engine in
    /// algorithm-only mode.
    pub async fn load_dictionary_from_source<S>(&mut self, source: &S) -> DictionaryStatus
    where
        S: DictionarySource,
    {
        if self.source_loaded {
            return DictionaryStatus::AlreadyLoaded;
        }

        let timeout = self.config.load_timeout();
        let fetched = match tokio::time::timeout(timeout, source.fetch()).await {
            Ok(result) => result,
            Err(_) => Err(DictionaryError::Timeout(timeout)),
        };

        match fetched {
            Ok(entries) => {
                let entries = self.dictionary.load(entries);
                self.source_loaded = true;
                debug!("dictionary loaded from {}", source.describe());
                DictionaryStatus::Loaded { entries }
            }
            Err(e) => {
                warn!(
                    "dictionary unavailable from {}, using algorithm only: {e}",
                    source.describe()
                );
                DictionaryStatus::Unavailable {
                    reason: EngineError::from(e).to_string(),
                }
            }
        }
    }

    /// Add or replace one exception
    pub fn add_exception(&mut self, word: &str, hyphenated: &str) -> bool {
        self.dictionary.insert(word, hyphenated)
    }

    /// Remove one exception
    pub fn remove_exception(&mut self, word: &str) -> bool {
        self.dictionary.remove(word)
    }

    /// Sorted copy of the exception dictionary
    pub fn export_dictionary(&self) -> BTreeMap<String, String> {
        self.dictionary.export()
    }

    /// Number of exception entries
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }

    /// Add a two-letter cluster; returns false if it was already present
    pub fn add_harmonic_cluster(&mut self, cluster: &str) -> Result<bool> {
        Ok(self.clusters.insert(cluster)?)
    }

    /// Remove a cluster
    pub fn remove_harmonic_cluster(&mut self, cluster: &str) -> bool {
        self.clusters.remove(cluster)
    }

    /// Every cluster in use, sorted
    pub fn harmonic_clusters(&self) -> Vec<String> {
        self.clusters.to_sorted_vec()
    }

    /// Hyphenate one word
    pub fn hyphenate(&self, word: &str) -> String {
        let marker = self.config.break_marker.as_str();
        let normalized = normalize(word, marker);
        if normalized.cleaned.is_empty() {
            return normalized.cleaned;
        }

        let raw = match self.dictionary.lookup(&normalized.lookup_key, marker) {
            Some(form) => reattach_punctuation(&normalized.cleaned, &normalized.lookup_key, form),
            None => apply_algorithm(&normalized.cleaned, marker, &self.bounds, &self.clusters),
        };

        if self.config.fix_orphans {
            fix_orphans(&raw, marker)
        } else {
            collapse_markers(&raw, marker)
        }
    }

    /// Syllables of `word`; never contains an empty fragment
    pub fn syllables(&self, word: &str) -> Vec<String> {
        let hyphenated = self.hyphenate(word);
        fragments(&hyphenated, &self.config.break_marker)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Hyphenate many words
    #[cfg(feature = "parallel")]
    pub fn hyphenate_words<S>(&self, words: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        words.par_iter().map(|w| self.hyphenate(w.as_ref())).collect()
    }

    /// Hyphenate many words
    #[cfg(not(feature = "parallel"))]
    pub fn hyphenate_words<S>(&self, words: &[S]) -> Vec<String>
    where
        S: AsRef<str>,
    {
        words.iter().map(|w| self.hyphenate(w.as_ref())).collect()
    }

    /// Remove every marker this engine could have inserted
    pub fn unhyphenate(&self, text: &str) -> String {
        strip_markers(text, &self.config.break_marker)
    }

    /// Number of syllables `hyphenate` would produce
    ///
    /// An empty word has no syllables, so this is 0 for `""`.
    pub fn count_syllables(&self, word: &str) -> usize {
        self.syllables(word).len()
    }

    /// Number of breaks `hyphenate` would insert
    pub fn hyphenation_points(&self, word: &str) -> usize {
        self.count_syllables(word).saturating_sub(1)
    }

    /// Whether `text` is non-empty and consists only of Georgian letters
    pub fn is_georgian(&self, text: &str) -> bool {
        gehyph_core::is_georgian(text)
    }

    /// Whether `word` is long enough for algorithmic breaks
    pub fn can_hyphenate(&self, word: &str) -> bool {
        let cleaned = strip_markers(word, &self.config.break_marker);
        !cleaned.is_empty() && cleaned.chars().count() >= self.bounds.min_word_len()
    }

    pub(crate) fn marker(&self) -> &str {
        &self.config.break_marker
    }
}

/// Put leading and trailing punctuation of `cleaned` back around a dictionary form
fn reattach_punctuation(cleaned: &str, key: &str, form: String) -> String {
    let body = cleaned.trim_start_matches(LOOKUP_PUNCTUATION);
    let head = &cleaned[..cleaned.len() - body.len()];
    let body = body.trim_end_matches(LOOKUP_PUNCTUATION);
    if body != key {
        return form;
    }
    let tail = &cleaned[head.len() + body.len()..];
    format!("{head}{form}{tail}")
}

/// Builder for [`Hyphenator`]
#[derive(Debug, Default)]
pub struct HyphenatorBuilder {
    config: HyphenatorConfig,
    extra_clusters: Vec<String>,
    exceptions: HashMap<String, String>,
}

impl HyphenatorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn config(mut self, config: HyphenatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the break marker
    pub fn break_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.config.break_marker = marker.into();
        self
    }

    /// Set both minimums
    pub fn bounds(mut self, left_min: usize, right_min: usize) -> Self {
        self.config.left_min = left_min;
        self.config.right_min = right_min;
        self
    }

    /// Toggle orphan correction
    pub fn fix_orphans(mut self, enabled: bool) -> Self {
        self.config.fix_orphans = enabled;
        self
    }

    /// Set the dictionary source timeout
    pub fn load_timeout_ms(mut self, millis: u64) -> Self {
        self.config.load_timeout_ms = millis;
        self
    }

    /// Add a harmonic cluster on top of the defaults
    pub fn harmonic_cluster<S: Into<String>>(mut self, cluster: S) -> Self {
        self.extra_clusters.push(cluster.into());
        self
    }

    /// Add an exception entry
    pub fn exception<W: Into<String>, H: Into<String>>(mut self, word: W, hyphenated: H) -> Self {
        self.exceptions.insert(word.into(), hyphenated.into());
        self
    }

    /// Build the hyphenator
    pub fn build(self) -> Result<Hyphenator> {
        let mut hyphenator = Hyphenator::with_config(self.config)?;
        for cluster in &self.extra_clusters {
            hyphenator.add_harmonic_cluster(cluster)?;
        }
        hyphenator.load_dictionary(self.exceptions);
        Ok(hyphenator)
    }
}
