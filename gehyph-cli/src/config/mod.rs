//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use gehyph_engine::{Hyphenator, HyphenatorConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Hyphenation configuration
    #[serde(default)]
    pub hyphenation: HyphenationConfig,

    /// Exception dictionary configuration
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Hyphenation-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct HyphenationConfig {
    /// Engine settings: marker, minimums, orphan pass, load timeout
    #[serde(flatten)]
    pub engine: HyphenatorConfig,

    /// Harmonic clusters added on top of the built-in set
    #[serde(default)]
    pub extra_clusters: Vec<String>,
}

/// Exception dictionary configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct DictionaryConfig {
    /// JSON dictionary loaded before hyphenating
    pub path: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
    }

    /// Load `path` if given, otherwise the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Build a hyphenator from the `[hyphenation]` section
    pub fn hyphenator(&self) -> Result<Hyphenator> {
        let mut builder = Hyphenator::builder().config(self.hyphenation.engine.clone());
        for cluster in &self.hyphenation.extra_clusters {
            builder = builder.harmonic_cluster(cluster.as_str());
        }
        builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Commented TOML template with every setting at its default
    pub fn template() -> String {
        r#"# gehyph configuration

[hyphenation]
# Inserted at every break. "\u00AD" is the invisible soft hyphen;
# use "-" to see the breaks or "&shy;" for raw HTML.
break_marker = "\u00AD"

# Letters kept before the first and after the last break
left_min = 2
right_min = 2

# Merge one-letter first/last syllables into their neighbours
fix_orphans = true

# Upper bound on dictionary loading, in milliseconds
load_timeout_ms = 3000

# Two-letter consonant clusters that stay together, on top of the built-in set
extra_clusters = []

[dictionary]
# JSON object of word to "-"-delimited hyphenation, e.g.
# { "საქართველო": "სა-ქარ-თვე-ლო" }
# path = "exceptions.json"

[output]
# text, json, tex or hunspell
format = "text"
pretty_json = true
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&CliConfig::template()).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.hyphenation.engine.break_marker, "\u{AD}");
    }

    #[test]
    fn test_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[hyphenation]
break_marker = "-"
extra_clusters = ["ვრ"]

[dictionary]
path = "exceptions.json"
"#
        )
        .unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.hyphenation.engine.break_marker, "-");
        assert_eq!(config.hyphenation.engine.left_min, 2);
        assert_eq!(config.dictionary.path, Some(PathBuf::from("exceptions.json")));
        assert_eq!(config.output.format, "text");

        let hyphenator = config.hyphenator().unwrap();
        assert_eq!(hyphenator.hyphenate("მთავრობა"), "მთა-ვრო-ბა");
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[hyphenation]\nleft_min = 0\n").unwrap();
        let config = CliConfig::from_file(file.path()).unwrap();
        let err = config.hyphenator().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[hyphenation]\nleft_min = \"two\"\n").unwrap();
        assert!(CliConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }
}
