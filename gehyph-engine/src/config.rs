//! Configuration types for the engine

use crate::error::{EngineError, Result};
use gehyph_core::{Bounds, CoreError, DEFAULT_BREAK_MARKER};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default upper bound on an external dictionary fetch
pub const DEFAULT_LOAD_TIMEOUT_MS: u64 = 3000;

/// Hyphenator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HyphenatorConfig {
    /// String inserted at every accepted break
    pub break_marker: String,
    /// Letters kept before the first break
    pub left_min: usize,
    /// Letters kept after the last break
    pub right_min: usize,
    /// Merge one-letter first/last fragments into their neighbours
    pub fix_orphans: bool,
    /// Timeout for asynchronous dictionary sources, in milliseconds
    pub load_timeout_ms: u64,
}

impl Default for HyphenatorConfig {
    fn default() -> Self {
        Self {
            break_marker: DEFAULT_BREAK_MARKER.to_string(),
            left_min: 2,
            right_min: 2,
            fix_orphans: true,
            load_timeout_ms: DEFAULT_LOAD_TIMEOUT_MS,
        }
    }
}

impl HyphenatorConfig {
    /// Visible hyphen marker, handy for debugging and plain-text output
    pub fn visible() -> Self {
        Self {
            break_marker: "-".to_string(),
            ..Self::default()
        }
    }

    /// HTML entity marker for markup that is not decoded before display
    pub fn html_entity() -> Self {
        Self {
            break_marker: "&shy;".to_string(),
            ..Self::default()
        }
    }

    /// Check every field, returning the word bounds on success
    pub fn validate(&self) -> Result<Bounds> {
        if self.break_marker.is_empty() {
            return Err(CoreError::EmptyMarker.into());
        }
        if self.load_timeout_ms == 0 {
            return Err(EngineError::InvalidConfig {
                reason: "load_timeout_ms must be positive".to_string(),
            });
        }
        Ok(Bounds::new(self.left_min, self.right_min)?)
    }

    /// Dictionary source timeout as a `Duration`
    pub fn load_timeout(&self) -> Duration {
        Duration::from_millis(self.load_timeout_ms)
    }

    /// Apply `update` on a copy; `self` is untouched
    pub fn merged(&self, update: &ConfigUpdate) -> Self {
        let mut next = self.clone();
        if let Some(marker) = &update.break_marker {
            next.break_marker = marker.clone();
        }
        if let Some(left) = update.left_min {
            next.left_min = left;
        }
        if let Some(right) = update.right_min {
            next.right_min = right;
        }
        if let Some(fix) = update.fix_orphans {
            next.fix_orphans = fix;
        }
        if let Some(timeout) = update.load_timeout_ms {
            next.load_timeout_ms = timeout;
        }
        next
    }
}

/// Partial configuration change; unset fields keep their current value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigUpdate {
    /// New break marker
    pub break_marker: Option<String>,
    /// New left minimum
    pub left_min: Option<usize>,
    /// New right minimum
    pub right_min: Option<usize>,
    /// New orphan toggle
    pub fix_orphans: Option<bool>,
    /// New load timeout
    pub load_timeout_ms: Option<u64>,
}

impl ConfigUpdate {
    /// Empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the break marker
    pub fn break_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.break_marker = Some(marker.into());
        self
    }

    /// Set the left minimum
    pub fn left_min(mut self, value: usize) -> Self {
        self.left_min = Some(value);
        self
    }

    /// Set the right minimum
    pub fn right_min(mut self, value: usize) -> Self {
        self.right_min = Some(value);
        self
    }

    /// Toggle orphan correction
    pub fn fix_orphans(mut self, enabled: bool) -> Self {
        self.fix_orphans = Some(enabled);
        self
    }

    /// Set the load timeout in milliseconds
    pub fn load_timeout_ms(mut self, value: u64) -> Self {
        self.load_timeout_ms = Some(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HyphenatorConfig::default();
        assert_eq!(config.break_marker, "\u{AD}");
        assert_eq!(config.left_min, 2);
        assert_eq!(config.right_min, 2);
        assert!(config.fix_orphans);
        assert_eq!(config.load_timeout(), Duration::from_secs(3));
        assert_eq!(config.validate().unwrap(), Bounds::default());
    }

    #[test]
    fn test_presets() {
        assert_eq!(HyphenatorConfig::visible().break_marker, "-");
        assert_eq!(HyphenatorConfig::html_entity().break_marker, "&shy;");
    }

    #[test]
    fn test_validation_rejects() {
        let mut config = HyphenatorConfig::default();
        config.left_min = 0;
        assert!(matches!(
            config.validate(),
            Err(EngineError::Core(CoreError::InvalidMinimum { .. }))
        ));

        let config = HyphenatorConfig {
            break_marker: String::new(),
            ..HyphenatorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::Core(CoreError::EmptyMarker))
        ));

        let config = HyphenatorConfig {
            load_timeout_ms: 0,
            ..HyphenatorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_merge_only_touches_set_fields() {
        let base = HyphenatorConfig::default();
        let next = base.merged(&ConfigUpdate::new().break_marker("|").right_min(3));
        assert_eq!(next.break_marker, "|");
        assert_eq!(next.right_min, 3);
        assert_eq!(next.left_min, base.left_min);
        assert_eq!(next.fix_orphans, base.fix_orphans);
    }

    #[test]
    fn test_serde_defaults_fill_missing_fields() {
        let config: HyphenatorConfig = serde_json::from_str(r#"{"left_min": 3}"#).unwrap();
        assert_eq!(config.left_min, 3);
        assert_eq!(config.right_min, 2);
        assert_eq!(config.break_marker, "\u{AD}");
    }
}
