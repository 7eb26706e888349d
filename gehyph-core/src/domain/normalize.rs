//! Word normalization
//!
//! Input may already carry markers from an earlier pass. Everything the
//! engine does starts from the marker-free form produced here.

use crate::language::tables::{LOOKUP_PUNCTUATION, SOFT_HYPHEN, ZERO_WIDTH_SPACE};

/// Clean forms of a raw word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedWord {
    /// Marker-free word, punctuation intact
    pub cleaned: String,
    /// Marker- and punctuation-free key for dictionary matching
    pub lookup_key: String,
}

/// Remove soft hyphens, zero-width spaces and every occurrence of `marker`
pub fn strip_markers(text: &str, marker: &str) -> String {
    let mut out: String = text.chars().filter(|&c| !is_stale_marker(c)).collect();
    if !marker.is_empty() && out.contains(marker) {
        out = out.replace(marker, "");
    }
    out
}

/// Strip the lookup punctuation set (and any stale markers) from a word
pub fn lookup_key(cleaned: &str) -> String {
    cleaned
        .chars()
        .filter(|c| !LOOKUP_PUNCTUATION.contains(c) && !is_stale_marker(*c))
        .collect()
}

#[inline]
fn is_stale_marker(c: char) -> bool {
    c == SOFT_HYPHEN || c == ZERO_WIDTH_SPACE
}

/// Produce both clean forms of `raw`
pub fn normalize(raw: &str, marker: &str) -> NormalizedWord {
    let cleaned = strip_markers(raw, marker);
    let lookup_key = lookup_key(&cleaned);
    NormalizedWord {
        cleaned,
        lookup_key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_default_markers() {
        assert_eq!(strip_markers("სა\u{AD}ქარ\u{200B}თველო", "\u{AD}"), "საქართველო");
    }

    #[test]
    fn test_strip_custom_marker() {
        assert_eq!(strip_markers("სა|ქარ|თვე|ლო", "|"), "საქართველო");
        assert_eq!(strip_markers("სა&shy;ქარ", "&shy;"), "საქარ");
        // Soft hyphens go even when another marker is configured
        assert_eq!(strip_markers("სა\u{AD}ქარ", "-"), "საქარ");
    }

    #[test]
    fn test_lookup_key_strips_punctuation() {
        assert_eq!(lookup_key("(საქართველო),"), "საქართველო");
        assert_eq!(lookup_key("ორ-ორი"), "ორორი");
        assert_eq!(lookup_key("a.b/c#d!e$f%g^h&i*j;k:l{m}n=o_p`q~r"), "abcdefghijklmnopqr");
    }

    #[test]
    fn test_normalize_keeps_punctuation_in_cleaned_form() {
        let n = normalize("საქარ\u{AD}თველო!", "\u{AD}");
        assert_eq!(n.cleaned, "საქართველო!");
        assert_eq!(n.lookup_key, "საქართველო");
    }

    #[test]
    fn test_normalize_empty() {
        let n = normalize("", "\u{AD}");
        assert!(n.cleaned.is_empty());
        assert!(n.lookup_key.is_empty());
    }
}
