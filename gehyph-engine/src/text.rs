//! Text and markup wrappers around word hyphenation

use crate::hyphenator::Hyphenator;
use gehyph_core::{segments, strip_markers, Segment};
use regex::Regex;
use std::sync::OnceLock;

/// Georgian runs shorter than this pass through `hyphenate_text` untouched
pub const MIN_TEXT_WORD_LEN: usize = 4;

/// Elements whose content is never hyphenated
pub const SKIPPED_TAGS: [&str; 5] = ["script", "style", "code", "pre", "textarea"];

static TAG: OnceLock<Regex> = OnceLock::new();
static CLOSING_TAG: OnceLock<Regex> = OnceLock::new();

fn tag_pattern() -> &'static Regex {
    TAG.get_or_init(|| {
        Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9]*)?[^>]*>").expect("tag pattern is valid")
    })
}

fn closing_tag_pattern() -> &'static Regex {
    CLOSING_TAG.get_or_init(|| {
        Regex::new(r"</([A-Za-z][A-Za-z0-9]*)\s*>").expect("closing tag pattern is valid")
    })
}

fn is_skipped(name: &str) -> bool {
    SKIPPED_TAGS.iter().any(|tag| tag.eq_ignore_ascii_case(name))
}

/// Offset in `rest` of the first `</name>`, matched case-insensitively
fn closing_tag_start(rest: &str, name: &str) -> Option<usize> {
    closing_tag_pattern()
        .captures_iter(rest)
        .find(|caps| caps[1].eq_ignore_ascii_case(name))
        .and_then(|caps| caps.get(0))
        .map(|m| m.start())
}

impl Hyphenator {
    /// Hyphenate every Georgian word of running text
    ///
    /// Stale soft hyphens and zero-width spaces are dropped first, as is the
    /// configured marker unless it is a plain `-`, which compound words keep.
    pub fn hyphenate_text(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let marker = self.marker();
        let strippable = if marker == "-" { "" } else { marker };
        let sanitized = strip_markers(text, strippable);

        let mut out = String::with_capacity(sanitized.len() + sanitized.len() / 4);
        for segment in segments(&sanitized) {
            match segment {
                Segment::Georgian(word) if word.chars().count() >= MIN_TEXT_WORD_LEN => {
                    out.push_str(&self.hyphenate(word));
                }
                other => out.push_str(other.as_str()),
            }
        }
        out
    }

    /// Hyphenate the text content of an HTML fragment
    ///
    /// Tags are copied as-is. The body of a `script`, `style`, `code`, `pre`
    /// or `textarea` element is copied verbatim up to its closing tag; an
    /// unclosed one runs to the end of the input.
    pub fn hyphenate_html(&self, html: &str) -> String {
        if html.is_empty() {
            return String::new();
        }

        let mut out = String::with_capacity(html.len() + html.len() / 4);
        let mut pos = 0;

        while let Some(caps) = tag_pattern().captures_at(html, pos) {
            let Some(tag) = caps.get(0) else { break };
            out.push_str(&self.hyphenate_text(&html[pos..tag.start()]));
            out.push_str(tag.as_str());
            pos = tag.end();

            let opens_skipped = caps[1].is_empty() && !tag.as_str().ends_with("/>");
            let skipped = caps
                .get(2)
                .filter(|name| opens_skipped && is_skipped(name.as_str()));
            if let Some(name) = skipped {
                let end = closing_tag_start(&html[pos..], name.as_str())
                    .map_or(html.len(), |offset| pos + offset);
                out.push_str(&html[pos..end]);
                pos = end;
            }
        }
        out.push_str(&self.hyphenate_text(&html[pos..]));
        out
    }
}
