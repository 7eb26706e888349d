//! Script-run tokenization
//!
//! Text is partitioned into maximal runs of Georgian letters and the
//! stretches between them. Concatenating the segments in order gives back
//! the input exactly.

use regex::{Matches, Regex};
use std::sync::OnceLock;

static GEORGIAN_RUN: OnceLock<Regex> = OnceLock::new();

fn georgian_run() -> &'static Regex {
    GEORGIAN_RUN.get_or_init(|| Regex::new("[ა-ჰ]+").expect("Georgian run pattern is valid"))
}

/// A piece of partitioned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Maximal run of Georgian letters
    Georgian(&'a str),
    /// Anything else: whitespace, punctuation, digits, other scripts
    Other(&'a str),
}

impl<'a> Segment<'a> {
    /// The segment text
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Georgian(s) | Segment::Other(s) => s,
        }
    }
}

/// Iterator over the segments of a text
#[derive(Debug)]
pub struct Segments<'a> {
    text: &'a str,
    runs: Matches<'static, 'a>,
    pos: usize,
    pending: Option<Segment<'a>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(segment) = self.pending.take() {
            return Some(segment);
        }

        match self.runs.next() {
            Some(run) => {
                let georgian = Segment::Georgian(run.as_str());
                let gap = &self.text[self.pos..run.start()];
                self.pos = run.end();
                if gap.is_empty() {
                    Some(georgian)
                } else {
                    self.pending = Some(georgian);
                    Some(Segment::Other(gap))
                }
            }
            None if self.pos < self.text.len() => {
                let rest = &self.text[self.pos..];
                self.pos = self.text.len();
                Some(Segment::Other(rest))
            }
            None => None,
        }
    }
}

/// Partition `text` into Georgian runs and everything else
pub fn segments(text: &str) -> Segments<'_> {
    Segments {
        text,
        runs: georgian_run().find_iter(text),
        pos: 0,
        pending: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_text() {
        let parts: Vec<Segment> = segments("საქართველო და Georgia, 2024!").collect();
        assert_eq!(
            parts,
            vec![
                Segment::Georgian("საქართველო"),
                Segment::Other(" "),
                Segment::Georgian("და"),
                Segment::Other(" Georgia, 2024!"),
            ]
        );
    }

    #[test]
    fn test_leading_other() {
        let parts: Vec<Segment> = segments("«ენა»").collect();
        assert_eq!(
            parts,
            vec![
                Segment::Other("«"),
                Segment::Georgian("ენა"),
                Segment::Other("»"),
            ]
        );
    }

    #[test]
    fn test_soft_hyphen_splits_runs() {
        let parts: Vec<&str> = segments("სა\u{AD}ქარ").map(|s| s.as_str()).collect();
        assert_eq!(parts, vec!["სა", "\u{AD}", "ქარ"]);
    }

    #[test]
    fn test_empty_and_non_georgian() {
        assert_eq!(segments("").count(), 0);
        assert_eq!(
            segments("hello").collect::<Vec<_>>(),
            vec![Segment::Other("hello")]
        );
    }

    #[test]
    fn test_concatenation_is_lossless() {
        let text = "  ქართული ენა (kartuli) — 33 ასო.\n";
        let joined: String = segments(text).map(|s| s.as_str()).collect();
        assert_eq!(joined, text);
    }
}
