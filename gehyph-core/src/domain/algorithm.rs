//! Vowel-pair syllable boundary detection
//!
//! For every pair of neighbouring vowels the consonant run between them is
//! inspected and at most one break position is proposed:
//!
//! - `V.V` and `V.CV`: break right after the first vowel
//! - a doubled consonant: break between the two copies
//! - a run ending in a harmonic cluster: break before the cluster
//! - otherwise: break after the first consonant
//!
//! Positions are counted in `char`s of the cleaned word. A position `p`
//! means "between `word[p - 1]` and `word[p]`".

use crate::error::{CoreError, Result};
use crate::language::{is_vowel, HarmonicClusters};
use smallvec::SmallVec;

/// Accepted break positions of one word, ascending
pub type BreakPositions = SmallVec<[usize; 8]>;

/// Minimum letters kept before the first and after the last break
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    left_min: usize,
    right_min: usize,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            left_min: 2,
            right_min: 2,
        }
    }
}

impl Bounds {
    /// Create bounds, rejecting zero on either side
    pub fn new(left_min: usize, right_min: usize) -> Result<Self> {
        if left_min == 0 {
            return Err(CoreError::InvalidMinimum {
                name: "left_min",
                value: left_min,
            });
        }
        if right_min == 0 {
            return Err(CoreError::InvalidMinimum {
                name: "right_min",
                value: right_min,
            });
        }
        Ok(Self {
            left_min,
            right_min,
        })
    }

    /// Letters required before the first break
    pub fn left_min(&self) -> usize {
        self.left_min
    }

    /// Letters required after the last break
    pub fn right_min(&self) -> usize {
        self.right_min
    }

    /// Shortest word that can receive any break
    pub fn min_word_len(&self) -> usize {
        self.left_min + self.right_min
    }

    #[inline]
    fn accepts(&self, position: usize, word_len: usize) -> bool {
        position >= self.left_min && word_len - position >= self.right_min
    }
}

/// Compute the accepted break positions of `word`
///
/// Returns an empty list for words shorter than `bounds.min_word_len()` or
/// with fewer than two vowels. Candidates that violate the bounds are
/// dropped silently.
pub fn break_positions(
    word: &[char],
    bounds: &Bounds,
    clusters: &HarmonicClusters,
) -> BreakPositions {
    let mut positions = BreakPositions::new();
    let len = word.len();
    if len < bounds.min_word_len() {
        return positions;
    }

    let vowels: SmallVec<[usize; 16]> = word
        .iter()
        .enumerate()
        .filter(|&(_, &c)| is_vowel(c))
        .map(|(i, _)| i)
        .collect();
    if vowels.len() < 2 {
        return positions;
    }

    for pair in vowels.windows(2) {
        let (v1, v2) = (pair[0], pair[1]);
        let candidate = candidate_position(v1, &word[v1 + 1..v2], clusters);
        if bounds.accepts(candidate, len) {
            positions.push(candidate);
        }
    }

    positions
}

/// Proposed break for the consonant run `between` that follows the vowel at `v1`
fn candidate_position(v1: usize, between: &[char], clusters: &HarmonicClusters) -> usize {
    let distance = between.len();
    if distance < 2 {
        return v1 + 1;
    }

    // Gemination
    if let Some(j) = between.windows(2).position(|w| w[0] == w[1]) {
        return v1 + 1 + j + 1;
    }

    if clusters.contains_pair(between[distance - 2], between[distance - 1]) {
        v1 + 1 + (distance - 2)
    } else {
        v1 + 2
    }
}

/// Insert `marker` at each position of `positions`
///
/// Positions refer to the unmarked word, so a single forward pass places
/// every marker without index shifting.
pub fn insert_markers(word: &[char], positions: &[usize], marker: &str) -> String {
    let mut out = String::with_capacity(word.len() * 3 + positions.len() * marker.len());
    let mut pending = positions.iter().peekable();
    for (i, &ch) in word.iter().enumerate() {
        while pending.next_if(|&&p| p == i).is_some() {
            if !out.ends_with(marker) {
                out.push_str(marker);
            }
        }
        out.push(ch);
    }
    out
}

/// Run the algorithm on an already cleaned word
pub fn apply_algorithm(
    word: &str,
    marker: &str,
    bounds: &Bounds,
    clusters: &HarmonicClusters,
) -> String {
    let chars: Vec<char> = word.chars().collect();
    let positions = break_positions(&chars, bounds, clusters);
    if positions.is_empty() {
        return word.to_string();
    }
    insert_markers(&chars, &positions, marker)
}
