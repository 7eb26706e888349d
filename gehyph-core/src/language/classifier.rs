//! Character classification for syllable boundary detection

use super::tables::{GEORGIAN_FIRST, GEORGIAN_LAST, VOWELS};

/// Classification of characters for boundary detection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterClass {
    /// Georgian vowel letter
    Vowel,
    /// Any other Georgian letter
    Consonant,
    /// Anything outside the Georgian letter block
    Other,
}

/// Classify a single character
#[inline]
pub fn classify(ch: char) -> LetterClass {
    if VOWELS.contains(&ch) {
        LetterClass::Vowel
    } else if is_georgian_letter(ch) {
        LetterClass::Consonant
    } else {
        LetterClass::Other
    }
}

/// Check if character is a Georgian vowel
#[inline]
pub fn is_vowel(ch: char) -> bool {
    matches!(classify(ch), LetterClass::Vowel)
}

/// Check if character belongs to the Georgian letter block
#[inline]
pub fn is_georgian_letter(ch: char) -> bool {
    (GEORGIAN_FIRST..=GEORGIAN_LAST).contains(&ch)
}

/// True when `text` is non-empty and made only of Georgian letters
pub fn is_georgian(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_georgian_letter)
}
