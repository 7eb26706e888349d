//! Syllable export formats for external hyphenation tools

use crate::hyphenator::Hyphenator;

/// TeX pattern: `.სა1ქარ1თვე1ლო.`
pub fn tex_pattern<S: AsRef<str>>(syllables: &[S]) -> String {
    if syllables.is_empty() {
        return String::new();
    }
    format!(".{}.", join(syllables, "1"))
}

/// Hunspell hyphenation entry: `სა=ქარ=თვე=ლო`
pub fn hunspell_entry<S: AsRef<str>>(syllables: &[S]) -> String {
    join(syllables, "=")
}

fn join<S: AsRef<str>>(syllables: &[S], separator: &str) -> String {
    syllables
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(separator)
}

impl Hyphenator {
    /// TeX pattern for `word`
    pub fn to_tex_pattern(&self, word: &str) -> String {
        tex_pattern(&self.syllables(word))
    }

    /// Hunspell entry for `word`
    pub fn to_hunspell(&self, word: &str) -> String {
        hunspell_entry(&self.syllables(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats() {
        let h = Hyphenator::new();
        assert_eq!(h.to_tex_pattern("საქართველო"), ".სა1ქარ1თვე1ლო.");
        assert_eq!(h.to_hunspell("საქართველო"), "სა=ქარ=თვე=ლო");
    }

    #[test]
    fn test_unbreakable_word() {
        let h = Hyphenator::new();
        assert_eq!(h.to_tex_pattern("არა"), ".არა.");
        assert_eq!(h.to_hunspell("არა"), "არა");
    }

    #[test]
    fn test_empty() {
        assert_eq!(tex_pattern::<&str>(&[]), "");
        assert_eq!(hunspell_entry::<&str>(&[]), "");
    }

    #[test]
    fn test_independent_of_marker() {
        let h = Hyphenator::builder().break_marker("&shy;").build().unwrap();
        assert_eq!(h.to_hunspell("ბარბი"), "ბარ=ბი");
    }
}
