//! Static character tables for Georgian (Mkhedruli)
//!
//! Everything here is plain data. Classification and cluster lookup
//! live in the sibling modules.

/// First letter of the Mkhedruli block handled by the engine (`ა`)
pub const GEORGIAN_FIRST: char = '\u{10D0}';

/// Last letter of the Mkhedruli block handled by the engine (`ჰ`)
pub const GEORGIAN_LAST: char = '\u{10F0}';

/// The five Georgian vowel letters
pub const VOWELS: [char; 5] = ['ა', 'ე', 'ი', 'ო', 'უ'];

/// Unicode SOFT HYPHEN
pub const SOFT_HYPHEN: char = '\u{AD}';

/// Default break marker (a soft hyphen)
pub const DEFAULT_BREAK_MARKER: &str = "\u{AD}";

/// Zero-width space, stripped as a stale marker
pub const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Delimiter used between syllables in exception dictionary data
pub const DICTIONARY_DELIMITER: char = '-';

/// Punctuation removed when computing a dictionary lookup key
pub const LOOKUP_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`',
    '~', '(', ')',
];

/// Default harmonic consonant clusters
///
/// Two-consonant onsets that stay together on the following syllable.
pub const DEFAULT_HARMONIC_CLUSTERS: [&str; 67] = [
    "ბლ", "ბრ", "ბღ", "ბზ", "გდ", "გლ", "გმ", "გნ", "გვ", "გზ", "გრ", //
    "დრ", "თლ", "თრ", "თღ", "კლ", "კმ", "კნ", "კრ", "კვ", "მტ", "პლ", //
    "პრ", "ჟღ", "რგ", "რლ", "რმ", "სწ", "სხ", "ტკ", "ტპ", "ტრ", "ფლ", //
    "ფრ", "ფქ", "ფშ", "ქლ", "ქნ", "ქვ", "ქრ", "ღლ", "ღრ", "ყლ", "ყრ", //
    "შთ", "შპ", "ჩქ", "ჩრ", "ცლ", "ცნ", "ცრ", "ცვ", "ძგ", "ძვ", "ძღ", //
    "წლ", "წრ", "წნ", "წკ", "ჭკ", "ჭრ", "ჭყ", "ხლ", "ხმ", "ხნ", "ხვ", "ჯგ",
];
