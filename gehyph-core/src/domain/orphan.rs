//! Orphan/widow correction
//!
//! A break that leaves one letter alone at either end of a word is worse
//! than no break at all. Dictionary data and loose bounds can both produce
//! such breaks, so this pass runs on every result.

/// Split on `marker`, dropping empty fragments
///
/// Dropping empties is what collapses adjacent markers.
pub fn fragments<'a>(hyphenated: &'a str, marker: &str) -> Vec<&'a str> {
    if marker.is_empty() {
        return vec![hyphenated];
    }
    hyphenated
        .split(marker)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Collapse runs of adjacent markers and trim markers at either end
pub fn collapse_markers(hyphenated: &str, marker: &str) -> String {
    if marker.is_empty() || !hyphenated.contains(marker) {
        return hyphenated.to_string();
    }
    fragments(hyphenated, marker).join(marker)
}

/// Merge a one-letter first or last fragment into its neighbour
///
/// First fragment is fixed before the last one; this is a single pass,
/// not a re-validation of every fragment.
pub fn fix_orphans(hyphenated: &str, marker: &str) -> String {
    if marker.is_empty() || !hyphenated.contains(marker) {
        return hyphenated.to_string();
    }

    let mut parts: Vec<String> = fragments(hyphenated, marker)
        .into_iter()
        .map(str::to_string)
        .collect();
    if parts.len() <= 1 {
        return parts.concat();
    }

    if parts[0].chars().count() == 1 {
        let first = parts.remove(0);
        parts[0].insert_str(0, &first);
    }

    if parts.len() > 1 && parts[parts.len() - 1].chars().count() == 1 {
        if let Some(last) = parts.pop() {
            if let Some(previous) = parts.last_mut() {
                previous.push_str(&last);
            }
        }
    }

    parts.join(marker)
}
