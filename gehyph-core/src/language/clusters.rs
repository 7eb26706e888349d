//! Harmonic consonant cluster set

use super::classifier::is_georgian_letter;
use super::tables::DEFAULT_HARMONIC_CLUSTERS;
use crate::error::{CoreError, Result};
use std::collections::HashSet;

/// Set of two-letter consonant clusters kept together on one syllable
///
/// Stored as `[char; 2]` so the algorithm can test membership straight
/// from a `char` slice without building a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarmonicClusters {
    set: HashSet<[char; 2]>,
}

impl Default for HarmonicClusters {
    fn default() -> Self {
        let set = DEFAULT_HARMONIC_CLUSTERS
            .iter()
            .filter_map(|c| parse_pair(c))
            .collect();
        Self { set }
    }
}

impl HarmonicClusters {
    /// Create an empty set
    pub fn empty() -> Self {
        Self {
            set: HashSet::new(),
        }
    }

    /// Membership test on a pair of letters
    #[inline]
    pub fn contains_pair(&self, first: char, second: char) -> bool {
        self.set.contains(&[first, second])
    }

    /// Membership test on a string
    pub fn contains(&self, cluster: &str) -> bool {
        parse_pair(cluster).is_some_and(|pair| self.set.contains(&pair))
    }

    /// Add a cluster
    ///
    /// Returns `Ok(false)` when it was already present.
    pub fn insert(&mut self, cluster: &str) -> Result<bool> {
        let pair = parse_pair(cluster)
            .filter(|[a, b]| is_georgian_letter(*a) && is_georgian_letter(*b))
            .ok_or_else(|| CoreError::InvalidCluster(cluster.to_string()))?;
        Ok(self.set.insert(pair))
    }

    /// Remove a cluster, returning whether it was present
    pub fn remove(&mut self, cluster: &str) -> bool {
        parse_pair(cluster).is_some_and(|pair| self.set.remove(&pair))
    }

    /// Number of clusters
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// All clusters as sorted strings
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut clusters: Vec<String> = self.set.iter().map(|p| p.iter().collect()).collect();
        clusters.sort();
        clusters
    }
}

fn parse_pair(cluster: &str) -> Option<[char; 2]> {
    let mut chars = cluster.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(b), None) => Some([a, b]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set() {
        let clusters = HarmonicClusters::default();
        assert_eq!(clusters.len(), DEFAULT_HARMONIC_CLUSTERS.len());
        assert!(clusters.contains("ბრ"));
        assert!(clusters.contains_pair('ტ', 'რ'));
        assert!(!clusters.contains("თვ"));
    }

    #[test]
    fn test_insert_and_remove() {
        let mut clusters = HarmonicClusters::empty();
        assert!(clusters.is_empty());

        assert_eq!(clusters.insert("თვ"), Ok(true));
        assert_eq!(clusters.insert("თვ"), Ok(false));
        assert!(clusters.contains("თვ"));

        assert!(clusters.remove("თვ"));
        assert!(!clusters.remove("თვ"));
    }

    #[test]
    fn test_insert_rejects_bad_clusters() {
        let mut clusters = HarmonicClusters::empty();
        for bad in ["", "ბ", "ბრლ", "br"] {
            assert_eq!(
                clusters.insert(bad),
                Err(CoreError::InvalidCluster(bad.to_string()))
            );
        }
        assert!(clusters.is_empty());
    }

    #[test]
    fn test_sorted_vec() {
        let mut clusters = HarmonicClusters::empty();
        clusters.insert("ხვ").unwrap();
        clusters.insert("ბლ").unwrap();
        assert_eq!(clusters.to_sorted_vec(), vec!["ბლ", "ხვ"]);
    }
}
