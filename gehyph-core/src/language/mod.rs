//! Georgian alphabet knowledge: tables, classification, clusters

pub mod classifier;
pub mod clusters;
pub mod tables;

pub use classifier::{classify, is_georgian, is_georgian_letter, is_vowel, LetterClass};
pub use clusters::HarmonicClusters;
