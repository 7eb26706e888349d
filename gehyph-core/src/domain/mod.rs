//! Pure hyphenation domain: no I/O, no shared state

pub mod algorithm;
pub mod normalize;
pub mod orphan;
pub mod tokenize;

pub use algorithm::{apply_algorithm, break_positions, insert_markers, Bounds, BreakPositions};
pub use normalize::{lookup_key, normalize, strip_markers, NormalizedWord};
pub use orphan::{collapse_markers, fix_orphans, fragments};
pub use tokenize::{segments, Segment, Segments};
