//! Alignstat - all-pairs global sequence alignment with comparison statistics
//!
//! For every unordered pair of labeled input sequences, this library builds
//! a dynamic-programming score matrix (with a zero-cost border, so leading
//! gaps are free), reconstructs one optimal alignment by backtracing the
//! per-cell origin tags, extracts the common run of the aligned pair, and
//! aggregates the comparison counts spent in each phase into a per-pair
//! statistics record. The records feed a human-readable report and a CSV
//! summary used to study the empirical cost of the algorithm.

pub mod alignment;
pub mod error;
pub mod input;
pub mod iterator;
pub mod matrix;
pub mod report;
pub mod types;

// Re-export the main entry points and types
pub use alignment::{align_pair, backtrace, common_run};
pub use error::{AlignError, Result};
pub use input::{read_records, read_records_from_path};
pub use iterator::{align_all_pairs, PairIterator};
pub use matrix::{AlignmentMatrix, Cell, Origin};
pub use types::{AlignedPair, PairStats, ScoringParams, Sequence, GAP};
