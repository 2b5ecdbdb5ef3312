//! Core types for the alignstat library

use crate::error::{AlignError, Result};

/// Gap marker inserted into an aligned sequence where the other side has no
/// counterpart symbol.
pub const GAP: u8 = b'-';

/// A labeled sequence read from the input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub label: String,
    pub seq: Vec<u8>,
}

impl Sequence {
    pub fn new(label: impl Into<String>, seq: impl Into<Vec<u8>>) -> Self {
        Self {
            label: label.into(),
            seq: seq.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

/// Scoring parameters for one batch of alignments
///
/// All three values are added to a predecessor score: `match_value` on a
/// symbol match, `mismatch_penalty` on a mismatch (typically negative) and
/// `gap_penalty` when a gap is introduced (typically negative).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringParams {
    pub match_value: f64,
    pub mismatch_penalty: f64,
    pub gap_penalty: f64,
}

impl ScoringParams {
    /// Create a validated parameter set. Rejects non-finite values so a bad
    /// parameter fails before any pairwise work starts.
    pub fn new(match_value: f64, mismatch_penalty: f64, gap_penalty: f64) -> Result<Self> {
        let params = Self {
            match_value,
            mismatch_penalty,
            gap_penalty,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("match-value", self.match_value),
            ("mismatch-penalty", self.mismatch_penalty),
            ("gap-penalty", self.gap_penalty),
        ] {
            if !value.is_finite() {
                return Err(AlignError::InvalidScore { name, value });
            }
        }
        Ok(())
    }
}

/// The two gap-padded sequences produced by backtracing, plus the
/// comparisons spent producing them. Both sides always have equal length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair {
    pub aligned_a: Vec<u8>,
    pub aligned_b: Vec<u8>,
    pub comparisons: u64,
}

/// Aggregated result for one unordered sequence pair
///
/// One record per pair `(i, j)` with `j < i`; immutable once built, feeds
/// both the text report and the CSV summary.
#[derive(Debug, Clone, PartialEq)]
pub struct PairStats {
    /// Indices into the original sequence list
    pub a_idx: usize,
    pub b_idx: usize,

    pub label_a: String,
    pub label_b: String,
    pub seq_a: Vec<u8>,
    pub seq_b: Vec<u8>,

    pub aligned_a: Vec<u8>,
    pub aligned_b: Vec<u8>,
    pub common_run: Vec<u8>,

    /// Total comparisons across fill, backtrace and extraction
    pub comparisons: u64,
    /// Average of the two original sequence lengths
    pub avg_len: f64,
    /// Comparisons normalized by the average sequence length
    pub ratio: f64,
}

impl PairStats {
    /// Number of interior matrix cells, `len(a) * len(b)`
    pub fn num_bases(&self) -> usize {
        self.seq_a.len() * self.seq_b.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_params_accept_finite_values() {
        assert!(ScoringParams::new(1.0, -1.5, -2.0).is_ok());
        assert!(ScoringParams::new(0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn scoring_params_reject_non_finite_values() {
        assert!(ScoringParams::new(f64::NAN, -1.0, -1.0).is_err());
        assert!(ScoringParams::new(1.0, f64::INFINITY, -1.0).is_err());
        assert!(ScoringParams::new(1.0, -1.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn sequence_reports_length() {
        let s = Sequence::new("S1", *b"ACGT");
        assert_eq!(s.len(), 4);
        assert!(!s.is_empty());
        assert!(Sequence::new("S2", *b"").is_empty());
    }
}
