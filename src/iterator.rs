//! Batch orchestration over all unordered sequence pairs

use rayon::prelude::*;

use crate::alignment::align_pair;
use crate::error::{AlignError, Result};
use crate::types::{PairStats, ScoringParams, Sequence};

/// Enumerate all unordered pairs in the fixed reference order: outer index
/// strictly greater than inner, so `(1,0), (2,0), (2,1), ...`. Report
/// blocks and summary rows must appear in exactly this order.
fn all_pairs(n: usize) -> Vec<(usize, usize)> {
    (0..n)
        .flat_map(|i| (0..i).map(move |j| (i, j)))
        .collect()
}

/// Reject a batch before any matrix is built: the scoring values must be
/// finite and every sequence non-empty.
fn check_batch(sequences: &[Sequence], params: &ScoringParams) -> Result<()> {
    params.validate()?;
    if let Some(s) = sequences.iter().find(|s| s.is_empty()) {
        return Err(AlignError::EmptySequence {
            label: s.label.clone(),
        });
    }
    Ok(())
}

/// Lazy iterator over all unordered pair alignments
///
/// Aligns one pair per `next()` call, in the fixed enumeration order.
/// Scoring parameters are fixed for the whole batch.
pub struct PairIterator<'a> {
    sequences: &'a [Sequence],
    params: ScoringParams,
    pairs: std::vec::IntoIter<(usize, usize)>,
}

impl<'a> PairIterator<'a> {
    pub fn new(sequences: &'a [Sequence], params: ScoringParams) -> Result<Self> {
        check_batch(sequences, &params)?;
        Ok(Self {
            sequences,
            params,
            pairs: all_pairs(sequences.len()).into_iter(),
        })
    }

    /// Number of pairs the full batch will process, `n * (n - 1) / 2`
    pub fn pair_count(&self) -> usize {
        let n = self.sequences.len();
        n * (n - 1) / 2
    }
}

impl Iterator for PairIterator<'_> {
    type Item = Result<PairStats>;

    fn next(&mut self) -> Option<Self::Item> {
        let (i, j) = self.pairs.next()?;
        Some(align_pair(
            &self.sequences[i],
            &self.sequences[j],
            i,
            j,
            &self.params,
        ))
    }
}

/// Align every unordered pair of `sequences` and collect the statistics
/// records in enumeration order.
///
/// Pairs are independent, so the batch runs on the current rayon thread
/// pool; the collected order is the sequential reference order regardless
/// of how many threads execute. The first failing pair aborts the whole
/// batch; there is no partial-batch recovery.
///
/// ```
/// use alignstat::{align_all_pairs, ScoringParams, Sequence};
///
/// let sequences = vec![
///     Sequence::new("S1", *b"AC"),
///     Sequence::new("S2", *b"AC"),
/// ];
/// let params = ScoringParams::new(1.0, -1.0, -1.0).unwrap();
///
/// let stats = align_all_pairs(&sequences, &params).unwrap();
/// assert_eq!(stats.len(), 1);
/// assert_eq!(stats[0].common_run, b"AC");
/// ```
pub fn align_all_pairs(sequences: &[Sequence], params: &ScoringParams) -> Result<Vec<PairStats>> {
    check_batch(sequences, params)?;
    all_pairs(sequences.len())
        .par_iter()
        .map(|&(i, j)| align_pair(&sequences[i], &sequences[j], i, j, params))
        .collect()
}
