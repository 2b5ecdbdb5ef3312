//! Core pairwise alignment: backtracing and common-run extraction

use crate::error::{AlignError, Result};
use crate::matrix::{AlignmentMatrix, Origin};
use crate::types::{AlignedPair, PairStats, ScoringParams, Sequence, GAP};

/// Reconstruct one optimal alignment from a filled matrix.
///
/// The walk starts at the bottom-right corner and follows origin tags until
/// it reaches row 0 or column 0. Any prefix of the longer sequence left
/// unconsumed at that point is dropped, not emitted as trailing gaps; this
/// truncation is load-bearing for the published statistics and must not be
/// "fixed". Comparison costs per step: diagonal 1, above 2, left 0.
pub fn backtrace(seq_a: &[u8], seq_b: &[u8], matrix: &AlignmentMatrix) -> Result<AlignedPair> {
    let mut aligned_a = Vec::new();
    let mut aligned_b = Vec::new();
    let mut comparisons = 0u64;

    let mut i = seq_a.len();
    let mut j = seq_b.len();
    while i > 0 && j > 0 {
        match matrix.get(i, j).origin {
            Origin::Diagonal => {
                comparisons += 1;
                aligned_a.push(seq_a[i - 1]);
                aligned_b.push(seq_b[j - 1]);
                i -= 1;
                j -= 1;
            }
            Origin::Above => {
                comparisons += 2;
                aligned_a.push(seq_a[i - 1]);
                aligned_b.push(GAP);
                i -= 1;
            }
            Origin::Left => {
                aligned_a.push(GAP);
                aligned_b.push(seq_b[j - 1]);
                j -= 1;
            }
            // Interior cells are labeled during the fill; hitting an
            // unlabeled one means the builder never wrote it.
            Origin::None => return Err(AlignError::InvariantViolation { row: i, col: j }),
        }
    }

    // Emission walked from the end, restore left-to-right order.
    aligned_a.reverse();
    aligned_b.reverse();
    Ok(AlignedPair {
        aligned_a,
        aligned_b,
        comparisons,
    })
}

/// Extract the common run of two equal-length aligned sequences.
///
/// Scans column by column and concatenates every position where both sides
/// agree. The result is not required to be contiguous; in a correctly
/// aligned pair the agreeing columns are exactly the matched positions.
/// Each column costs one comparison, an agreeing column one more.
pub fn common_run(aligned_a: &[u8], aligned_b: &[u8]) -> (Vec<u8>, u64) {
    debug_assert_eq!(aligned_a.len(), aligned_b.len());

    let mut run = Vec::new();
    let mut comparisons = 0u64;
    for (&a, &b) in aligned_a.iter().zip(aligned_b.iter()) {
        comparisons += 1;
        if a == b {
            comparisons += 1;
            run.push(a);
        }
    }
    (run, comparisons)
}

/// Align one sequence pair end to end: fill the matrix, backtrace, extract
/// the common run and assemble the statistics record. The matrix is dropped
/// on return; nothing is shared across pairs.
pub fn align_pair(
    a: &Sequence,
    b: &Sequence,
    a_idx: usize,
    b_idx: usize,
    params: &ScoringParams,
) -> Result<PairStats> {
    if a.is_empty() {
        return Err(AlignError::EmptySequence {
            label: a.label.clone(),
        });
    }
    if b.is_empty() {
        return Err(AlignError::EmptySequence {
            label: b.label.clone(),
        });
    }

    let (matrix, fill_comparisons) = AlignmentMatrix::build(&a.seq, &b.seq, params);
    if log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "trace grid for {} vs {}:\n{}",
            a.label,
            b.label,
            matrix.trace_grid()
        );
    }

    let aligned = backtrace(&a.seq, &b.seq, &matrix)?;
    let (run, extract_comparisons) = common_run(&aligned.aligned_a, &aligned.aligned_b);

    let comparisons = fill_comparisons + aligned.comparisons + extract_comparisons;
    let avg_len = (a.len() + b.len()) as f64 / 2.0;
    let ratio = comparisons as f64 / avg_len;

    Ok(PairStats {
        a_idx,
        b_idx,
        label_a: a.label.clone(),
        label_b: b.label.clone(),
        seq_a: a.seq.clone(),
        seq_b: b.seq.clone(),
        aligned_a: aligned.aligned_a,
        aligned_b: aligned.aligned_b,
        common_run: run,
        comparisons,
        avg_len,
        ratio,
    })
}
