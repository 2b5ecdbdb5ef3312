//! Report and summary output
//!
//! Two views of the same statistics records: a human-readable block per
//! pair, and a CSV table with one row per pair for downstream analysis.

use std::io::Write;

use crate::error::Result;
use crate::types::PairStats;

fn seq_str(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Append one pair's human-readable block, trailing blank line included.
pub fn write_report_block<W: Write>(out: &mut W, stats: &PairStats) -> Result<()> {
    writeln!(out, "{} = {}", stats.label_a, seq_str(&stats.seq_a))?;
    writeln!(out, "{} = {}", stats.label_b, seq_str(&stats.seq_b))?;
    writeln!(
        out,
        "Aligned {}: {}",
        stats.label_a,
        seq_str(&stats.aligned_a)
    )?;
    writeln!(
        out,
        "Aligned {}: {}",
        stats.label_b,
        seq_str(&stats.aligned_b)
    )?;
    writeln!(out, "LCS: {}", seq_str(&stats.common_run))?;
    writeln!(out, "Number of comparisons: {}", stats.comparisons)?;
    writeln!(out, "Average sequence length: {}", stats.avg_len)?;
    writeln!(
        out,
        "Number of comparisons / Average sequence length: {}",
        stats.ratio
    )?;
    writeln!(out)?;
    Ok(())
}

/// Write the full report, one block per pair in batch order.
pub fn write_report<W: Write>(out: &mut W, stats: &[PairStats]) -> Result<()> {
    for pair in stats {
        write_report_block(out, pair)?;
    }
    Ok(())
}

/// Write the tabular summary: a header row and one CSV row per pair with
/// the comparison count, interior cell count, average length, normalized
/// ratio and the common run.
pub fn write_summary<W: Write>(out: W, stats: &[PairStats]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record([
        "num_comparisons",
        "num_bases",
        "avg_seq_len",
        "comp_per_seq_len",
        "LCS",
    ])?;
    for pair in stats {
        writer.write_record([
            pair.comparisons.to_string(),
            pair.num_bases().to_string(),
            pair.avg_len.to_string(),
            pair.ratio.to_string(),
            seq_str(&pair.common_run),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
