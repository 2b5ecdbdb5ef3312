//! Reading `label = sequence` records
//!
//! One record per line, split on the LAST `=` of the line so labels may
//! themselves contain `=`. Label and sequence are trimmed of surrounding
//! whitespace. Blank lines are skipped; anything else that does not parse
//! aborts the run with its line number.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::{AlignError, Result};
use crate::types::Sequence;

/// Parse records from a buffered reader.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<Sequence>> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Some((label, seq)) = trimmed.rsplit_once('=') else {
            return Err(AlignError::MalformedRecord {
                line: line_no,
                msg: format!("missing '=' separator in {:?}", trimmed),
            });
        };

        let label = label.trim();
        let seq = seq.trim();
        if seq.is_empty() {
            return Err(AlignError::MalformedRecord {
                line: line_no,
                msg: format!("empty sequence for label {:?}", label),
            });
        }

        records.push(Sequence::new(label, seq.as_bytes()));
    }
    Ok(records)
}

/// Read records from a file path. Files ending in `.gz` are decompressed
/// transparently.
pub fn read_records_from_path(path: &Path) -> Result<Vec<Sequence>> {
    let file = File::open(path)?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        read_records(BufReader::new(GzDecoder::new(file)))
    } else {
        read_records(BufReader::new(file))
    }
}
