//! Error types for alignstat

use std::fmt;

/// Result type alias for alignstat operations
pub type Result<T> = std::result::Result<T, AlignError>;

/// Error types that can occur while reading input or aligning a batch.
/// Every error is fatal: this is a deterministic batch computation, so
/// there is no retry or partial-batch recovery.
#[derive(Debug)]
pub enum AlignError {
    /// I/O error from reading input or writing output
    Io(std::io::Error),

    /// Input record that cannot be parsed (missing `=` separator or an
    /// empty sequence after trimming)
    MalformedRecord {
        /// 1-based line number where the record occurred
        line: usize,
        /// What was wrong with the record
        msg: String,
    },

    /// A sequence with no symbols handed to the aligner
    EmptySequence {
        /// Label of the offending sequence
        label: String,
    },

    /// Scoring parameter that is not a finite real number
    InvalidScore {
        /// Parameter name as given on the command line
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Interior matrix cell read during backtracing before it was filled.
    /// Indicates a builder defect, not a recoverable runtime condition.
    InvariantViolation {
        /// Row of the offending cell
        row: usize,
        /// Column of the offending cell
        col: usize,
    },
}

impl fmt::Display for AlignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignError::Io(e) => write!(f, "I/O error: {}", e),
            AlignError::MalformedRecord { line, msg } => {
                write!(f, "malformed record at line {}: {}", line, msg)
            }
            AlignError::EmptySequence { label } => {
                write!(f, "sequence {:?} is empty", label)
            }
            AlignError::InvalidScore { name, value } => {
                write!(f, "scoring parameter {} must be finite, got {}", name, value)
            }
            AlignError::InvariantViolation { row, col } => {
                write!(f, "matrix cell ({}, {}) read before it was filled", row, col)
            }
        }
    }
}

impl std::error::Error for AlignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AlignError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AlignError {
    fn from(error: std::io::Error) -> Self {
        AlignError::Io(error)
    }
}

impl From<csv::Error> for AlignError {
    fn from(error: csv::Error) -> Self {
        match error.into_kind() {
            csv::ErrorKind::Io(e) => AlignError::Io(e),
            other => AlignError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("CSV error: {:?}", other),
            )),
        }
    }
}
