//! Error types for readquant

use std::fmt;

/// Result type alias for readquant operations
pub type Result<T> = std::result::Result<T, ReadquantError>;

/// Error types that can occur in readquant
///
/// Every failure is a local decision: the library never retries internally
/// and never substitutes a default. Callers decide whether to skip, log, or
/// abort the surrounding batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadquantError {
    /// A sequence position holds a symbol outside the `ACGTN` alphabet
    InvalidSymbol {
        /// The offending symbol
        symbol: char,
        /// Position within the sequence (0-indexed)
        position: usize,
    },

    /// A quality string position cannot encode a Phred+33 score
    InvalidQuality {
        /// The offending character
        value: char,
        /// Position within the quality string (0-indexed)
        position: usize,
    },

    /// Quality track length differs from its sequence length
    LengthMismatch {
        /// Length of the sequence
        sequence_len: usize,
        /// Length of the quality track
        quality_len: usize,
    },

    /// A zero-length sequence was passed to an alignment operation
    EmptyInput,
}

impl fmt::Display for ReadquantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadquantError::InvalidSymbol { symbol, position } => {
                write!(f, "invalid symbol {:?} at position {}", symbol, position)
            }
            ReadquantError::InvalidQuality { value, position } => {
                write!(
                    f,
                    "invalid quality character {:?} at position {} (expected Phred+33)",
                    value, position
                )
            }
            ReadquantError::LengthMismatch {
                sequence_len,
                quality_len,
            } => {
                write!(
                    f,
                    "quality track length {} does not match sequence length {}",
                    quality_len, sequence_len
                )
            }
            ReadquantError::EmptyInput => write!(f, "empty sequence"),
        }
    }
}

impl std::error::Error for ReadquantError {}
