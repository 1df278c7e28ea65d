//! Error types and handling

use std::fmt;

/// Structural failures that abort a whole decode.
///
/// Unreadable blocks are never errors; they become erasures in the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// More rows were detected than a PDF417 symbol can hold
    TooManyRows {
        /// Row cap of the symbology
        limit: usize,
    },
    /// The rows produced more codeword slots than a symbol can hold
    CodewordCapacity {
        /// Codeword slots available in one symbol
        capacity: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyRows { limit } => write!(f, "symbol exceeds {limit} rows"),
            Self::CodewordCapacity { capacity } => {
                write!(f, "symbol exceeds {capacity} codeword slots")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Result alias defaulting to [`DecodeError`]
pub type Result<T, E = DecodeError> = std::result::Result<T, E>;
