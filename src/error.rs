//! Error types for transaction log decoding and reporting.

use crate::record_type::RecordType;
use thiserror::Error;

/// Result type alias for decoding and aggregation operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur while decoding a transaction log.
///
/// Every variant is fatal for the file being decoded; no partial summary is
/// produced once one of these has been returned.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Underlying read failed for a reason other than end of input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output error
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    /// Header prefix was not exactly the expected size
    #[error("Malformed header: expected {expected} bytes, found {actual}")]
    MalformedHeader { expected: usize, actual: usize },

    /// Record tag byte outside the known set
    #[error("Unknown record type {tag} at byte offset {offset}")]
    UnknownRecordType { tag: u8, offset: u64 },

    /// Underlying read failed while decoding a record
    #[error("Read failed in record {index} at byte offset {offset}: {source}")]
    RecordRead {
        index: u64,
        offset: u64,
        source: std::io::Error,
    },

    /// Input ended where a record tag was expected
    #[error("Unexpected end of stream before record {index} at byte offset {offset}")]
    EndOfStream { index: u64, offset: u64 },

    /// Record payload was cut short
    #[error("Incomplete record {index}: expected {expected} payload bytes, found {actual}")]
    IncompleteRecord {
        index: u64,
        expected: usize,
        actual: usize,
    },

    /// Monetary record carried no amount
    #[error("Record {index} of type {record_type} has no amount")]
    MissingAmount { index: u64, record_type: RecordType },

    /// Header magic did not match the expected marker
    #[error("Magic string does not match. Expected {expected:?}, received {actual:?}")]
    MagicMismatch { expected: String, actual: String },

    /// User id argument could not be parsed
    #[error("Invalid user id: {0}")]
    InvalidUserId(String),
}

impl LedgerError {
    /// Returns `true` if the input ended before the declared records were read,
    /// whether at a record boundary or inside a record.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            LedgerError::EndOfStream { .. } | LedgerError::IncompleteRecord { .. }
        )
    }
}
