use thiserror::Error;

use crate::book::BookCode;
use crate::table::OffsetRange;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersificationError {
    #[error("Unknown book code: {0}")]
    UnknownBook(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid verse reference: {0}")]
    InvalidReference(String),

    #[error("Unknown versification system: {0}")]
    UnknownSystem(String),

    #[error("Invalid offset range for {book}: {range}")]
    InvalidRange { book: BookCode, range: OffsetRange },

    #[error("Overlapping offset ranges for {book}: {first} and {second}")]
    OverlappingRanges {
        book: BookCode,
        first: OffsetRange,
        second: OffsetRange,
    },

    #[error("Offset table format error: {0}")]
    TableFormat(String),
}
