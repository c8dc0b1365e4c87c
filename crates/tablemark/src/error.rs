//! Error types for table conversion.

use thiserror::Error;

/// Errors that can occur while converting records into a Markdown table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Custom column sorting was requested without a comparator.
    #[error("sort mode is custom but no sort function was provided")]
    MissingSortFunction,

    /// A cell was wider than the column it had to fit into.
    ///
    /// Column widths are computed from the widest cell in each column, so
    /// this surfacing from [`convert`](crate::convert) indicates a width
    /// calculation bug, not a caller mistake.
    #[error("cannot pad a {width}-codepoint string into {limit} columns")]
    PadOverflow {
        /// Codepoint width of the string being padded.
        width: usize,
        /// Target width it was asked to fit into.
        limit: usize,
    },

    /// The record matrix contained no rows at all.
    #[error("no records: at least a header row is required")]
    EmptyInput,

    /// A data row's cell count did not match the header's.
    #[error("row {row} has {len} cells, expected {expected} to match the header")]
    RaggedRow {
        /// Zero-based row index into the record matrix.
        row: usize,
        /// Cell count of the offending row.
        len: usize,
        /// Cell count of the header row.
        expected: usize,
    },
}

/// Result type for table conversion operations.
pub type Result<T> = std::result::Result<T, TableError>;
