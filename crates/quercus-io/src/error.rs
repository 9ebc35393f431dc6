//! I/O error types for quercus-io.

use std::path::PathBuf;

/// Errors from reading and validating a numeric table file.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the input file does not exist or is unreadable.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when the CSV parser encounters a malformed record.
    #[error("CSV parse error in {path} at byte offset {offset}")]
    CsvParse {
        /// Path to the CSV file.
        path: PathBuf,
        /// Byte offset where the error occurred.
        offset: u64,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// Returned when the file contains zero data rows.
    #[error("empty table (no data rows) in {path}")]
    EmptyTable {
        /// Path to the CSV file.
        path: PathBuf,
    },

    /// Returned when a row has fewer than two columns.
    #[error("{path}: row {row_index} has {n_cols} columns, need a label and at least one feature")]
    TooFewColumns {
        /// Path to the CSV file.
        path: PathBuf,
        /// Zero-based row index.
        row_index: usize,
        /// Number of columns found.
        n_cols: usize,
    },

    /// Returned when a row has a different number of columns than the first row.
    #[error("inconsistent row length in {path}: row {row_index} has {got} columns, expected {expected}")]
    InconsistentRowLength {
        /// Path to the CSV file.
        path: PathBuf,
        /// Zero-based row index.
        row_index: usize,
        /// Expected number of columns (from the first row).
        expected: usize,
        /// Actual number of columns in this row.
        got: usize,
    },

    /// Returned when a cell is NaN, Inf, or otherwise not a finite float.
    #[error("non-finite value in {path}: row {row_index}, column {col_index}, raw value \"{raw}\"")]
    NonFiniteValue {
        /// Path to the CSV file.
        path: PathBuf,
        /// Zero-based row index.
        row_index: usize,
        /// Zero-based column index.
        col_index: usize,
        /// The raw string value that failed to parse.
        raw: String,
    },
}
