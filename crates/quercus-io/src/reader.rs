//! Numeric table reader with full input validation.

use std::path::{Path, PathBuf};

use quercus_forest::Matrix;
use tracing::{debug, info, instrument};

use crate::IoError;

/// Reads a training table from a headerless CSV file.
///
/// Expected format:
/// - No header row; every cell is a number.
/// - All rows have the same number of columns, at least two.
/// - The last column of each row is the label.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::CsvParse`] | Malformed CSV record |
/// | [`IoError::EmptyTable`] | Zero data rows |
/// | [`IoError::TooFewColumns`] | A row has fewer than two columns |
/// | [`IoError::InconsistentRowLength`] | Row length differs from the first row |
/// | [`IoError::NonFiniteValue`] | Cell is NaN, Inf, or unparseable |
pub struct TableReader {
    path: PathBuf,
}

impl TableReader {
    /// Create a new reader for the given CSV file path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Read and validate the file, returning a [`Matrix`].
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<Matrix, IoError> {
        let file = std::fs::File::open(&self.path).map_err(|e| IoError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;

        // flexible(true) allows rows with varying column counts so that our
        // own InconsistentRowLength check fires instead of a low-level
        // CsvParse error.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut rows: Vec<Vec<f64>> = Vec::new();
        let mut expected_cols: Option<usize> = None;

        for (row_index, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| IoError::CsvParse {
                path: self.path.clone(),
                offset: e.position().map_or(0, |p| p.byte()),
                source: e,
            })?;

            let n_cols = record.len();
            match expected_cols {
                None => {
                    if n_cols < 2 {
                        return Err(IoError::TooFewColumns {
                            path: self.path.clone(),
                            row_index,
                            n_cols,
                        });
                    }
                    expected_cols = Some(n_cols);
                    debug!(n_cols, "first row read");
                }
                Some(expected) => {
                    if n_cols != expected {
                        return Err(IoError::InconsistentRowLength {
                            path: self.path.clone(),
                            row_index,
                            expected,
                            got: n_cols,
                        });
                    }
                }
            }

            let mut row = Vec::with_capacity(n_cols);
            for (col_index, raw) in record.iter().enumerate() {
                let value: f64 = raw.trim().parse().map_err(|_| IoError::NonFiniteValue {
                    path: self.path.clone(),
                    row_index,
                    col_index,
                    raw: raw.to_string(),
                })?;
                if !value.is_finite() {
                    return Err(IoError::NonFiniteValue {
                        path: self.path.clone(),
                        row_index,
                        col_index,
                        raw: raw.to_string(),
                    });
                }
                row.push(value);
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(IoError::EmptyTable {
                path: self.path.clone(),
            });
        }

        info!(
            n_rows = rows.len(),
            n_cols = expected_cols.unwrap_or(0),
            "table loaded"
        );

        // Everything is already validated, so this should not fail, but
        // handle it gracefully rather than panicking.
        Matrix::from_rows(rows).map_err(|_| IoError::EmptyTable {
            path: self.path.clone(),
        })
    }
}
