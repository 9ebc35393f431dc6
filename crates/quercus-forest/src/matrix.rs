//! Tabular numeric data with a trailing label column.

use crate::error::ForestError;

/// A rectangular table of `f64` cells. The last column holds the label;
/// every other column is a feature.
///
/// Construct via [`Matrix::from_rows`], which validates shape and cell
/// values once so the training code never has to.
#[derive(Debug, Clone)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
    n_cols: usize,
}

impl Matrix {
    /// Build a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// | Variant | When |
    /// |---|---|
    /// | [`ForestError::EmptyMatrix`] | `rows` is empty |
    /// | [`ForestError::TooFewColumns`] | rows have fewer than 2 cells |
    /// | [`ForestError::RaggedRow`] | rows have inconsistent lengths |
    /// | [`ForestError::NonFiniteValue`] | any cell is NaN or infinite |
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ForestError> {
        let Some(first) = rows.first() else {
            return Err(ForestError::EmptyMatrix);
        };
        let n_cols = first.len();
        if n_cols < 2 {
            return Err(ForestError::TooFewColumns { n_cols });
        }
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(ForestError::RaggedRow {
                    expected: n_cols,
                    got: row.len(),
                    row_index,
                });
            }
            for (col_index, &cell) in row.iter().enumerate() {
                if !cell.is_finite() {
                    return Err(ForestError::NonFiniteValue {
                        row_index,
                        col_index,
                    });
                }
            }
        }
        Ok(Self { rows, n_cols })
    }

    /// Number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, label included.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Number of feature columns (everything except the label).
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.n_cols - 1
    }

    /// Return `true` when the matrix has no rows.
    ///
    /// Splits can produce empty partitions, so emptiness is representable
    /// even though [`Matrix::from_rows`] rejects it.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Copy out one column as a vector.
    #[must_use]
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row[index]).collect()
    }

    /// Copy out the label column (the last column of every row).
    #[must_use]
    pub fn labels(&self) -> Vec<f64> {
        self.column(self.n_cols - 1)
    }

    /// Borrow one row.
    #[must_use]
    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }

    /// Borrow all rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Partition the rows on a column: rows with `cell < threshold` go
    /// left, the rest go right. Either side may come back empty.
    #[must_use]
    pub fn split(&self, column: usize, threshold: f64) -> (Matrix, Matrix) {
        let mut left = Vec::new();
        let mut right = Vec::new();
        for row in &self.rows {
            if row[column] < threshold {
                left.push(row.clone());
            } else {
                right.push(row.clone());
            }
        }
        (
            Matrix {
                rows: left,
                n_cols: self.n_cols,
            },
            Matrix {
                rows: right,
                n_cols: self.n_cols,
            },
        )
    }
}
