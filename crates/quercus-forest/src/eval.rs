//! Training-set evaluation: predicted versus actual labels.

use crate::forest::Forest;
use crate::matrix::Matrix;
use crate::tree::TreeNode;

/// Anything that can assign a label to a row of feature values.
pub trait Classifier {
    /// Predict the label for one row. A trailing label cell is ignored.
    fn classify(&self, row: &[f64]) -> f64;
}

impl Classifier for TreeNode {
    fn classify(&self, row: &[f64]) -> f64 {
        TreeNode::classify(self, row)
    }
}

impl Classifier for Forest {
    fn classify(&self, row: &[f64]) -> f64 {
        Forest::classify(self, row)
    }
}

/// Counts of correct and incorrect predictions over a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Rows whose prediction matched the label.
    pub right: usize,
    /// Rows whose prediction did not.
    pub wrong: usize,
}

impl Evaluation {
    /// Total rows evaluated.
    #[must_use]
    pub fn total(&self) -> usize {
        self.right + self.wrong
    }

    /// Fraction of rows classified correctly, 0.0 when nothing was
    /// evaluated.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.right as f64 / self.total() as f64
    }
}

/// Classify every row of `matrix` and compare against its label (the
/// last cell). Read-only; the classifier and data are untouched.
#[must_use]
pub fn evaluate<C: Classifier + ?Sized>(matrix: &Matrix, classifier: &C) -> Evaluation {
    let label_col = matrix.n_cols() - 1;
    let mut right = 0;
    let mut wrong = 0;
    for row in matrix.rows() {
        if classifier.classify(row) == row[label_col] {
            right += 1;
        } else {
            wrong += 1;
        }
    }
    Evaluation { right, wrong }
}
