//! CART tree induction and traversal.

use tracing::trace;

use crate::error::ForestError;
use crate::matrix::Matrix;
use crate::stats::{mean, mode, regression_score};

/// Minimum variance reduction a split must achieve; anything smaller
/// turns the node into a leaf instead of recursing on noise.
pub const MINIMUM_GAIN: f64 = 0.1;

/// A node in a binary decision tree.
///
/// A parent exclusively owns its children, so the whole tree is dropped
/// together and cycles are impossible by construction.
#[derive(Debug, Clone)]
pub enum TreeNode {
    /// An interior split node.
    Split {
        /// Column compared during traversal.
        column: usize,
        /// Threshold: rows with `row[column] < value` go left.
        value: f64,
        /// Subtree for rows below the threshold.
        left: Box<TreeNode>,
        /// Subtree for the remaining rows.
        right: Box<TreeNode>,
    },
    /// A terminal node holding a fixed classification.
    Leaf {
        /// Label returned for any row reaching this node.
        class: f64,
    },
}

impl TreeNode {
    /// Induce a tree from `matrix` using the candidate feature columns in
    /// `columns`, scanned in the order given.
    ///
    /// Each internal split consumes its column, so left and right
    /// recursions never reuse it and depth is bounded by `columns.len()`.
    /// The node becomes a leaf (majority label of the rows reaching it)
    /// when candidates run out, the chosen threshold fails to separate
    /// the rows, or the variance gain falls below [`MINIMUM_GAIN`].
    ///
    /// # Errors
    ///
    /// Returns [`ForestError::EmptyMatrix`] when `matrix` has zero rows;
    /// callers are expected never to supply one.
    pub fn train(matrix: &Matrix, columns: &[usize]) -> Result<TreeNode, ForestError> {
        if matrix.is_empty() {
            return Err(ForestError::EmptyMatrix);
        }

        let majority_leaf = |matrix: &Matrix| -> TreeNode {
            let class = mode(&matrix.labels()).expect("matrix verified non-empty");
            TreeNode::Leaf { class }
        };

        if columns.is_empty() {
            return Ok(majority_leaf(matrix));
        }

        // Pick the candidate with the lowest score; first-seen wins ties
        // because the comparison is strict.
        let mut best: Option<(usize, f64)> = None;
        for &column in columns {
            let score = regression_score(matrix, column);
            if best.is_none_or(|(_, best_score)| score < best_score) {
                best = Some((column, score));
            }
        }
        let (split_column, parent_error) = best.expect("candidate set verified non-empty");

        let split_value = mean(&matrix.column(split_column));
        let (left, right) = matrix.split(split_column, split_value);
        if left.is_empty() || right.is_empty() {
            // Degenerate split: the threshold put everything on one side.
            return Ok(majority_leaf(matrix));
        }

        let left_error = regression_score(&left, split_column);
        let right_error = regression_score(&right, split_column);
        let gain = parent_error - (left_error + right_error);
        if gain < MINIMUM_GAIN {
            return Ok(majority_leaf(matrix));
        }

        trace!(split_column, split_value, gain, "splitting node");

        let child_columns: Vec<usize> = columns
            .iter()
            .copied()
            .filter(|&c| c != split_column)
            .collect();

        Ok(TreeNode::Split {
            column: split_column,
            value: split_value,
            left: Box::new(Self::train(&left, &child_columns)?),
            right: Box::new(Self::train(&right, &child_columns)?),
        })
    }

    /// Classify one row of feature values. A trailing label cell, if
    /// present, is ignored.
    ///
    /// `row` must cover every column this tree splits on, which holds for
    /// any row shaped like the training matrix.
    #[must_use]
    pub fn classify(&self, row: &[f64]) -> f64 {
        match self {
            TreeNode::Leaf { class } => *class,
            TreeNode::Split {
                column,
                value,
                left,
                right,
            } => {
                if row[*column] < *value {
                    left.classify(row)
                } else {
                    right.classify(row)
                }
            }
        }
    }

    /// Return `true` if this node is a leaf.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Maximum depth below this node. A lone leaf has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}
