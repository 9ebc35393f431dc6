//! Statistical primitives shared by tree induction and ensemble voting.

use crate::matrix::Matrix;

/// Arithmetic mean. Returns 0.0 for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Majority value of a sequence, or `None` when it is empty.
///
/// Tie-break: the first value to reach the maximum count, scanning in
/// input order. `[1, 2, 2, 1]` yields `2` because `2` hits a count of
/// two before `1` does.
#[must_use]
pub fn mode(values: &[f64]) -> Option<f64> {
    // Counts keyed by value equality, insertion-ordered. Label sets are
    // tiny, so the linear lookup beats hashing float bits.
    let mut counts: Vec<(f64, usize)> = Vec::new();
    let mut best: Option<(f64, usize)> = None;
    for &value in values {
        let count = match counts.iter_mut().find(|(v, _)| *v == value) {
            Some(entry) => {
                entry.1 += 1;
                entry.1
            }
            None => {
                counts.push((value, 1));
                1
            }
        };
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Impurity of one column within a partition: the sum of squared
/// deviations of the column's values from their mean. Lower means the
/// column is more homogeneous, so splitting it buys less.
#[must_use]
pub fn regression_score(matrix: &Matrix, column: usize) -> f64 {
    let values = matrix.column(column);
    let center = mean(&values);
    values.iter().map(|v| (v - center) * (v - center)).sum()
}
