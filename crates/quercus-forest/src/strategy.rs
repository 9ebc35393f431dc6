//! Pluggable execution strategies for training the ensemble's trees.

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::debug;

use crate::error::ForestError;
use crate::matrix::Matrix;
use crate::tree::TreeNode;

/// Turns a list of `(matrix, column subset)` work items into trained
/// trees. The subsets are drawn before dispatch, so a serial and a pooled
/// strategy produce identical ensembles for the same draws.
pub trait TrainingStrategy {
    /// Train one tree per subset, preserving submission order.
    ///
    /// # Errors
    ///
    /// The first tree-induction error aborts the whole call; no partial
    /// ensemble is returned.
    fn train_trees(
        &self,
        matrix: &Matrix,
        subsets: &[Vec<usize>],
    ) -> Result<Vec<TreeNode>, ForestError>;
}

/// Trains every tree on the calling thread, one after another.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialTraining;

impl TrainingStrategy for SerialTraining {
    fn train_trees(
        &self,
        matrix: &Matrix,
        subsets: &[Vec<usize>],
    ) -> Result<Vec<TreeNode>, ForestError> {
        subsets
            .iter()
            .map(|columns| TreeNode::train(matrix, columns))
            .collect()
    }
}

/// Trains trees on a dedicated worker pool.
///
/// The pool is built once at construction and reused across every
/// [`TrainingStrategy::train_trees`] call; dropping the strategy releases
/// the workers. The matrix is shared with the workers by immutable
/// reference, so no data is copied per tree and nothing is mutated.
#[derive(Debug)]
pub struct PooledTraining {
    pool: rayon::ThreadPool,
}

impl PooledTraining {
    /// Build a pool of `n_workers` threads.
    ///
    /// # Errors
    ///
    /// | Variant | When |
    /// |---|---|
    /// | [`ForestError::InvalidWorkerCount`] | `n_workers` is zero |
    /// | [`ForestError::WorkerPoolBuild`] | the OS refuses the threads |
    pub fn new(n_workers: usize) -> Result<Self, ForestError> {
        if n_workers == 0 {
            return Err(ForestError::InvalidWorkerCount { n_workers });
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(n_workers)
            .build()
            .map_err(|source| ForestError::WorkerPoolBuild { source })?;
        debug!(n_workers, "worker pool built");
        Ok(Self { pool })
    }

    /// Number of workers in the pool.
    #[must_use]
    pub fn n_workers(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl TrainingStrategy for PooledTraining {
    fn train_trees(
        &self,
        matrix: &Matrix,
        subsets: &[Vec<usize>],
    ) -> Result<Vec<TreeNode>, ForestError> {
        // collect() blocks until every item finishes and keeps submission
        // order; a single Err fails the whole batch.
        self.pool.install(|| {
            subsets
                .par_iter()
                .map(|columns| TreeNode::train(matrix, columns))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn training_matrix() -> Matrix {
        Matrix::from_rows(vec![
            vec![1.0, 10.0, 0.0],
            vec![2.0, 20.0, 0.0],
            vec![8.0, 80.0, 1.0],
            vec![9.0, 90.0, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn zero_workers_rejected() {
        let err = PooledTraining::new(0).unwrap_err();
        assert!(matches!(err, ForestError::InvalidWorkerCount { n_workers: 0 }));
    }

    #[test]
    fn pool_reports_worker_count() {
        let strategy = PooledTraining::new(3).unwrap();
        assert_eq!(strategy.n_workers(), 3);
    }

    #[test]
    fn serial_trains_one_tree_per_subset() {
        let m = training_matrix();
        let subsets = vec![vec![0], vec![1], vec![0, 1]];
        let trees = SerialTraining.train_trees(&m, &subsets).unwrap();
        assert_eq!(trees.len(), 3);
    }

    #[test]
    fn pooled_matches_serial() {
        let m = training_matrix();
        let subsets = vec![vec![0], vec![1], vec![1, 0]];
        let serial = SerialTraining.train_trees(&m, &subsets).unwrap();
        let pooled = PooledTraining::new(2)
            .unwrap()
            .train_trees(&m, &subsets)
            .unwrap();
        assert_eq!(serial.len(), pooled.len());
        for (s, p) in serial.iter().zip(&pooled) {
            for i in 0..m.n_rows() {
                assert_eq!(s.classify(m.row(i)), p.classify(m.row(i)));
            }
        }
    }

    #[test]
    fn pool_is_reused_across_calls() {
        let m = training_matrix();
        let strategy = PooledTraining::new(2).unwrap();
        let first = strategy.train_trees(&m, &[vec![0]]).unwrap();
        let second = strategy.train_trees(&m, &[vec![0]]).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn worker_failure_aborts_the_batch() {
        let m = training_matrix();
        let (empty, _) = m.split(0, -100.0);
        let strategy = PooledTraining::new(2).unwrap();
        let err = strategy.train_trees(&empty, &[vec![0], vec![1]]).unwrap_err();
        assert!(matches!(err, ForestError::EmptyMatrix));
    }
}
