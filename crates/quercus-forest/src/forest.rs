//! Feature-bagged ensemble training and majority voting.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument};

use crate::bagging::draw_feature_subset;
use crate::error::ForestError;
use crate::matrix::Matrix;
use crate::stats::mode;
use crate::strategy::TrainingStrategy;
use crate::tree::TreeNode;

/// Configuration for forest training.
///
/// Construct via [`ForestConfig::new`], then chain `with_*` methods.
///
/// # Defaults
///
/// | Parameter | Default |
/// |-----------|---------|
/// | `seed`    | 42      |
#[derive(Debug, Clone)]
pub struct ForestConfig {
    n_trees: usize,
    n_features: usize,
    seed: u64,
}

impl ForestConfig {
    /// Create a config for `n_trees` trees, each restricted to a random
    /// subset of `n_features` feature columns.
    ///
    /// # Errors
    ///
    /// | Variant | When |
    /// |---|---|
    /// | [`ForestError::InvalidTreeCount`] | `n_trees` is zero |
    /// | [`ForestError::InvalidFeatureCount`] | `n_features` is zero |
    pub fn new(n_trees: usize, n_features: usize) -> Result<Self, ForestError> {
        if n_trees == 0 {
            return Err(ForestError::InvalidTreeCount { n_trees });
        }
        if n_features == 0 {
            return Err(ForestError::InvalidFeatureCount { n_features });
        }
        Ok(Self {
            n_trees,
            n_features,
            seed: 42,
        })
    }

    /// Set the random seed driving the feature-subset draws.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Return the number of trees.
    #[must_use]
    pub fn n_trees(&self) -> usize {
        self.n_trees
    }

    /// Return the per-tree feature subset size.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Return the random seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Train the ensemble.
    ///
    /// Every tree is trained on the full row set; only the candidate
    /// feature columns differ between trees (column bagging, no row
    /// resampling). All subsets are drawn serially from one seeded RNG
    /// before any tree is built, so the ensemble is identical for
    /// [`SerialTraining`](crate::SerialTraining) and
    /// [`PooledTraining`](crate::PooledTraining) under the same seed.
    ///
    /// # Errors
    ///
    /// | Variant | When |
    /// |---|---|
    /// | [`ForestError::EmptyMatrix`] | `matrix` has zero rows |
    /// | [`ForestError::FeatureCountExceedsData`] | `n_features` > feature columns |
    /// | Strategy errors | a worker's induction call failed |
    #[instrument(skip_all, fields(n_trees = self.n_trees, n_rows = matrix.n_rows()))]
    pub fn fit(
        &self,
        matrix: &Matrix,
        strategy: &impl TrainingStrategy,
    ) -> Result<Forest, ForestError> {
        if matrix.is_empty() {
            return Err(ForestError::EmptyMatrix);
        }
        let available = matrix.n_features();
        if self.n_features > available {
            return Err(ForestError::FeatureCountExceedsData {
                n_features: self.n_features,
                available,
            });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let subsets: Vec<Vec<usize>> = (0..self.n_trees)
            .map(|_| draw_feature_subset(available, self.n_features, &mut rng))
            .collect();
        debug!(
            n_subsets = subsets.len(),
            n_features = self.n_features,
            available,
            "feature subsets drawn"
        );

        let trees = strategy.train_trees(matrix, &subsets)?;

        info!(n_trees = trees.len(), "forest training complete");
        Ok(Forest { trees })
    }
}

/// A trained ensemble of decision trees voting by majority.
#[derive(Debug, Clone)]
pub struct Forest {
    trees: Vec<TreeNode>,
}

impl Forest {
    /// Classify a row by majority vote across all trees.
    ///
    /// Ties resolve to the first label to reach the winning vote count,
    /// in tree order (see [`mode`](crate::stats::mode)).
    #[must_use]
    pub fn classify(&self, row: &[f64]) -> f64 {
        let votes: Vec<f64> = self.trees.iter().map(|tree| tree.classify(row)).collect();
        mode(&votes).expect("a trained forest holds at least one tree")
    }

    /// Number of trees in the ensemble.
    #[must_use]
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Borrow the trained trees, in training order.
    #[must_use]
    pub fn trees(&self) -> &[TreeNode] {
        &self.trees
    }
}
