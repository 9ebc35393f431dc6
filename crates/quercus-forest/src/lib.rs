//! Feature-bagged random forest of CART regression trees.
//!
//! Trees split on the mean of the lowest-variance candidate column,
//! consume each column once per root-to-leaf path, and stop when the
//! variance gain of a split falls below a fixed threshold. The forest
//! trains every tree on the full row set with an independent random
//! subset of feature columns (columns are bagged, rows are not) and
//! classifies by majority vote. Training runs serially or on a retained
//! fixed-size worker pool.

mod bagging;
mod error;
mod eval;
mod forest;
mod matrix;
mod stats;
mod strategy;
mod tree;

pub use bagging::draw_feature_subset;
pub use error::ForestError;
pub use eval::{Classifier, Evaluation, evaluate};
pub use forest::{Forest, ForestConfig};
pub use matrix::Matrix;
pub use stats::{mean, mode, regression_score};
pub use strategy::{PooledTraining, SerialTraining, TrainingStrategy};
pub use tree::{MINIMUM_GAIN, TreeNode};
