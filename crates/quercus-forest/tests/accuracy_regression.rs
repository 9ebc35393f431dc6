//! Accuracy regression tests for quercus-forest.
//!
//! These tests verify that algorithmic changes do not degrade
//! training-set recovery on a deterministic synthetic dataset.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use quercus_forest::{
    evaluate, ForestConfig, Matrix, PooledTraining, SerialTraining, TreeNode,
};

// ---------------------------------------------------------------------------
// Helper: deterministic synthetic classification dataset
// ---------------------------------------------------------------------------

/// Generate a 300-row, 10-feature, 3-class dataset.
///
/// Every feature carries the class signal: cell = class + noise in
/// [0, 0.05). The label is the last column. Clusters are tight enough
/// that induction stops at pure leaves well inside the depth budget.
fn make_classification() -> Matrix {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let n_rows = 300;
    let n_features = 10;
    let n_classes = 3;

    let mut rows = Vec::with_capacity(n_rows);
    for i in 0..n_rows {
        let class = (i % n_classes) as f64;
        let mut row: Vec<f64> = (0..n_features)
            .map(|_| class + rng.r#gen::<f64>() * 0.05)
            .collect();
        row.push(class);
        rows.push(row);
    }
    Matrix::from_rows(rows).unwrap()
}

// ---------------------------------------------------------------------------
// a) single_tree_recovery_above_threshold
// ---------------------------------------------------------------------------

/// A single tree on the full candidate set must recover at least 95% of
/// the training rows.
///
/// Reference: observed recovery = 1.0 with seed=42.
#[test]
fn single_tree_recovery_above_threshold() {
    let matrix = make_classification();
    let columns: Vec<usize> = (0..matrix.n_features()).collect();
    let tree = TreeNode::train(&matrix, &columns).unwrap();

    let eval = evaluate(&matrix, &tree);
    assert!(
        eval.accuracy() > 0.95,
        "single tree recovery {} <= 0.95",
        eval.accuracy()
    );
}

// ---------------------------------------------------------------------------
// b) forest_recovery_above_threshold
// ---------------------------------------------------------------------------

/// A 100-tree forest bagging 4 of 10 columns must recover at least 95%
/// of the training rows.
#[test]
fn forest_recovery_above_threshold() {
    let matrix = make_classification();
    let forest = ForestConfig::new(100, 4)
        .unwrap()
        .with_seed(42)
        .fit(&matrix, &SerialTraining)
        .unwrap();

    let eval = evaluate(&matrix, &forest);
    assert!(
        eval.accuracy() > 0.95,
        "forest recovery {} <= 0.95",
        eval.accuracy()
    );
}

// ---------------------------------------------------------------------------
// c) forest_not_worse_than_single_tree
// ---------------------------------------------------------------------------

/// With the subset size equal to the full feature count, every tree sees
/// all columns, and the forest's training recovery must not fall below a
/// single covering tree's.
#[test]
fn forest_not_worse_than_single_tree() {
    let matrix = make_classification();
    let columns: Vec<usize> = (0..matrix.n_features()).collect();
    let tree = TreeNode::train(&matrix, &columns).unwrap();
    let forest = ForestConfig::new(50, matrix.n_features())
        .unwrap()
        .with_seed(42)
        .fit(&matrix, &SerialTraining)
        .unwrap();

    let tree_eval = evaluate(&matrix, &tree);
    let forest_eval = evaluate(&matrix, &forest);
    assert!(
        forest_eval.right >= tree_eval.right,
        "forest {} < tree {}",
        forest_eval.right,
        tree_eval.right
    );
}

// ---------------------------------------------------------------------------
// d) pooled_training_matches_serial
// ---------------------------------------------------------------------------

/// The same seed and config must produce vote-identical ensembles
/// whether the trees were trained serially or on a worker pool.
#[test]
fn pooled_training_matches_serial() {
    let matrix = make_classification();
    let config = ForestConfig::new(60, 4).unwrap().with_seed(7);

    let serial = config.fit(&matrix, &SerialTraining).unwrap();
    let pooled = config
        .fit(&matrix, &PooledTraining::new(4).unwrap())
        .unwrap();

    assert_eq!(serial.n_trees(), pooled.n_trees());
    for i in 0..matrix.n_rows() {
        let row = matrix.row(i);
        assert_eq!(serial.classify(row), pooled.classify(row));
    }
    // Held-out rows between the training clusters.
    for held_out in [
        vec![0.5; 10],
        vec![1.5; 10],
        vec![2.5; 10],
        vec![0.02; 10],
    ] {
        assert_eq!(serial.classify(&held_out), pooled.classify(&held_out));
    }
}
