/// Errors from matrix construction, tree induction, and forest training.
#[derive(Debug, thiserror::Error)]
pub enum ForestError {
    /// Returned when n_trees is zero.
    #[error("n_trees must be at least 1, got {n_trees}")]
    InvalidTreeCount {
        /// The invalid n_trees value provided.
        n_trees: usize,
    },

    /// Returned when n_features is zero.
    #[error("n_features must be at least 1, got {n_features}")]
    InvalidFeatureCount {
        /// The invalid n_features value provided.
        n_features: usize,
    },

    /// Returned when n_features exceeds the feature columns in the matrix.
    #[error("n_features is {n_features}, but the matrix has only {available} feature columns")]
    FeatureCountExceedsData {
        /// The configured subset size.
        n_features: usize,
        /// Feature columns available (total columns minus the label).
        available: usize,
    },

    /// Returned when a worker pool is requested with zero workers.
    #[error("n_workers must be at least 1, got {n_workers}")]
    InvalidWorkerCount {
        /// The invalid n_workers value provided.
        n_workers: usize,
    },

    /// Returned when the rayon worker pool cannot be built.
    #[error("failed to build worker pool")]
    WorkerPoolBuild {
        /// The underlying rayon error.
        #[source]
        source: rayon::ThreadPoolBuildError,
    },

    /// Returned when training is attempted on a matrix with zero rows.
    #[error("cannot train on a matrix with zero rows")]
    EmptyMatrix,

    /// Returned when a matrix is built with fewer than two columns.
    #[error("matrix needs a label column and at least one feature column, got {n_cols} columns")]
    TooFewColumns {
        /// The number of columns provided.
        n_cols: usize,
    },

    /// Returned when a row has a different number of cells than the first row.
    #[error("row {row_index} has {got} cells, expected {expected}")]
    RaggedRow {
        /// The expected number of cells.
        expected: usize,
        /// The actual number of cells in the row.
        got: usize,
        /// The zero-based index of the offending row.
        row_index: usize,
    },

    /// Returned when a cell is NaN or infinite.
    #[error("non-finite value at row {row_index}, column {col_index}")]
    NonFiniteValue {
        /// The zero-based index of the offending row.
        row_index: usize,
        /// The zero-based index of the offending column.
        col_index: usize,
    },
}
