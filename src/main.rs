use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use quercus_forest::{
    evaluate, ForestConfig, PooledTraining, SerialTraining, TreeNode,
};
use quercus_io::TableReader;

#[derive(Parser)]
#[command(name = "quercus")]
#[command(about = "Train a CART tree and a feature-bagged forest on a numeric table")]
#[command(version)]
struct Cli {
    /// Path to the training data CSV (numeric cells, last column is the label)
    data: PathBuf,

    /// Number of trees in the forest
    #[arg(long, default_value_t = 100)]
    n_trees: usize,

    /// Feature columns drawn per tree (defaults to all feature columns)
    #[arg(long)]
    n_features: Option<usize>,

    /// Worker threads for forest training (0 = train serially)
    #[arg(long, default_value_t = 0)]
    workers: usize,

    /// RNG seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Enable verbose (debug-level) logging
    #[arg(long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let matrix = TableReader::new(&cli.data)
        .read()
        .context("failed to read training data")?;
    info!(
        n_rows = matrix.n_rows(),
        n_features = matrix.n_features(),
        "training data loaded"
    );

    // Single tree on the full candidate set.
    let columns: Vec<usize> = (0..matrix.n_features()).collect();
    let tree = TreeNode::train(&matrix, &columns).context("tree training failed")?;
    let tree_eval = evaluate(&matrix, &tree);
    println!(
        "single tree: recovered {:.2}% of {} training rows",
        tree_eval.accuracy() * 100.0,
        tree_eval.total()
    );

    // Feature-bagged forest, serial or pooled.
    let n_features = cli.n_features.unwrap_or_else(|| matrix.n_features());
    let config = ForestConfig::new(cli.n_trees, n_features)?.with_seed(cli.seed);
    let forest = if cli.workers == 0 {
        config.fit(&matrix, &SerialTraining)
    } else {
        let pool = PooledTraining::new(cli.workers)?;
        info!(workers = pool.n_workers(), "training on worker pool");
        config.fit(&matrix, &pool)
    }
    .context("forest training failed")?;

    let forest_eval = evaluate(&matrix, &forest);
    println!(
        "forest ({} trees, {} features/tree): recovered {:.2}% of {} training rows",
        forest.n_trees(),
        n_features,
        forest_eval.accuracy() * 100.0,
        forest_eval.total()
    );

    Ok(())
}
