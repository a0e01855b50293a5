mod grid;
mod holdout_evaluator;
mod knn_config;

pub use grid::{default_grid, load_grid, run_grid};
pub use holdout_evaluator::{
    DEFAULT_REPETITIONS, HoldoutEvaluator, TrialOptions, run_trials,
};
pub use knn_config::KnnConfig;
