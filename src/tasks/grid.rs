use crate::classifiers::DistanceMetric;
use crate::classifiers::knn::MetricSelector;
use crate::core::Dataset;
use crate::error::EvalError;
use crate::evaluation::{ReportSink, RunSummary};
use crate::tasks::holdout_evaluator::{TrialOptions, run_trials};
use crate::tasks::knn_config::KnnConfig;

use rand::Rng;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// The configurations of the fertility-dataset study: a sweep over `k`,
/// metric, inverse weighting and normalisation.
pub fn default_grid() -> Vec<KnnConfig> {
    use DistanceMetric::{Euclidean, Manhattan, Minkowski};

    // (k, metric, inverse weighting, normalize)
    let rows: [(usize, DistanceMetric, bool, bool); 13] = [
        (1, Euclidean, false, false),
        (3, Manhattan, false, false),
        (3, Euclidean, false, false),
        (3, Minkowski, false, false),
        (5, Euclidean, false, false),
        (5, Euclidean, false, true),
        (7, Euclidean, false, false),
        (1, Manhattan, true, false),
        (3, Euclidean, true, false),
        (5, Euclidean, true, false),
        (5, Euclidean, true, true),
        (7, Manhattan, true, false),
        (75, Euclidean, true, true),
    ];

    rows.into_iter()
        .map(|(k, metric, inverse, normalize)| {
            KnnConfig::new(k, metric)
                .with_inverse_weighting(inverse)
                .with_normalize(normalize)
        })
        .collect()
}

/// One entry of a grid file. `metric` may be an exponent or a name and
/// defaults to Euclidean; the flags default to off.
#[derive(Debug, Deserialize)]
struct GridRecord {
    k: usize,
    #[serde(default)]
    metric: Option<MetricSelector>,
    #[serde(default)]
    inverse_weighting: bool,
    #[serde(default)]
    normalize: bool,
}

impl GridRecord {
    fn into_config(self) -> Result<KnnConfig, EvalError> {
        let metric = match self.metric {
            Some(selector) => selector.resolve()?,
            None => DistanceMetric::default(),
        };
        Ok(KnnConfig::new(self.k, metric)
            .with_inverse_weighting(self.inverse_weighting)
            .with_normalize(self.normalize))
    }
}

/// Reads a JSON array of configuration records.
///
/// Malformed JSON is a `Json` error; an empty array or an unknown metric
/// selector is `InvalidConfig`, naming the entry.
pub fn load_grid(path: &Path) -> Result<Vec<KnnConfig>, EvalError> {
    let reader = BufReader::new(File::open(path)?);
    let records: Vec<GridRecord> = serde_json::from_reader(reader)?;
    if records.is_empty() {
        return Err(EvalError::invalid_config(format!(
            "{} contains no configurations",
            path.display()
        )));
    }

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            record.into_config().map_err(|e| match e {
                EvalError::InvalidConfig(msg) => {
                    EvalError::InvalidConfig(format!("grid entry #{}: {msg}", i + 1))
                }
                other => other,
            })
        })
        .collect()
}

/// Runs every configuration in order, handing each summary to `sink`.
///
/// All configurations are validated against the dataset first, so an
/// invalid entry aborts the grid before any trial runs.
pub fn run_grid<R: Rng + ?Sized>(
    dataset: &Dataset,
    grid: &[KnnConfig],
    options: &TrialOptions,
    rng: &mut R,
    sink: &mut dyn ReportSink,
) -> Result<Vec<RunSummary>, EvalError> {
    let training_size = options.splitter()?.check_splittable(dataset.len())?;
    for (i, config) in grid.iter().enumerate() {
        config.validate(training_size).map_err(|e| match e {
            EvalError::InvalidConfig(msg) => {
                EvalError::InvalidConfig(format!("configuration #{} ({config}): {msg}", i + 1))
            }
            other => other,
        })?;
    }

    ftlog::info!(
        "evaluating {} configurations on {} rows ({} repetitions each)",
        grid.len(),
        dataset.len(),
        options.repetitions
    );

    let mut summaries = Vec::with_capacity(grid.len());
    for config in grid {
        let summary = run_trials(dataset, config, options, rng)?;
        sink.report(&summary)?;
        summaries.push(summary);
    }
    Ok(summaries)
}
