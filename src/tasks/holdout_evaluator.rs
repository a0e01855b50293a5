use crate::classifiers::Classifier;
use crate::core::Dataset;
use crate::error::EvalError;
use crate::evaluation::{
    DEFAULT_TRAIN_FRACTION, HoldoutSplitter, RunSummary, TrialResult, normalize,
};
use crate::tasks::KnnConfig;

use cpu_time::ThreadTime;
use rand::Rng;

pub const DEFAULT_REPETITIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialOptions {
    pub repetitions: usize,
    pub train_fraction: f64,
}

impl Default for TrialOptions {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
            train_fraction: DEFAULT_TRAIN_FRACTION,
        }
    }
}

impl TrialOptions {
    pub fn splitter(&self) -> Result<HoldoutSplitter, EvalError> {
        HoldoutSplitter::new(self.train_fraction)
    }
}

/// Trains and tests one learner on `repetitions` independent random
/// holdouts of the same dataset.
pub struct HoldoutEvaluator<'d> {
    learner: Box<dyn Classifier>,
    dataset: &'d Dataset,
    splitter: HoldoutSplitter,
    repetitions: usize,
    trials: Vec<TrialResult>,
}

impl<'d> HoldoutEvaluator<'d> {
    pub fn new(
        learner: Box<dyn Classifier>,
        dataset: &'d Dataset,
        splitter: HoldoutSplitter,
        repetitions: usize,
    ) -> Result<Self, EvalError> {
        if repetitions == 0 {
            return Err(EvalError::invalid_config("repetitions must be > 0"));
        }

        let training_size = splitter.check_splittable(dataset.len())?;
        if learner.min_training_size() > training_size {
            return Err(EvalError::invalid_config(format!(
                "learner needs at least {} training rows but the holdout leaves {training_size}",
                learner.min_training_size()
            )));
        }

        Ok(Self {
            learner,
            dataset,
            splitter,
            repetitions,
            trials: Vec::with_capacity(repetitions),
        })
    }

    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&[TrialResult], EvalError> {
        self.trials.clear();

        for trial in 0..self.repetitions {
            let split = self.splitter.split(self.dataset, rng)?;
            self.learner
                .train(&split.training_rows, &split.training_labels)?;

            let mut correct = 0;
            for (row, expected) in split.testing_rows.iter().zip(&split.testing_labels) {
                if self.learner.predict(row)? == *expected {
                    correct += 1;
                }
            }

            let result = TrialResult::new(correct, split.testing_len());
            ftlog::debug!(
                "trial {}/{}: {}/{} correct ({:.2}%)",
                trial + 1,
                self.repetitions,
                result.correct,
                result.tested,
                result.accuracy
            );
            self.trials.push(result);
        }

        Ok(&self.trials)
    }

    pub fn into_trials(self) -> Vec<TrialResult> {
        self.trials
    }
}

/// Evaluates one kNN configuration: optional min-max normalisation over the
/// whole dataset, then `options.repetitions` holdout trials.
///
/// `k` is checked against the training partition size before any trial
/// runs.
pub fn run_trials<R: Rng + ?Sized>(
    dataset: &Dataset,
    config: &KnnConfig,
    options: &TrialOptions,
    rng: &mut R,
) -> Result<RunSummary, EvalError> {
    let start = ThreadTime::now();

    let splitter = options.splitter()?;
    config.validate(splitter.check_splittable(dataset.len())?)?;

    let normalized;
    let data = if config.normalize {
        normalized = normalize(dataset)?;
        &normalized
    } else {
        dataset
    };

    let learner = Box::new(config.build_classifier()?);
    let mut evaluator = HoldoutEvaluator::new(learner, data, splitter, options.repetitions)?;
    evaluator.run(rng)?;

    let summary = RunSummary::new(
        *config,
        evaluator.into_trials(),
        start.elapsed().as_secs_f64(),
    );
    ftlog::info!("{summary}");
    Ok(summary)
}
