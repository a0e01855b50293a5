use crate::tasks::KnnConfig;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Testing-set outcome of one holdout trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    pub correct: usize,
    pub tested: usize,
    /// Percentage of correctly classified testing rows.
    pub accuracy: f64,
}

impl TrialResult {
    pub fn new(correct: usize, tested: usize) -> Self {
        let accuracy = if tested == 0 {
            f64::NAN
        } else {
            correct as f64 / tested as f64 * 100.0
        };
        Self {
            correct,
            tested,
            accuracy,
        }
    }
}

/// Repeated-holdout result of one configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    #[serde(flatten)]
    pub config: KnnConfig,
    pub trials: Vec<TrialResult>,
    pub mean_accuracy: f64,
    pub cpu_seconds: f64,
}

impl RunSummary {
    pub fn new(config: KnnConfig, trials: Vec<TrialResult>, cpu_seconds: f64) -> Self {
        let mean_accuracy = mean(trials.iter().map(|t| t.accuracy));
        Self {
            config,
            trials,
            mean_accuracy,
            cpu_seconds,
        }
    }

    pub fn accuracies(&self) -> Vec<f64> {
        self.trials.iter().map(|t| t.accuracy).collect()
    }

    #[inline]
    pub(crate) fn fmtv(v: f64) -> String {
        if v.is_nan() {
            "NaN".into()
        } else {
            format!("{:.2}", v)
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { f64::NAN } else { sum / n as f64 }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} | mean={} | trials=[",
            self.config,
            Self::fmtv(self.mean_accuracy)
        )?;
        for (i, t) in self.trials.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", Self::fmtv(t.accuracy))?;
        }
        write!(f, "] | t={:.6}s", self.cpu_seconds)
    }
}
