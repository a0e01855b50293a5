use crate::classifiers::{DistanceMetric, KnnClassifier, VoteWeighting};
use crate::error::EvalError;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// One point of the evaluation grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KnnConfig {
    pub k: usize,
    pub metric: DistanceMetric,
    pub inverse_weighting: bool,
    pub normalize: bool,
}

impl KnnConfig {
    pub fn new(k: usize, metric: DistanceMetric) -> Self {
        Self {
            k,
            metric,
            inverse_weighting: false,
            normalize: false,
        }
    }

    pub fn with_inverse_weighting(mut self, inverse: bool) -> Self {
        self.inverse_weighting = inverse;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn weighting(&self) -> VoteWeighting {
        VoteWeighting::from(self.inverse_weighting)
    }

    /// Checks `k` against the number of rows the holdout leaves for training.
    pub fn validate(&self, training_size: usize) -> Result<(), EvalError> {
        if self.k == 0 || self.k > training_size {
            return Err(EvalError::invalid_config(format!(
                "k must be in [1, {training_size}] for this dataset, got {}",
                self.k
            )));
        }
        Ok(())
    }

    pub fn build_classifier(&self) -> Result<KnnClassifier, EvalError> {
        KnnClassifier::new(self.k, self.metric, self.weighting())
    }
}

impl Display for KnnConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "K={} | {} | InverseScoring: {} | Normalization: {}",
            self.k,
            self.metric.label(),
            self.inverse_weighting,
            self.normalize
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighting_follows_the_flag() {
        let c = KnnConfig::new(3, DistanceMetric::Manhattan);
        assert_eq!(c.weighting(), VoteWeighting::Uniform);
        assert_eq!(
            c.with_inverse_weighting(true).weighting(),
            VoteWeighting::InverseDistance
        );
    }

    #[test]
    fn validate_bounds_k_by_training_size() {
        let c = KnnConfig::new(75, DistanceMetric::Euclidean);
        assert!(c.validate(75).is_ok());
        assert!(matches!(c.validate(74), Err(EvalError::InvalidConfig(_))));
        assert!(KnnConfig::new(0, DistanceMetric::Euclidean).validate(10).is_err());
    }

    #[test]
    fn display_matches_report_line() {
        let c = KnnConfig::new(3, DistanceMetric::Minkowski).with_normalize(true);
        assert_eq!(
            c.to_string(),
            "K=3 | Minkowski Distance | InverseScoring: false | Normalization: true"
        );
    }
}
