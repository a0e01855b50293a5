use crate::classifiers::Classifier;
use crate::error::EvalError;
use std::sync::{
    Arc,
    atomic::{AtomicU64, AtomicUsize, Ordering},
};

#[derive(Default)]
struct Counters {
    trainings: AtomicU64,
    predictions: AtomicU64,
    last_training_size: AtomicUsize,
}

pub struct TrainSpyHandle(Arc<Counters>);

impl TrainSpyHandle {
    pub fn trainings(&self) -> u64 {
        self.0.trainings.load(Ordering::Relaxed)
    }

    pub fn predictions(&self) -> u64 {
        self.0.predictions.load(Ordering::Relaxed)
    }

    pub fn last_training_size(&self) -> usize {
        self.0.last_training_size.load(Ordering::Relaxed)
    }
}

/// Records how often it is trained and queried; predicts the first label
/// of its last training set.
pub struct TrainSpyClassifier {
    counters: Arc<Counters>,
    first_label: String,
}

impl TrainSpyClassifier {
    pub fn new() -> (Self, TrainSpyHandle) {
        let counters = Arc::new(Counters::default());
        (
            Self {
                counters: counters.clone(),
                first_label: String::new(),
            },
            TrainSpyHandle(counters),
        )
    }
}

impl Classifier for TrainSpyClassifier {
    fn train(&mut self, rows: &[Vec<f64>], labels: &[String]) -> Result<(), EvalError> {
        self.counters.trainings.fetch_add(1, Ordering::Relaxed);
        self.counters
            .last_training_size
            .store(rows.len(), Ordering::Relaxed);
        self.first_label = labels.first().cloned().unwrap_or_default();
        Ok(())
    }

    fn predict(&self, _query: &[f64]) -> Result<String, EvalError> {
        self.counters.predictions.fetch_add(1, Ordering::Relaxed);
        Ok(self.first_label.clone())
    }
}
