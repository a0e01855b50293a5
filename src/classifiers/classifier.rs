use crate::error::EvalError;

pub trait Classifier {
    /// Replaces any previous training data.
    fn train(&mut self, rows: &[Vec<f64>], labels: &[String]) -> Result<(), EvalError>;

    fn predict(&self, query: &[f64]) -> Result<String, EvalError>;

    /// Smallest training set this classifier accepts.
    fn min_training_size(&self) -> usize {
        1
    }
}
