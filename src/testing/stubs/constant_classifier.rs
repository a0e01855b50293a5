use crate::classifiers::Classifier;
use crate::error::EvalError;

/// Predicts the same label for every query.
pub struct ConstantClassifier {
    label: String,
}

impl ConstantClassifier {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Classifier for ConstantClassifier {
    fn train(&mut self, _rows: &[Vec<f64>], _labels: &[String]) -> Result<(), EvalError> {
        Ok(())
    }

    fn predict(&self, _query: &[f64]) -> Result<String, EvalError> {
        Ok(self.label.clone())
    }
}
