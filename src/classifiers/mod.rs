pub mod classifier;
pub mod knn;

pub use classifier::Classifier;
pub use knn::{DistanceMetric, KnnClassifier, VoteWeighting};
