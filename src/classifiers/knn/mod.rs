mod distance;
mod knn_classifier;
mod vote_tally;

pub use distance::DistanceMetric;
pub(crate) use distance::MetricSelector;
pub use knn_classifier::{KnnClassifier, classify, tally_votes};
pub use vote_tally::{VoteTally, VoteWeighting, ZERO_DISTANCE_WEIGHT};
