mod train_spy_classifier;

pub use train_spy_classifier::{TrainSpyClassifier, TrainSpyHandle};
