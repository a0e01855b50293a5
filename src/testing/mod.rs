mod spies;
mod stubs;

pub use spies::{TrainSpyClassifier, TrainSpyHandle};
pub use stubs::ConstantClassifier;
