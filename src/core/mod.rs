pub mod dataset;
pub mod dataset_header;

pub use dataset::{Dataset, parse_feature_value};
pub use dataset_header::DatasetHeader;
