use crate::core::Dataset;
use crate::error::EvalError;

pub trait DataSource {
    fn load(&self) -> Result<Dataset, EvalError>;
}
