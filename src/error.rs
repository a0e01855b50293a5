use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("line {line}, column {column}: cannot parse '{value}' as a finite number")]
    Parse {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl EvalError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        EvalError::InvalidConfig(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        EvalError::InvalidInput(msg.into())
    }
}
