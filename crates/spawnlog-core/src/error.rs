use spawnlog_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("sink error: {0}")]
    Sink(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
