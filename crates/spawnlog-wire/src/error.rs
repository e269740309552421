use thiserror::Error;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("failed to decode record: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("invalid field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl WireError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        WireError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

pub type WireResult<T> = Result<T, WireError>;
