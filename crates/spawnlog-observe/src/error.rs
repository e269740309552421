use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("journald is not supported on this platform")]
    JournaldNotSupported,

    #[error("journald init failed: {0}")]
    JournaldInitFailed(String),

    #[error("a global subscriber is already installed")]
    AlreadyInitialized,

    #[error("unknown timezone {0:?}, expected utc or local")]
    InvalidTimeZone(String),

    #[error("invalid filter expression: {0}")]
    InvalidLevel(String),
}

pub type LoggerResult<T> = Result<T, LoggerError>;
