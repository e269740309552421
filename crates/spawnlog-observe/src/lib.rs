//! Structured logging for tools that produce or consume spawn execution logs.
mod config;
mod error;
mod init;
mod object;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel, LoggerTimeZone, init_local_offset};

/// Installs the global tracing subscriber described by `cfg`.
///
/// All `tracing` events emitted by the spawnlog crates (malformed records, digest
/// anomalies, recorder decisions) go through this subscriber afterwards.
///
/// With [`LoggerTimeZone::Local`], call [`init_local_offset`] first, before any thread
/// is spawned.
///
/// # Examples
/// ```rust
/// use spawnlog_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("Failed to initialize logger");
///
/// tracing::info!("Logger initialized successfully");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => init::logger_text(cfg),
        LoggerFormat::Json => init::logger_json(cfg),
        LoggerFormat::Journald => init::logger_journald(cfg),
    }
}
