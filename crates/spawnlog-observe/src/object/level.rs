use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::LoggerError;

/// Validated `EnvFilter` expression, such as `"info"` or `"spawnlog_core=debug,warn"`.
///
/// The raw string is kept for serialization; the filter is built on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// # Examples
    /// ```
    /// use spawnlog_observe::LoggerLevel;
    ///
    /// let lvl = LoggerLevel::new("spawnlog_core=debug,info").unwrap();
    /// assert_eq!(lvl.as_str(), "spawnlog_core=debug,info");
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the filter.
    ///
    /// The expression was validated at construction; should parsing fail anyway the
    /// filter falls back to `info`.
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(self.as_str()).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&s) {
            Ok(_) => Ok(LoggerLevel(s)),
            Err(e) => Err(LoggerError::InvalidLevel(format!("{s}: {e}"))),
        }
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}

#[cfg(test)]
mod tests {
    use super::LoggerLevel;

    #[test]
    fn accepts_valid_levels() {
        for lvl in ["info", "warn", "trace", "spawnlog_core=debug,spawnlog_wire=trace,info"] {
            assert!(LoggerLevel::new(lvl).is_ok(), "expected valid: {lvl}");
        }
    }

    #[test]
    fn rejects_invalid_levels() {
        for lvl in ["spawnlog_core=loud", "a=trace,b=wat"] {
            assert!(LoggerLevel::new(lvl).is_err(), "expected error: {lvl}");
        }
    }

    #[test]
    fn default_is_info() {
        let lvl = LoggerLevel::default();
        assert_eq!(lvl.as_str(), "info");
        let _ = lvl.to_env_filter();
    }

    #[test]
    fn serde_roundtrip_as_plain_string() {
        let lvl: LoggerLevel = serde_json::from_str(r#""spawnlog_core=debug""#).unwrap();
        assert_eq!(
            serde_json::to_string(&lvl).unwrap(),
            r#""spawnlog_core=debug""#
        );
    }
}
