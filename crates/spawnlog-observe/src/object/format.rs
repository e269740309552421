use serde::{Deserialize, Serialize};

/// Where diagnostics go and how they look.
///
/// `Journald` is accepted everywhere; initialization fails on platforms without journald.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerFormat {
    /// Human-friendly text, colored when writing to a terminal.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
    Journald,
}
