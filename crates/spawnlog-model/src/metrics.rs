//! Timing and resource accounting for one spawn.
//!
//! Every field defaults to zero when the producer has no measurement. Zero is not
//! distinguishable from "measured as zero": consumers must not read a zero phase as
//! "phase did not happen", and a zero limit means "no limit or unknown".
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct SpawnMetrics {
    /// Whole lifecycle of the spawn, including phases not broken out below.
    pub total_time: Duration,
    pub parse_time: Duration,
    pub network_time: Duration,
    pub fetch_time: Duration,
    pub queue_time: Duration,
    pub setup_time: Duration,
    pub upload_time: Duration,
    pub execution_wall_time: Duration,
    pub process_outputs_time: Duration,
    pub retry_time: Duration,

    pub input_bytes: u64,
    pub input_files: u64,
    pub memory_estimate_bytes: u64,

    pub input_bytes_limit: u64,
    pub input_files_limit: u64,
    pub output_bytes_limit: u64,
    pub output_files_limit: u64,
    pub memory_bytes_limit: u64,
    pub time_limit: Duration,

    /// When the spawn started, if the producer recorded it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<SystemTime>,
}

impl SpawnMetrics {
    /// Individual phase durations, labelled.
    pub fn phases(&self) -> [(&'static str, Duration); 9] {
        [
            ("parse", self.parse_time),
            ("network", self.network_time),
            ("fetch", self.fetch_time),
            ("queue", self.queue_time),
            ("setup", self.setup_time),
            ("upload", self.upload_time),
            ("execution", self.execution_wall_time),
            ("process_outputs", self.process_outputs_time),
            ("retry", self.retry_time),
        ]
    }

    /// Sum of all phase durations.
    ///
    /// Saturates instead of overflowing.
    pub fn phase_sum(&self) -> Duration {
        self.phases()
            .iter()
            .fold(Duration::ZERO, |acc, (_, d)| acc.saturating_add(*d))
    }

    /// Returns `true` if the phases add up to more than `total_time`.
    ///
    /// Advisory only. Phases may overlap and some producers do not fill
    /// `total_time`, so this never makes a record malformed.
    pub fn phases_exceed_total(&self) -> bool {
        !self.total_time.is_zero() && self.phase_sum() > self.total_time
    }

    pub fn input_bytes_utilization(&self) -> Option<f64> {
        utilization(self.input_bytes, self.input_bytes_limit)
    }

    pub fn input_files_utilization(&self) -> Option<f64> {
        utilization(self.input_files, self.input_files_limit)
    }

    pub fn memory_utilization(&self) -> Option<f64> {
        utilization(self.memory_estimate_bytes, self.memory_bytes_limit)
    }

    /// Execution wall time relative to `time_limit`.
    pub fn time_utilization(&self) -> Option<f64> {
        if self.time_limit.is_zero() {
            return None;
        }
        Some(self.execution_wall_time.as_secs_f64() / self.time_limit.as_secs_f64())
    }
}

/// Ratio of `used` to `limit`, or `None` when the limit is zero ("no limit or unknown").
pub fn utilization(used: u64, limit: u64) -> Option<f64> {
    if limit == 0 {
        return None;
    }
    Some(used as f64 / limit as f64)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{SpawnMetrics, utilization};

    #[test]
    fn default_is_all_zero() {
        let m = SpawnMetrics::default();
        assert_eq!(m.total_time, Duration::ZERO);
        assert_eq!(m.phase_sum(), Duration::ZERO);
        assert_eq!(m.input_bytes_limit, 0);
        assert!(m.start_time.is_none());
    }

    #[test]
    fn zero_limit_is_undefined_utilization() {
        assert_eq!(utilization(10, 0), None);
        assert_eq!(utilization(0, 0), None);
        assert_eq!(utilization(5, 10), Some(0.5));

        let m = SpawnMetrics {
            input_bytes: 100,
            ..Default::default()
        };
        assert_eq!(m.input_bytes_utilization(), None);
        assert_eq!(m.time_utilization(), None);
    }

    #[test]
    fn utilization_helpers_use_matching_limit() {
        let m = SpawnMetrics {
            input_files: 3,
            input_files_limit: 4,
            memory_estimate_bytes: 512,
            memory_bytes_limit: 1024,
            execution_wall_time: Duration::from_secs(30),
            time_limit: Duration::from_secs(60),
            ..Default::default()
        };
        assert_eq!(m.input_files_utilization(), Some(0.75));
        assert_eq!(m.memory_utilization(), Some(0.5));
        assert_eq!(m.time_utilization(), Some(0.5));
    }

    #[test]
    fn phase_sum_is_lower_bound_check() {
        let mut m = SpawnMetrics {
            total_time: Duration::from_millis(100),
            setup_time: Duration::from_millis(20),
            execution_wall_time: Duration::from_millis(70),
            ..Default::default()
        };
        assert_eq!(m.phase_sum(), Duration::from_millis(90));
        assert!(!m.phases_exceed_total());

        m.upload_time = Duration::from_millis(50);
        assert!(m.phases_exceed_total());
    }

    #[test]
    fn unknown_total_never_exceeded() {
        let m = SpawnMetrics {
            fetch_time: Duration::from_secs(1),
            ..Default::default()
        };
        assert!(!m.phases_exceed_total());
    }

    #[test]
    fn serde_fills_missing_fields_with_zero() {
        let m: SpawnMetrics = serde_json::from_str(r#"{"inputBytes": 42}"#).unwrap();
        assert_eq!(m.input_bytes, 42);
        assert_eq!(m.total_time, Duration::ZERO);
    }
}
