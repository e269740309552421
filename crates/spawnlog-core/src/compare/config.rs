use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Options for comparing two logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompareConfig {
    /// Also report differences in `walltime` and `metrics`.
    ///
    /// Off by default: timings differ between any two builds.
    pub include_metrics: bool,
    /// Environment variable names left out of the identity comparison.
    pub ignored_environment: BTreeSet<String>,
}

impl CompareConfig {
    pub fn with_metrics(mut self) -> Self {
        self.include_metrics = true;
        self
    }

    pub fn ignore_env(mut self, name: impl Into<String>) -> Self {
        self.ignored_environment.insert(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::CompareConfig;

    #[test]
    fn defaults() {
        let cfg = CompareConfig::default();
        assert!(!cfg.include_metrics);
        assert!(cfg.ignored_environment.is_empty());
    }

    #[test]
    fn serde_uses_defaults_for_missing_fields() {
        let cfg: CompareConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, CompareConfig::default());
    }

    #[test]
    fn partial_deserialization() {
        let cfg: CompareConfig =
            serde_json::from_str(r#"{"ignoredEnvironment": ["TMPDIR", "HOME"]}"#).unwrap();
        assert!(!cfg.include_metrics);
        assert!(cfg.ignored_environment.contains("TMPDIR"));
        assert_eq!(cfg, CompareConfig::default().ignore_env("HOME").ignore_env("TMPDIR"));
    }
}
