use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ModelError, ModelResult, SpawnExec};

/// A broken rule of a well-formed [`SpawnExec`].
///
/// Violations are reported, never repaired: a repaired record would hide the producer
/// bug the log exists to surface.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Violation {
    #[error("listed output {path:?} sorts before the preceding {previous:?}")]
    UnsortedListedOutputs { previous: String, path: String },

    #[error("actual output {path:?} is not a listed output")]
    UnlistedActualOutput { path: String },

    #[error("actual output {path:?} is marked as a tool")]
    ToolOnOutput { path: String },

    #[error("runner {runner:?} is set on a remote cache hit")]
    RunnerOnRemoteCacheHit { runner: String },

    #[error("runner is empty but the spawn was not a remote cache hit")]
    MissingRunner,

    #[error("exit code {exit_code} reported with an empty status")]
    ExitCodeWithoutStatus { exit_code: i32 },

    #[error("environment variable {name:?} appears more than once")]
    DuplicateEnvironmentVariable { name: String },
}

/// Observation about a record that is worth reporting but does not make it malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Advisory {
    /// Platform property names are expected to be unique.
    DuplicatePlatformProperty { name: String },
    /// Phase durations add up to more than the total time.
    PhasesExceedTotal,
}

impl SpawnExec {
    /// Every contract rule this record breaks, in field order.
    pub fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();

        for pair in self.listed_outputs.windows(2) {
            if pair[0] > pair[1] {
                out.push(Violation::UnsortedListedOutputs {
                    previous: pair[0].clone(),
                    path: pair[1].clone(),
                });
            }
        }

        let listed = self.listed_output_set();
        for file in &self.actual_outputs {
            if !listed.contains(file.path.as_str()) {
                out.push(Violation::UnlistedActualOutput {
                    path: file.path.clone(),
                });
            }
            if file.is_tool {
                out.push(Violation::ToolOnOutput {
                    path: file.path.clone(),
                });
            }
        }

        match (self.remote_cache_hit, self.runner.is_empty()) {
            (true, false) => out.push(Violation::RunnerOnRemoteCacheHit {
                runner: self.runner.clone(),
            }),
            (false, true) => out.push(Violation::MissingRunner),
            _ => {}
        }

        if self.status.is_empty() && self.exit_code != 0 {
            out.push(Violation::ExitCodeWithoutStatus {
                exit_code: self.exit_code,
            });
        }

        for name in self.environment_variables.duplicate_names() {
            out.push(Violation::DuplicateEnvironmentVariable {
                name: name.to_string(),
            });
        }

        out
    }

    /// Returns `Ok(())` for a well-formed record, or every violation at once.
    pub fn validate(&self) -> ModelResult<()> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ModelError::Contract(violations))
        }
    }

    /// Returns `true` if the record breaks no contract rule.
    pub fn is_well_formed(&self) -> bool {
        self.violations().is_empty()
    }

    /// Non-fatal observations about the record.
    pub fn advisories(&self) -> Vec<Advisory> {
        let mut out: Vec<Advisory> = self
            .platform
            .duplicate_names()
            .into_iter()
            .map(|name| Advisory::DuplicatePlatformProperty {
                name: name.to_string(),
            })
            .collect();

        if self.metrics.phases_exceed_total() {
            out.push(Advisory::PhasesExceedTotal);
        }
        out
    }
}
