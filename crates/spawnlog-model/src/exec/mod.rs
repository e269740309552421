use std::{collections::BTreeSet, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{Digest, Environment, File, Platform, SpawnMetrics, TimeoutMs};

mod builder;
pub use builder::SpawnExecBuilder;

mod contract;
pub use contract::{Advisory, Violation};

/// Record of one executed spawn.
///
/// Only spawns that actually ran, or were served from a remote cache, are recorded.
/// A record is write-once: producers build it via [`SpawnExecBuilder`] and never mutate it
/// after it has been appended to a log.
///
/// The wire format is structurally permissive; the rules of a well-formed record are
/// checked by [`SpawnExec::violations`]:
/// - `listed_outputs` is sorted;
/// - every actual output path is listed;
/// - `is_tool` is never set on an actual output;
/// - `runner` is empty iff `remote_cache_hit`;
/// - an empty `status` implies `exit_code == 0`;
/// - environment variable names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct SpawnExec {
    /// Literal argv of the executed command. Order is significant.
    pub command_args: Vec<String>,
    pub environment_variables: Environment,
    pub platform: Platform,
    /// Full input set as of execution time.
    pub inputs: Vec<File>,
    /// Every declared output path, sorted. Superset of `actual_outputs`.
    pub listed_outputs: Vec<String>,

    /// Permission to execute remotely.
    pub remotable: bool,
    /// Permission to cache at all.
    pub cacheable: bool,
    /// Permission to cache remotely.
    pub remote_cacheable: bool,

    pub timeout_millis: TimeoutMs,
    pub progress_message: String,
    pub mnemonic: String,
    pub target_label: String,

    /// Outputs that were actually produced.
    pub actual_outputs: Vec<File>,
    /// Execution path that ran the spawn; empty for a remote cache hit.
    pub runner: String,
    pub remote_cache_hit: bool,
    /// Execution-layer error, empty on success. Open set of values.
    pub status: String,
    pub exit_code: i32,

    /// Subprocess execution time only, excluding setup and teardown.
    pub walltime: Duration,
    /// Stable identifier of the spawn, computed by the producer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<Digest>,
    pub metrics: SpawnMetrics,
}

impl SpawnExec {
    /// Start assembling a record for the given command line.
    pub fn builder<I, S>(command_args: I) -> SpawnExecBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SpawnExecBuilder::new(command_args)
    }

    /// Returns `true` if the spawn completed without an execution error and exited with zero.
    pub fn succeeded(&self) -> bool {
        self.status.is_empty() && self.exit_code == 0
    }

    /// Listed output paths as a set.
    pub fn listed_output_set(&self) -> BTreeSet<&str> {
        self.listed_outputs.iter().map(String::as_str).collect()
    }

    /// Inputs sorted by path, then digest and tool flag. Duplicates are kept.
    pub fn sorted_inputs(&self) -> Vec<&File> {
        let mut inputs: Vec<&File> = self.inputs.iter().collect();
        inputs.sort();
        inputs
    }

    /// Actual outputs sorted by path, then digest. Duplicates are kept.
    pub fn sorted_actual_outputs(&self) -> Vec<&File> {
        let mut outputs: Vec<&File> = self.actual_outputs.iter().collect();
        outputs.sort();
        outputs
    }
}
