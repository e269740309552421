use std::time::{Duration, SystemTime};

use spawnlog_model::{
    CacheSalt, Digest, Environment, EnvironmentVariable, File, Platform, PlatformProperty,
    ScrubSalt, SpawnExec, SpawnMetrics,
};

use crate::error::{WireError, WireResult};
use crate::proto;

// ============================================================================
// Scalar helpers
// ============================================================================

fn non_negative(field: &'static str, value: i64) -> WireResult<u64> {
    u64::try_from(value).map_err(|_| WireError::invalid(field, format!("negative value {value}")))
}

fn to_wire_int(field: &'static str, value: u64) -> WireResult<i64> {
    i64::try_from(value).map_err(|_| WireError::invalid(field, format!("{value} exceeds int64")))
}

fn duration_from_wire(
    field: &'static str,
    value: Option<prost_types::Duration>,
) -> WireResult<Duration> {
    match value {
        None => Ok(Duration::ZERO),
        Some(d) => Duration::try_from(d).map_err(|e| WireError::invalid(field, e.to_string())),
    }
}

fn duration_to_wire(
    field: &'static str,
    value: Duration,
) -> WireResult<Option<prost_types::Duration>> {
    if value.is_zero() {
        return Ok(None);
    }
    prost_types::Duration::try_from(value)
        .map(Some)
        .map_err(|e| WireError::invalid(field, e.to_string()))
}

fn timestamp_from_wire(
    field: &'static str,
    value: Option<prost_types::Timestamp>,
) -> WireResult<Option<SystemTime>> {
    value
        .map(|ts| SystemTime::try_from(ts).map_err(|e| WireError::invalid(field, e.to_string())))
        .transpose()
}

// ============================================================================
// Digest / File
// ============================================================================

impl TryFrom<&Digest> for proto::Digest {
    type Error = WireError;

    fn try_from(d: &Digest) -> Result<Self, Self::Error> {
        Ok(proto::Digest {
            hash: d.hash.clone(),
            size_bytes: to_wire_int("Digest.size_bytes", d.size_bytes)?,
            hash_function_name: d.hash_function_name.clone(),
        })
    }
}

impl TryFrom<proto::Digest> for Digest {
    type Error = WireError;

    fn try_from(d: proto::Digest) -> Result<Self, Self::Error> {
        Ok(Digest {
            hash: d.hash,
            size_bytes: non_negative("Digest.size_bytes", d.size_bytes)?,
            hash_function_name: d.hash_function_name,
        })
    }
}

impl TryFrom<&File> for proto::File {
    type Error = WireError;

    fn try_from(f: &File) -> Result<Self, Self::Error> {
        let digest = if f.digest.is_empty() {
            None
        } else {
            Some(proto::Digest::try_from(&f.digest)?)
        };
        Ok(proto::File {
            path: f.path.clone(),
            digest,
            is_tool: f.is_tool,
        })
    }
}

impl TryFrom<proto::File> for File {
    type Error = WireError;

    fn try_from(f: proto::File) -> Result<Self, Self::Error> {
        Ok(File {
            path: f.path,
            digest: f.digest.map(Digest::try_from).transpose()?.unwrap_or_default(),
            is_tool: f.is_tool,
        })
    }
}

fn files_to_wire(files: &[File]) -> WireResult<Vec<proto::File>> {
    files.iter().map(proto::File::try_from).collect()
}

fn files_from_wire(files: Vec<proto::File>) -> WireResult<Vec<File>> {
    files.into_iter().map(File::try_from).collect()
}

// ============================================================================
// Environment / Platform
// ============================================================================

impl From<&EnvironmentVariable> for proto::EnvironmentVariable {
    fn from(var: &EnvironmentVariable) -> Self {
        proto::EnvironmentVariable {
            name: var.name().to_string(),
            value: var.value().to_string(),
        }
    }
}

impl From<proto::EnvironmentVariable> for EnvironmentVariable {
    fn from(var: proto::EnvironmentVariable) -> Self {
        EnvironmentVariable::new(var.name, var.value)
    }
}

impl From<&Platform> for proto::Platform {
    fn from(p: &Platform) -> Self {
        proto::Platform {
            properties: p
                .properties
                .iter()
                .map(|prop| proto::platform::Property {
                    name: prop.name.clone(),
                    value: prop.value.clone(),
                })
                .collect(),
        }
    }
}

impl From<proto::Platform> for Platform {
    fn from(p: proto::Platform) -> Self {
        Platform {
            properties: p
                .properties
                .into_iter()
                .map(|prop| PlatformProperty::new(prop.name, prop.value))
                .collect(),
        }
    }
}

// ============================================================================
// SpawnMetrics
// ============================================================================

impl TryFrom<&SpawnMetrics> for proto::SpawnMetrics {
    type Error = WireError;

    fn try_from(m: &SpawnMetrics) -> Result<Self, Self::Error> {
        Ok(proto::SpawnMetrics {
            total_time: duration_to_wire("SpawnMetrics.total_time", m.total_time)?,
            parse_time: duration_to_wire("SpawnMetrics.parse_time", m.parse_time)?,
            network_time: duration_to_wire("SpawnMetrics.network_time", m.network_time)?,
            fetch_time: duration_to_wire("SpawnMetrics.fetch_time", m.fetch_time)?,
            queue_time: duration_to_wire("SpawnMetrics.queue_time", m.queue_time)?,
            setup_time: duration_to_wire("SpawnMetrics.setup_time", m.setup_time)?,
            upload_time: duration_to_wire("SpawnMetrics.upload_time", m.upload_time)?,
            execution_wall_time: duration_to_wire(
                "SpawnMetrics.execution_wall_time",
                m.execution_wall_time,
            )?,
            process_outputs_time: duration_to_wire(
                "SpawnMetrics.process_outputs_time",
                m.process_outputs_time,
            )?,
            retry_time: duration_to_wire("SpawnMetrics.retry_time", m.retry_time)?,
            input_bytes: to_wire_int("SpawnMetrics.input_bytes", m.input_bytes)?,
            input_files: to_wire_int("SpawnMetrics.input_files", m.input_files)?,
            memory_estimate_bytes: to_wire_int(
                "SpawnMetrics.memory_estimate_bytes",
                m.memory_estimate_bytes,
            )?,
            input_bytes_limit: to_wire_int("SpawnMetrics.input_bytes_limit", m.input_bytes_limit)?,
            input_files_limit: to_wire_int("SpawnMetrics.input_files_limit", m.input_files_limit)?,
            output_bytes_limit: to_wire_int(
                "SpawnMetrics.output_bytes_limit",
                m.output_bytes_limit,
            )?,
            output_files_limit: to_wire_int(
                "SpawnMetrics.output_files_limit",
                m.output_files_limit,
            )?,
            memory_bytes_limit: to_wire_int(
                "SpawnMetrics.memory_bytes_limit",
                m.memory_bytes_limit,
            )?,
            time_limit: duration_to_wire("SpawnMetrics.time_limit", m.time_limit)?,
            start_time: m.start_time.map(prost_types::Timestamp::from),
        })
    }
}

impl TryFrom<proto::SpawnMetrics> for SpawnMetrics {
    type Error = WireError;

    fn try_from(m: proto::SpawnMetrics) -> Result<Self, Self::Error> {
        Ok(SpawnMetrics {
            total_time: duration_from_wire("SpawnMetrics.total_time", m.total_time)?,
            parse_time: duration_from_wire("SpawnMetrics.parse_time", m.parse_time)?,
            network_time: duration_from_wire("SpawnMetrics.network_time", m.network_time)?,
            fetch_time: duration_from_wire("SpawnMetrics.fetch_time", m.fetch_time)?,
            queue_time: duration_from_wire("SpawnMetrics.queue_time", m.queue_time)?,
            setup_time: duration_from_wire("SpawnMetrics.setup_time", m.setup_time)?,
            upload_time: duration_from_wire("SpawnMetrics.upload_time", m.upload_time)?,
            execution_wall_time: duration_from_wire(
                "SpawnMetrics.execution_wall_time",
                m.execution_wall_time,
            )?,
            process_outputs_time: duration_from_wire(
                "SpawnMetrics.process_outputs_time",
                m.process_outputs_time,
            )?,
            retry_time: duration_from_wire("SpawnMetrics.retry_time", m.retry_time)?,
            input_bytes: non_negative("SpawnMetrics.input_bytes", m.input_bytes)?,
            input_files: non_negative("SpawnMetrics.input_files", m.input_files)?,
            memory_estimate_bytes: non_negative(
                "SpawnMetrics.memory_estimate_bytes",
                m.memory_estimate_bytes,
            )?,
            input_bytes_limit: non_negative("SpawnMetrics.input_bytes_limit", m.input_bytes_limit)?,
            input_files_limit: non_negative("SpawnMetrics.input_files_limit", m.input_files_limit)?,
            output_bytes_limit: non_negative(
                "SpawnMetrics.output_bytes_limit",
                m.output_bytes_limit,
            )?,
            output_files_limit: non_negative(
                "SpawnMetrics.output_files_limit",
                m.output_files_limit,
            )?,
            memory_bytes_limit: non_negative(
                "SpawnMetrics.memory_bytes_limit",
                m.memory_bytes_limit,
            )?,
            time_limit: duration_from_wire("SpawnMetrics.time_limit", m.time_limit)?,
            start_time: timestamp_from_wire("SpawnMetrics.start_time", m.start_time)?,
        })
    }
}

// ============================================================================
// SpawnExec
// ============================================================================

impl TryFrom<&SpawnExec> for proto::SpawnExec {
    type Error = WireError;

    fn try_from(rec: &SpawnExec) -> Result<Self, Self::Error> {
        let platform = (!rec.platform.is_empty()).then(|| proto::Platform::from(&rec.platform));
        let metrics = if rec.metrics == SpawnMetrics::default() {
            None
        } else {
            Some(proto::SpawnMetrics::try_from(&rec.metrics)?)
        };

        Ok(proto::SpawnExec {
            command_args: rec.command_args.clone(),
            environment_variables: rec
                .environment_variables
                .iter()
                .map(proto::EnvironmentVariable::from)
                .collect(),
            platform,
            inputs: files_to_wire(&rec.inputs)?,
            listed_outputs: rec.listed_outputs.clone(),
            remotable: rec.remotable,
            cacheable: rec.cacheable,
            timeout_millis: to_wire_int("SpawnExec.timeout_millis", rec.timeout_millis)?,
            progress_message: rec.progress_message.clone(),
            mnemonic: rec.mnemonic.clone(),
            actual_outputs: files_to_wire(&rec.actual_outputs)?,
            runner: rec.runner.clone(),
            remote_cache_hit: rec.remote_cache_hit,
            status: rec.status.clone(),
            exit_code: rec.exit_code,
            remote_cacheable: rec.remote_cacheable,
            walltime: duration_to_wire("SpawnExec.walltime", rec.walltime)?,
            target_label: rec.target_label.clone(),
            digest: rec.digest.as_ref().map(proto::Digest::try_from).transpose()?,
            metrics,
        })
    }
}

impl TryFrom<proto::SpawnExec> for SpawnExec {
    type Error = WireError;

    fn try_from(rec: proto::SpawnExec) -> Result<Self, Self::Error> {
        Ok(SpawnExec {
            command_args: rec.command_args,
            environment_variables: rec
                .environment_variables
                .into_iter()
                .map(EnvironmentVariable::from)
                .collect::<Environment>(),
            platform: rec.platform.map(Platform::from).unwrap_or_default(),
            inputs: files_from_wire(rec.inputs)?,
            listed_outputs: rec.listed_outputs,
            remotable: rec.remotable,
            cacheable: rec.cacheable,
            remote_cacheable: rec.remote_cacheable,
            timeout_millis: non_negative("SpawnExec.timeout_millis", rec.timeout_millis)?,
            progress_message: rec.progress_message,
            mnemonic: rec.mnemonic,
            target_label: rec.target_label,
            actual_outputs: files_from_wire(rec.actual_outputs)?,
            runner: rec.runner,
            remote_cache_hit: rec.remote_cache_hit,
            status: rec.status,
            exit_code: rec.exit_code,
            walltime: duration_from_wire("SpawnExec.walltime", rec.walltime)?,
            digest: rec.digest.map(Digest::try_from).transpose()?,
            metrics: rec
                .metrics
                .map(SpawnMetrics::try_from)
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

// ============================================================================
// CacheSalt
// ============================================================================

impl From<&CacheSalt> for proto::CacheSalt {
    fn from(salt: &CacheSalt) -> Self {
        proto::CacheSalt {
            may_be_executed_remotely: salt.may_be_executed_remotely,
            workspace: salt.workspace.clone(),
            scrub_salt: salt
                .scrub_salt
                .as_ref()
                .map(|s| proto::cache_salt::ScrubSalt {
                    salt: s.salt.clone(),
                }),
        }
    }
}

impl From<proto::CacheSalt> for CacheSalt {
    fn from(salt: proto::CacheSalt) -> Self {
        CacheSalt {
            may_be_executed_remotely: salt.may_be_executed_remotely,
            workspace: salt.workspace,
            scrub_salt: salt.scrub_salt.map(|s| ScrubSalt { salt: s.salt }),
        }
    }
}
