//! Producer-side entry point: turns an observed spawn into at most one log record.
use std::fmt;

use spawnlog_model::SpawnExecBuilder;
use tracing::{debug, instrument, warn};

use crate::{
    error::{CoreError, CoreResult},
    sink::{SinkHandle, noop_sink},
};

/// Where the result of a spawn came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionSource {
    /// A runner executed the subprocess.
    Executed,
    /// The result was fetched from a remote cache without executing.
    RemoteCacheHit,
    /// The result was reused from a local cache. Never recorded.
    LocalCacheHit,
}

impl ExecutionSource {
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            ExecutionSource::Executed => "executed",
            ExecutionSource::RemoteCacheHit => "remote_cache_hit",
            ExecutionSource::LocalCacheHit => "local_cache_hit",
        }
    }

    /// Returns `true` if spawns of this source belong in the execution log.
    #[inline]
    pub fn is_recorded(&self) -> bool {
        !matches!(self, ExecutionSource::LocalCacheHit)
    }
}

impl fmt::Display for ExecutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Builds records for finished spawns and appends them to a sink.
#[derive(Clone)]
pub struct SpawnRecorder {
    sink: SinkHandle,
}

impl Default for SpawnRecorder {
    fn default() -> Self {
        Self { sink: noop_sink() }
    }
}

impl SpawnRecorder {
    pub fn new(sink: SinkHandle) -> Self {
        Self { sink }
    }

    /// Record one finished spawn.
    ///
    /// Returns `Ok(false)` for local cache hits, which are skipped. The source decides
    /// `remote_cache_hit`; every other field comes from the builder. A record that
    /// breaks a contract rule is rejected with [`CoreError::Model`] and nothing is appended.
    #[instrument(level = "debug", skip_all, fields(source = %source))]
    pub fn record(&self, source: ExecutionSource, builder: SpawnExecBuilder) -> CoreResult<bool> {
        if !source.is_recorded() {
            debug!("local cache hit, not recorded");
            return Ok(false);
        }

        let builder = builder.remote_cache_hit(source == ExecutionSource::RemoteCacheHit);
        let record = builder.build().map_err(|e| {
            warn!(error = %e, "refusing to record malformed spawn");
            CoreError::from(e)
        })?;

        debug!(
            mnemonic = %record.mnemonic,
            runner = %record.runner,
            outputs = record.actual_outputs.len(),
            "spawn recorded"
        );
        self.sink.append(record)?;
        Ok(true)
    }
}
