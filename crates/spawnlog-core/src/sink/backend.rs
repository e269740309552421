use std::sync::Arc;

use spawnlog_model::SpawnExec;

use crate::error::CoreResult;

/// Destination of spawn records.
///
/// Spawns of the same build finish concurrently, so `append` may be called from many
/// threads at once. Append order is observation order; records are never mutated once
/// appended.
pub trait SpawnSink: Send + Sync + 'static {
    /// Append one finished record.
    fn append(&self, record: SpawnExec) -> CoreResult<()>;
}

/// Shared handle to a sink.
pub type SinkHandle = Arc<dyn SpawnSink>;
