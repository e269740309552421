use spawnlog_model::SpawnExec;

use crate::{error::CoreResult, sink::backend::SpawnSink};

/// Sink that drops every record, used when execution logging is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl SpawnSink for NoOpSink {
    #[inline(always)]
    fn append(&self, _: SpawnExec) -> CoreResult<()> {
        Ok(())
    }
}
