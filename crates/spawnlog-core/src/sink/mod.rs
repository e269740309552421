//! Append-only destinations for spawn records.
//!
//! Producers push one record per spawn through a [`SpawnSink`]. Framing and storage
//! (files, compression, upload) belong to the sink implementation.
mod backend;
pub use backend::{SinkHandle, SpawnSink};

mod memory;
pub use memory::MemorySink;

mod noop;
pub use noop::NoOpSink;

use std::sync::Arc;

/// Create a sink handle that discards every record.
#[inline]
pub fn noop_sink() -> SinkHandle {
    Arc::new(NoOpSink)
}
