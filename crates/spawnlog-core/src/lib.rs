pub mod capability;
pub mod check;
pub mod compare;
pub mod error;
pub mod recorder;
pub mod sink;

pub mod prelude {
    pub use crate::capability::{ActionKeyFunction, DigestFunction, SaltedActionKey};
    pub use crate::check::{LogReport, check_log};
    pub use crate::compare::{CompareConfig, LogDiff, compare_logs};
    pub use crate::error::CoreError;
    pub use crate::recorder::{ExecutionSource, SpawnRecorder};
    pub use crate::sink::{MemorySink, SinkHandle, SpawnSink};
}
