mod domain;
pub use domain::constants;
pub use domain::{
    Digest, Environment, EnvironmentVariable, File, Platform, PlatformProperty, TimeoutMs,
};

mod error;
pub use error::{ModelError, ModelResult};

mod exec;
pub use exec::{Advisory, SpawnExec, SpawnExecBuilder, Violation};

mod metrics;
pub use metrics::{SpawnMetrics, utilization};

mod salt;
pub use salt::{CacheSalt, ScrubSalt};
