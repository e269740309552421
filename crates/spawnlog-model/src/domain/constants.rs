//! Well-known values for the open string fields of the model.
//!
//! None of these lists is exhaustive. Fields such as `hash_function_name`, `status` and
//! `runner` accept any string; these constants only keep common values in one place.

/// Names used in [`crate::Digest::hash_function_name`].
pub mod hash_function {
    pub const SHA256: &str = "SHA-256";
    pub const SHA1: &str = "SHA-1";
    pub const MD5: &str = "MD5";
    pub const BLAKE3: &str = "BLAKE3";
}

/// Common values of [`crate::SpawnExec::runner`].
pub mod runner {
    pub const REMOTE: &str = "remote";
    pub const LOCAL: &str = "local";
    pub const LINUX_SANDBOX: &str = "linux-sandbox";
    pub const DARWIN_SANDBOX: &str = "darwin-sandbox";
    pub const PROCESSWRAPPER_SANDBOX: &str = "processwrapper-sandbox";
    pub const WORKER: &str = "worker";
    pub const DISK_CACHE_HIT: &str = "disk cache hit";
}

/// Common values of [`crate::SpawnExec::status`].
///
/// An empty status means the spawn executed without an execution-layer error.
pub mod status {
    pub const NON_ZERO_EXIT: &str = "NON_ZERO_EXIT";
    pub const TIMEOUT: &str = "TIMEOUT";
    pub const OUT_OF_MEMORY: &str = "OUT_OF_MEMORY";
    pub const EXECUTION_FAILED: &str = "EXECUTION_FAILED";
    pub const EXECUTION_DENIED: &str = "EXECUTION_DENIED";
    pub const REMOTE_CACHE_FAILED: &str = "REMOTE_CACHE_FAILED";
}
