mod digest;
pub use digest::Digest;

mod file;
pub use file::File;

mod variable;
pub use variable::EnvironmentVariable;

mod env;
pub use env::Environment;

mod platform;
pub use platform::{Platform, PlatformProperty};

pub mod constants;

/// Timeout value in milliseconds.
///
/// Zero means no timeout was configured.
pub type TimeoutMs = u64;
