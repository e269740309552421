mod format;
pub use format::LoggerFormat;

mod level;
pub use level::LoggerLevel;

mod clock;
pub use clock::{LoggerTimeZone, Rfc3339Timer, init_local_offset};
