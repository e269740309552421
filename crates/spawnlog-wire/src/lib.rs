//! Protobuf wire schema of the spawn execution log.
//!
//! Field numbers are part of the format and are never reused or renumbered: readers
//! built against an older schema skip fields they do not know, and newer readers see
//! absent fields as zero.
pub mod proto;

mod convert;

mod codec;
pub use codec::{cache_salt_bytes, decode_spawn_exec, encode_spawn_exec};

mod error;
pub use error::{WireError, WireResult};
