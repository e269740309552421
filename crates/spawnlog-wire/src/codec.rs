use prost::Message;
use spawnlog_model::{CacheSalt, SpawnExec};

use crate::{error::WireResult, proto};

/// Serialize one record to its protobuf bytes.
///
/// Framing of several records into a file is left to the caller.
pub fn encode_spawn_exec(record: &SpawnExec) -> WireResult<Vec<u8>> {
    Ok(proto::SpawnExec::try_from(record)?.encode_to_vec())
}

/// Parse one record from its protobuf bytes.
///
/// Unknown fields are skipped. Fields that cannot be represented (negative sizes or
/// counts, out-of-range durations) are reported, not clamped.
pub fn decode_spawn_exec(buf: &[u8]) -> WireResult<SpawnExec> {
    let msg = proto::SpawnExec::decode(buf)?;
    SpawnExec::try_from(msg)
}

/// Deterministic, injective byte form of a salt.
///
/// The encoding is length-delimited, so the salt bytes can be followed directly by
/// action bytes without two different `(salt, action)` pairs producing the same input.
pub fn cache_salt_bytes(salt: &CacheSalt) -> Vec<u8> {
    proto::CacheSalt::from(salt).encode_length_delimited_to_vec()
}
