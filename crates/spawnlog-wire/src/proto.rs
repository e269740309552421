//! Message definitions.
//!
//! Written by hand with `prost` derives so the numbering sits next to the fields it
//! pins. Zero values are not written on the wire, which is why "unset" and "zero" read
//! back identically.
use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub struct Digest {
    #[prost(string, tag = "1")]
    pub hash: String,
    #[prost(int64, tag = "2")]
    pub size_bytes: i64,
    #[prost(string, tag = "3")]
    pub hash_function_name: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct File {
    #[prost(string, tag = "1")]
    pub path: String,
    #[prost(message, optional, tag = "2")]
    pub digest: Option<Digest>,
    #[prost(bool, tag = "3")]
    pub is_tool: bool,
}

#[derive(Clone, PartialEq, Message)]
pub struct EnvironmentVariable {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct Platform {
    #[prost(message, repeated, tag = "1")]
    pub properties: Vec<platform::Property>,
}

pub mod platform {
    use prost::Message;

    #[derive(Clone, PartialEq, Message)]
    pub struct Property {
        #[prost(string, tag = "1")]
        pub name: String,
        #[prost(string, tag = "2")]
        pub value: String,
    }
}

#[derive(Clone, PartialEq, Message)]
pub struct SpawnMetrics {
    #[prost(message, optional, tag = "1")]
    pub total_time: Option<prost_types::Duration>,
    #[prost(message, optional, tag = "2")]
    pub parse_time: Option<prost_types::Duration>,
    #[prost(message, optional, tag = "3")]
    pub network_time: Option<prost_types::Duration>,
    #[prost(message, optional, tag = "4")]
    pub fetch_time: Option<prost_types::Duration>,
    #[prost(message, optional, tag = "5")]
    pub queue_time: Option<prost_types::Duration>,
    #[prost(message, optional, tag = "6")]
    pub setup_time: Option<prost_types::Duration>,
    #[prost(message, optional, tag = "7")]
    pub upload_time: Option<prost_types::Duration>,
    #[prost(message, optional, tag = "8")]
    pub execution_wall_time: Option<prost_types::Duration>,
    #[prost(message, optional, tag = "9")]
    pub process_outputs_time: Option<prost_types::Duration>,
    #[prost(message, optional, tag = "10")]
    pub retry_time: Option<prost_types::Duration>,
    #[prost(int64, tag = "11")]
    pub input_bytes: i64,
    #[prost(int64, tag = "12")]
    pub input_files: i64,
    #[prost(int64, tag = "13")]
    pub memory_estimate_bytes: i64,
    #[prost(int64, tag = "14")]
    pub input_bytes_limit: i64,
    #[prost(int64, tag = "15")]
    pub input_files_limit: i64,
    #[prost(int64, tag = "16")]
    pub output_bytes_limit: i64,
    #[prost(int64, tag = "17")]
    pub output_files_limit: i64,
    #[prost(int64, tag = "18")]
    pub memory_bytes_limit: i64,
    #[prost(message, optional, tag = "19")]
    pub time_limit: Option<prost_types::Duration>,
    #[prost(message, optional, tag = "20")]
    pub start_time: Option<prost_types::Timestamp>,
}

#[derive(Clone, PartialEq, Message)]
pub struct SpawnExec {
    #[prost(string, repeated, tag = "1")]
    pub command_args: Vec<String>,
    #[prost(message, repeated, tag = "2")]
    pub environment_variables: Vec<EnvironmentVariable>,
    #[prost(message, optional, tag = "3")]
    pub platform: Option<Platform>,
    #[prost(message, repeated, tag = "4")]
    pub inputs: Vec<File>,
    #[prost(string, repeated, tag = "5")]
    pub listed_outputs: Vec<String>,
    #[prost(bool, tag = "6")]
    pub remotable: bool,
    #[prost(bool, tag = "7")]
    pub cacheable: bool,
    #[prost(int64, tag = "8")]
    pub timeout_millis: i64,
    #[prost(string, tag = "9")]
    pub progress_message: String,
    #[prost(string, tag = "10")]
    pub mnemonic: String,
    #[prost(message, repeated, tag = "11")]
    pub actual_outputs: Vec<File>,
    #[prost(string, tag = "12")]
    pub runner: String,
    #[prost(bool, tag = "13")]
    pub remote_cache_hit: bool,
    #[prost(string, tag = "14")]
    pub status: String,
    #[prost(int32, tag = "15")]
    pub exit_code: i32,
    #[prost(bool, tag = "16")]
    pub remote_cacheable: bool,
    #[prost(message, optional, tag = "17")]
    pub walltime: Option<prost_types::Duration>,
    #[prost(string, tag = "18")]
    pub target_label: String,
    #[prost(message, optional, tag = "19")]
    pub digest: Option<Digest>,
    #[prost(message, optional, tag = "20")]
    pub metrics: Option<SpawnMetrics>,
}

#[derive(Clone, PartialEq, Message)]
pub struct CacheSalt {
    #[prost(bool, tag = "1")]
    pub may_be_executed_remotely: bool,
    #[prost(string, tag = "2")]
    pub workspace: String,
    #[prost(message, optional, tag = "3")]
    pub scrub_salt: Option<cache_salt::ScrubSalt>,
}

pub mod cache_salt {
    use prost::Message;

    #[derive(Clone, PartialEq, Message)]
    pub struct ScrubSalt {
        #[prost(string, tag = "1")]
        pub salt: String,
    }
}
