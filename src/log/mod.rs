pub mod log_macros;
pub mod log_priority;
pub mod log_record;
pub mod log_sink;
pub mod logger;
pub mod noop_log_sink;
pub mod sink_config;
pub mod sink_error;
pub mod source_location;
#[cfg(feature = "tracing")]
pub mod tracing_bridge;
pub use logger::Logger;
pub use noop_log_sink::NoopLogSink;
