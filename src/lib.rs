//! logsink is a small process-wide logging facility.
//!
//! A single global [`Logger`] receives severity-tagged messages from any
//! thread, drops those below the configured minimum priority and appends the
//! rest, one line each, to a log file:
//!
//! ```text
//! Tue Mar  5 09:07:03 [INFO] "starting up " on line 42 in src/main.rs
//! ```
//!
//! Logging never fails towards the caller. Until [`enable_file_output`] has
//! been called, or when the file cannot be opened, every call is a silent no-op.
//!
//! ```rust,no_run
//! use logsink::{Priority, log_debug, log_info};
//!
//! logsink::set_minimum_priority(Priority::Debug);
//! logsink::enable_file_output();
//!
//! log_info!("starting up");
//! log_debug!("worker pool size", 8);
//! ```

/// Logging primitives: priorities, records, sinks and the global logger.
pub mod log;

pub use log::{
    log_priority::Priority, log_record::LogRecord, log_sink::LogSink, logger::Logger,
    noop_log_sink::NoopLogSink, sink_config::SinkConfig, sink_error::SinkError,
    source_location::SourceLocation,
};

/// The process-wide logger.
pub fn global() -> &'static Logger {
    Logger::global()
}

/// Sets the threshold of the process-wide logger.
pub fn set_minimum_priority(priority: Priority) {
    Logger::global().set_minimum_priority(priority);
}

/// Opens (truncating) the process-wide logger's file; failures are swallowed.
pub fn enable_file_output() {
    Logger::global().enable_file_output();
}

/// Closes the process-wide logger's file.
pub fn disable_file_output() {
    Logger::global().disable_file_output();
}
