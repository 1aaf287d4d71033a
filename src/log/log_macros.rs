//! Leveled logging macros for the global [`Logger`](crate::log::logger::Logger)
//! and for any explicit [`LogSink`](crate::log::log_sink::LogSink).
//!
//! Every macro takes a message followed by zero or more extra values that
//! implement `Display`; the call site's `line!()` and `file!()` are captured
//! automatically. Extra values are only formatted when the record passes the
//! sink's threshold.
//!
//! ```rust
//! use logsink::{log_info, log_warn};
//!
//! let port = 8080;
//! log_info!("listening on", port);
//! log_warn!("configuration file missing, using defaults");
//! ```
//!
//! # Feature Flags
//! specific log levels are controlled by cargo features:
//! `log-trace`, `log-debug`, `log-info`, `log-warn`, `log-error`.
//!
//! If a feature is disabled, the corresponding macros expand to `()`, removing
//! all formatting overhead at compile time. `log_fatal!` is never compiled out.

// ============================================================================
// 1. GENERIC INTERNAL MACROS (The "Workers")
// ============================================================================

/// Sends one record to an explicit sink.
#[macro_export]
macro_rules! sink_log {
    ($sink:expr, $lvl:expr, $msg:expr $(, $arg:expr)* $(,)?) => {{
        let __lvl: $crate::log::log_priority::Priority = $lvl;
        let __sink = &$sink;
        if $crate::log::log_sink::LogSink::enabled(__sink, __lvl) {
            let __args: &[&dyn ::std::fmt::Display] = &[$(&$arg),*];
            $crate::log::log_sink::LogSink::emit(
                __sink,
                &$crate::log::log_record::LogRecord::new(
                    __lvl,
                    $msg,
                    __args,
                    $crate::log::source_location::SourceLocation::new(line!(), file!()),
                ),
            );
        }
    }};
}

/// Sends one record to the process-wide logger.
#[macro_export]
macro_rules! logger_log {
    ($lvl:expr, $msg:expr $(, $arg:expr)* $(,)?) => {{
        let __lvl: $crate::log::log_priority::Priority = $lvl;
        let __logger = $crate::log::logger::Logger::global();
        if $crate::log::log_sink::LogSink::enabled(__logger, __lvl) {
            __logger.log(
                __lvl,
                $crate::log::source_location::SourceLocation::new(line!(), file!()),
                $msg,
                &[$(&$arg as &dyn ::std::fmt::Display),*],
            );
        }
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- TRACE ----------------------
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! log_trace  { ($($arg:tt)*)             => { $crate::logger_log!($crate::log::log_priority::Priority::Trace, $($arg)*) } }
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! sink_trace { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::log_priority::Priority::Trace, $($arg)*) } }

#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! sink_trace {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! log_debug  { ($($arg:tt)*)             => { $crate::logger_log!($crate::log::log_priority::Priority::Debug, $($arg)*) } }
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! sink_debug { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::log_priority::Priority::Debug, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! sink_debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! log_info  { ($($arg:tt)*)             => { $crate::logger_log!($crate::log::log_priority::Priority::Info, $($arg)*) } }
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! sink_info { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::log_priority::Priority::Info, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! sink_info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARN ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! log_warn  { ($($arg:tt)*)             => { $crate::logger_log!($crate::log::log_priority::Priority::Warn, $($arg)*) } }
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! sink_warn { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::log_priority::Priority::Warn, $($arg)*) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! sink_warn {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! log_error  { ($($arg:tt)*)             => { $crate::logger_log!($crate::log::log_priority::Priority::Error, $($arg)*) } }
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! sink_error { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::log_priority::Priority::Error, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! sink_error {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- FATAL ----------------------
// Always enabled: a fatal record is usually the last thing a process says.
#[macro_export]
macro_rules! log_fatal  { ($($arg:tt)*)             => { $crate::logger_log!($crate::log::log_priority::Priority::Fatal, $($arg)*) } }
#[macro_export]
macro_rules! sink_fatal { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::log_priority::Priority::Fatal, $($arg)*) } }
