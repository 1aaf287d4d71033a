use std::{fmt, str::FromStr};

use crate::log::sink_error::SinkError;

/// Defines the severity levels for log messages.
///
/// Variants are ordered by severity, so `Trace < Debug < ... < Fatal` and a
/// threshold check is a plain comparison.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    /// Designates very fine-grained informational events.
    Trace = 0,
    /// Designates fine-grained informational events that are most useful to debug an application.
    Debug = 1,
    /// Designates informational messages that highlight the progress of the application at coarse-grained level.
    #[default]
    Info = 2,
    /// Designates potentially harmful situations.
    Warn = 3,
    /// Designates error events that might still allow the application to continue running.
    Error = 4,
    /// Designates severe error events that will presumably lead the application to abort.
    Fatal = 5,
}

impl Priority {
    /// All priorities, from least to most severe.
    pub const ALL: [Priority; 6] = [
        Priority::Trace,
        Priority::Debug,
        Priority::Info,
        Priority::Warn,
        Priority::Error,
        Priority::Fatal,
    ];

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns `None` for anything outside `0..=5`.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Priority::Trace),
            1 => Some(Priority::Debug),
            2 => Some(Priority::Info),
            3 => Some(Priority::Warn),
            4 => Some(Priority::Error),
            5 => Some(Priority::Fatal),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Priority::Trace => "TRACE",
            Priority::Debug => "DEBUG",
            Priority::Info => "INFO",
            Priority::Warn => "WARN",
            Priority::Error => "ERROR",
            Priority::Fatal => "FATAL",
        }
    }

    /// The bracketed label written in front of every record, trailing space included.
    pub const fn label(self) -> &'static str {
        match self {
            Priority::Trace => "[TRACE] ",
            Priority::Debug => "[DEBUG] ",
            Priority::Info => "[INFO] ",
            Priority::Warn => "[WARN] ",
            Priority::Error => "[ERROR] ",
            Priority::Fatal => "[FATAL] ",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = SinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Priority::Trace),
            "debug" => Ok(Priority::Debug),
            "info" => Ok(Priority::Info),
            "warn" | "warning" => Ok(Priority::Warn),
            "error" => Ok(Priority::Error),
            "fatal" => Ok(Priority::Fatal),
            _ => Err(SinkError::UnknownPriority(s.to_owned())),
        }
    }
}
