use std::path::PathBuf;

use crate::log::log_priority::Priority;

/// File the sink writes to unless told otherwise.
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// Initial settings for a [`Logger`](crate::log::logger::Logger).
///
/// The process-wide logger always starts from `SinkConfig::default()`;
/// standalone loggers can be built from any configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SinkConfig {
    /// Records below this priority are dropped.
    pub min_priority: Priority,
    /// Target of [`enable_file_output`](crate::log::logger::Logger::enable_file_output).
    pub file_path: PathBuf,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            min_priority: Priority::Info,
            file_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl SinkConfig {
    #[must_use]
    pub fn with_min_priority(mut self, min_priority: Priority) -> Self {
        self.min_priority = min_priority;
        self
    }

    #[must_use]
    pub fn with_file_path(mut self, file_path: impl Into<PathBuf>) -> Self {
        self.file_path = file_path.into();
        self
    }
}
