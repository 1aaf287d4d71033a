use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors reported by the few fallible entry points of the sink.
///
/// Logging itself never returns one of these; only callers that explicitly ask
/// (e.g. [`Logger::try_enable_file_output`](crate::log::logger::Logger::try_enable_file_output))
/// get to see why output is unavailable.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("cannot open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unknown log priority: {0:?}")]
    UnknownPriority(String),
    #[cfg(feature = "tracing")]
    #[error("a global tracing subscriber is already installed")]
    SubscriberAlreadySet,
}
