use crate::log::{log_priority::Priority, log_record::LogRecord, log_sink::LogSink};

/// Sink that discards everything.
#[derive(Debug, Clone, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn enabled(&self, _priority: Priority) -> bool {
        false
    }

    #[inline]
    fn emit(&self, _record: &LogRecord<'_>) {}
}
