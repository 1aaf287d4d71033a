use crate::log::{log_priority::Priority, log_record::LogRecord};

/// Anything that accepts log records.
///
/// Implementations must never fail or panic towards the caller: a record that
/// cannot be written is dropped.
pub trait LogSink: Send + Sync {
    /// Whether a record at `priority` would currently be emitted.
    fn enabled(&self, priority: Priority) -> bool;

    /// Filters, formats and writes one record.
    fn emit(&self, record: &LogRecord<'_>);
}

impl<S: LogSink + ?Sized> LogSink for &S {
    #[inline]
    fn enabled(&self, priority: Priority) -> bool {
        (**self).enabled(priority)
    }

    #[inline]
    fn emit(&self, record: &LogRecord<'_>) {
        (**self).emit(record);
    }
}

impl<S: LogSink + ?Sized> LogSink for std::sync::Arc<S> {
    #[inline]
    fn enabled(&self, priority: Priority) -> bool {
        (**self).enabled(priority)
    }

    #[inline]
    fn emit(&self, record: &LogRecord<'_>) {
        (**self).emit(record);
    }
}
