//! Bridge from the `tracing` ecosystem into a [`LogSink`].
//!
//! Libraries that already emit `tracing` events can have them land in the same
//! file as the `log_*!` macros. [`SinkLayer`] is a `tracing-subscriber` layer
//! that maps each event's level to a [`Priority`], keeps the event's file and
//! line, and appends structured fields as `key=value` arguments.
//!
//! ```rust,ignore
//! logsink::enable_file_output();
//! logsink::log::tracing_bridge::init_tracing()?;
//!
//! tracing::warn!(retries = 3, "upstream slow");
//! // ... [WARN] "upstream slow retries=3" on line N in src/main.rs
//! ```

use std::fmt::{self, Display};

use tracing::{Event, Level, Subscriber, field::Field};
use tracing_subscriber::{Layer, layer::Context, registry::LookupSpan};

use crate::log::{
    log_priority::Priority, log_record::LogRecord, log_sink::LogSink, logger::Logger,
    sink_error::SinkError, source_location::SourceLocation,
};

const UNKNOWN_FILE: &str = "<unknown>";

/// A tracing layer that forwards events to a [`LogSink`].
pub struct SinkLayer<S> {
    sink: S,
}

impl<S: LogSink> SinkLayer<S> {
    #[must_use]
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    const fn level_to_priority(level: &Level) -> Priority {
        match *level {
            Level::TRACE => Priority::Trace,
            Level::DEBUG => Priority::Debug,
            Level::INFO => Priority::Info,
            Level::WARN => Priority::Warn,
            Level::ERROR => Priority::Error,
        }
    }
}

impl<S, Sub> Layer<Sub> for SinkLayer<S>
where
    S: LogSink + 'static,
    Sub: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, Sub>) {
        let metadata = event.metadata();
        let priority = Self::level_to_priority(metadata.level());
        if !self.sink.enabled(priority) {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let args: Vec<&dyn Display> = visitor
            .fields
            .iter()
            .map(|f| f as &dyn Display)
            .collect();
        let location = SourceLocation::new(
            metadata.line().unwrap_or(0),
            metadata.file().unwrap_or(UNKNOWN_FILE),
        );
        self.sink.emit(&LogRecord::new(
            priority,
            visitor.message.as_deref().unwrap_or(""),
            &args,
            location,
        ));
    }
}

/// Splits an event into its `message` and the remaining `key=value` fields.
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<String>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.fields.push(format!("{}={value:?}", field.name()));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.fields.push(format!("{}={value}", field.name()));
        }
    }
}

/// Installs a global subscriber that forwards every event to [`Logger::global`].
///
/// # Errors
///
/// Returns [`SinkError::SubscriberAlreadySet`] when another global subscriber
/// was installed first.
pub fn init_tracing() -> Result<(), SinkError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(SinkLayer::new(Logger::global()))
        .try_init()
        .map_err(|_| SinkError::SubscriberAlreadySet)
}
