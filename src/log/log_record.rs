use std::fmt::{self, Display, Write as _};

use chrono::{DateTime, Local, TimeZone};

use crate::log::{log_priority::Priority, source_location::SourceLocation};

/// Width of the timestamp prefix: a C-locale `ctime` string without the year
/// and the line break, e.g. `Tue Mar  5 09:07:03`.
pub const TIMESTAMP_WIDTH: usize = 19;

const CTIME_NO_YEAR: &str = "%a %b %e %H:%M:%S";

/// Represents a single log event on its way to the file.
///
/// Records are never stored: a sink builds one after the threshold check and
/// renders it straight into the output line.
#[derive(Clone, Copy)]
pub struct LogRecord<'a> {
    /// The severity of the event.
    pub priority: Priority,
    /// The caller's message text.
    pub message: &'a str,
    /// Extra values appended to the message, separated by single spaces.
    pub args: &'a [&'a dyn Display],
    /// Where the call was made.
    pub location: SourceLocation,
}

impl<'a> LogRecord<'a> {
    /// Creates a new `LogRecord`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use logsink::log::{log_priority::Priority, log_record::LogRecord, source_location::SourceLocation};
    /// use std::fmt::Display;
    ///
    /// let port = 8080;
    /// let args: [&dyn Display; 1] = [&port];
    /// let record = LogRecord::new(
    ///     Priority::Info,
    ///     "listening on",
    ///     &args,
    ///     SourceLocation::new(42, "main"),
    /// );
    /// assert_eq!(record.body(), "listening on 8080");
    /// ```
    pub fn new(
        priority: Priority,
        message: &'a str,
        args: &'a [&'a dyn Display],
        location: SourceLocation,
    ) -> Self {
        Self {
            priority,
            message,
            args,
            location,
        }
    }

    /// Message followed by one space and every argument joined by single spaces.
    ///
    /// With no arguments the body still ends in that one space.
    pub fn body(&self) -> String {
        let mut out = String::with_capacity(self.message.len() + 1);
        out.push_str(self.message);
        out.push(' ');
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{arg}");
        }
        out
    }

    /// Renders the full line (terminator included) using the given timestamp prefix.
    pub fn render(&self, timestamp: &str) -> String {
        format!(
            "{timestamp} {}\"{}\" on line {} in {}\n",
            self.priority.label(),
            self.body(),
            self.location.line,
            self.location.file,
        )
    }
}

impl fmt::Debug for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRecord")
            .field("priority", &self.priority)
            .field("body", &self.body())
            .field("location", &self.location)
            .finish()
    }
}

/// Formats `t` as the fixed-width record prefix.
pub fn format_timestamp<Tz>(t: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    t.format(CTIME_NO_YEAR).to_string()
}

/// Timestamp prefix for the current local time.
pub fn now_timestamp() -> String {
    format_timestamp(&Local::now())
}
