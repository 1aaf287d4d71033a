use crate::log::{
    log_priority::Priority,
    log_record::{self, LogRecord},
    log_sink::LogSink,
    sink_config::SinkConfig,
    sink_error::SinkError,
    source_location::SourceLocation,
};

use std::{
    fmt::Display,
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    sync::{
        Mutex, MutexGuard, OnceLock, PoisonError,
        atomic::{AtomicU8, Ordering},
    },
};

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Priority-filtered, line-oriented file logger.
///
/// A `Logger` owns at most one open file. Every record that passes the
/// threshold is rendered to a single line and written with one `write_all`
/// while the output lock is held, so concurrent callers never interleave
/// within a line.
///
/// # Architecture
///
/// 1. **Filter**: the minimum priority lives in an atomic; a record below it
///    costs one load and nothing else.
/// 2. **Format**: timestamp, label, message and arguments are rendered before
///    the lock is taken.
/// 3. **Write**: the line goes straight to the file and is flushed, so nothing
///    is lost if the process exits without dropping the logger.
///
/// Most programs use the process-wide instance from [`Logger::global`] through
/// the `log_*!` macros. Standalone instances are handy for tests and for
/// components that receive their sink by injection.
///
/// No operation reports failure to the caller except
/// [`try_enable_file_output`](Self::try_enable_file_output). When the file is
/// missing or could not be opened, records are dropped silently.
#[derive(Debug)]
pub struct Logger {
    min_priority: AtomicU8,
    output: Mutex<Output>,
}

#[derive(Debug)]
struct Output {
    path: PathBuf,
    file: Option<File>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(SinkConfig::default())
    }
}

impl Logger {
    /// Creates a logger with file output disabled.
    #[must_use]
    pub fn new(config: SinkConfig) -> Self {
        Self {
            min_priority: AtomicU8::new(config.min_priority.as_u8()),
            output: Mutex::new(Output {
                path: config.file_path,
                file: None,
            }),
        }
    }

    /// Returns the process-wide logger, creating it on first access.
    ///
    /// Initialization happens exactly once even when several threads race on
    /// the first call. The instance starts from [`SinkConfig::default`] and
    /// lives until the process exits.
    pub fn global() -> &'static Logger {
        GLOBAL.get_or_init(Logger::default)
    }

    /// Sets the threshold; takes effect for every later call on any thread.
    pub fn set_minimum_priority(&self, priority: Priority) {
        self.min_priority.store(priority.as_u8(), Ordering::Relaxed);
    }

    #[must_use]
    pub fn minimum_priority(&self) -> Priority {
        Priority::from_u8(self.min_priority.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Changes the file used by the next [`enable_file_output`](Self::enable_file_output).
    ///
    /// An already open file stays open until output is re-enabled or disabled.
    pub fn set_file_path(&self, path: impl Into<PathBuf>) {
        self.lock_output().path = path.into();
    }

    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        self.lock_output().path.clone()
    }

    /// Opens (or reopens) the configured file, truncating it.
    ///
    /// If the open fails, file output stays disabled and later records are
    /// dropped without notice.
    pub fn enable_file_output(&self) {
        let _ = self.try_enable_file_output();
    }

    /// Same as [`enable_file_output`](Self::enable_file_output), but reports why
    /// the file could not be opened.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Open`] when the file cannot be created or
    /// truncated. File output is disabled in that case.
    pub fn try_enable_file_output(&self) -> Result<(), SinkError> {
        let mut out = self.lock_output();
        // Close first so a reopen of the same path starts from an empty file.
        out.file = None;
        let file = open_truncated(&out.path).map_err(|source| SinkError::Open {
            path: out.path.clone(),
            source,
        })?;
        out.file = Some(file);
        Ok(())
    }

    /// Points the logger at `path` and enables file output there.
    pub fn enable_file_output_at(&self, path: impl Into<PathBuf>) {
        let mut out = self.lock_output();
        out.path = path.into();
        out.file = None;
        out.file = open_truncated(&out.path).ok();
    }

    /// Closes the file; records are dropped until output is enabled again.
    pub fn disable_file_output(&self) {
        self.lock_output().file = None;
    }

    #[must_use]
    pub fn is_file_output_enabled(&self) -> bool {
        self.lock_output().file.is_some()
    }

    #[inline]
    fn passes(&self, priority: Priority) -> bool {
        priority.as_u8() >= self.min_priority.load(Ordering::Relaxed)
    }

    /// Emits one record if `priority` meets the threshold.
    ///
    /// # Arguments
    ///
    /// * `priority` - Severity of the record.
    /// * `location` - Call site written after the message.
    /// * `message` - Main text.
    /// * `args` - Extra values, rendered only when the record passes the filter.
    pub fn log(
        &self,
        priority: Priority,
        location: SourceLocation,
        message: &str,
        args: &[&dyn Display],
    ) {
        if !self.passes(priority) {
            return;
        }
        self.write_record(&LogRecord::new(priority, message, args, location));
    }

    fn write_record(&self, record: &LogRecord<'_>) {
        let line = record.render(&log_record::now_timestamp());

        let mut out = self.lock_output();
        if let Some(file) = out.file.as_mut() {
            // Never surface I/O errors to the caller.
            let _ = file.write_all(line.as_bytes()).and_then(|()| file.flush());
        }
    }

    #[track_caller]
    pub fn trace(&self, message: &str, args: &[&dyn Display]) {
        self.log(Priority::Trace, SourceLocation::caller(), message, args);
    }

    #[track_caller]
    pub fn debug(&self, message: &str, args: &[&dyn Display]) {
        self.log(Priority::Debug, SourceLocation::caller(), message, args);
    }

    #[track_caller]
    pub fn info(&self, message: &str, args: &[&dyn Display]) {
        self.log(Priority::Info, SourceLocation::caller(), message, args);
    }

    #[track_caller]
    pub fn warn(&self, message: &str, args: &[&dyn Display]) {
        self.log(Priority::Warn, SourceLocation::caller(), message, args);
    }

    #[track_caller]
    pub fn error(&self, message: &str, args: &[&dyn Display]) {
        self.log(Priority::Error, SourceLocation::caller(), message, args);
    }

    #[track_caller]
    pub fn fatal(&self, message: &str, args: &[&dyn Display]) {
        self.log(Priority::Fatal, SourceLocation::caller(), message, args);
    }

    /// A panic while holding the lock must not disable logging for everyone else.
    fn lock_output(&self) -> MutexGuard<'_, Output> {
        self.output.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for Logger {
    #[inline]
    fn enabled(&self, priority: Priority) -> bool {
        self.passes(priority)
    }

    fn emit(&self, record: &LogRecord<'_>) {
        if self.passes(record.priority) {
            self.write_record(record);
        }
    }
}

fn open_truncated(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::log_record::TIMESTAMP_WIDTH;
    use std::{fs, sync::Arc, thread};

    fn logger_in(dir: &tempfile::TempDir) -> (Logger, PathBuf) {
        let path = dir.path().join("log.txt");
        let logger = Logger::new(SinkConfig::default().with_file_path(&path));
        (logger, path)
    }

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn new_logger_uses_config() {
        let logger = Logger::new(
            SinkConfig::default()
                .with_min_priority(Priority::Warn)
                .with_file_path("elsewhere.log"),
        );
        assert_eq!(logger.minimum_priority(), Priority::Warn);
        assert_eq!(logger.file_path(), PathBuf::from("elsewhere.log"));
        assert!(!logger.is_file_output_enabled());
    }

    #[test]
    fn emits_iff_level_meets_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, path) = logger_in(&dir);

        for threshold in Priority::ALL {
            for level in Priority::ALL {
                logger.set_minimum_priority(threshold);
                logger.enable_file_output();
                logger.log(level, SourceLocation::new(1, "t.rs"), "sample", &[]);

                let written = fs::read_to_string(&path).unwrap();
                assert_eq!(
                    !written.is_empty(),
                    level >= threshold,
                    "threshold={threshold} level={level} wrote {written:?}"
                );
            }
        }
    }

    #[test]
    fn info_record_has_expected_shape() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, path) = logger_in(&dir);
        logger.enable_file_output();

        logger.log(Priority::Info, SourceLocation::new(42, "main"), "starting up", &[]);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 1);
        assert_eq!(
            &lines[0][TIMESTAMP_WIDTH..],
            " [INFO] \"starting up \" on line 42 in main"
        );
    }

    #[test]
    fn filtered_call_appends_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, path) = logger_in(&dir);
        logger.set_minimum_priority(Priority::Warn);
        logger.enable_file_output();

        logger.debug("ignored", &[]);

        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn args_are_not_formatted_when_filtered() {
        struct Explodes;
        impl Display for Explodes {
            fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                panic!("formatted a filtered record");
            }
        }

        let logger = Logger::default();
        logger.set_minimum_priority(Priority::Error);
        logger.trace("never", &[&Explodes]);
    }

    #[test]
    fn reenable_truncates_previous_records() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, path) = logger_in(&dir);

        logger.enable_file_output();
        logger.info("first", &[]);
        logger.info("second", &[]);
        logger.enable_file_output();
        logger.info("third", &[]);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("\"third \""), "got {lines:?}");
    }

    #[test]
    fn logging_before_enable_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, path) = logger_in(&dir);

        for level in Priority::ALL {
            logger.log(level, SourceLocation::new(3, "x.rs"), "nobody listening", &[]);
        }

        assert!(!path.exists());
    }

    #[test]
    fn failed_open_degrades_to_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("log.txt");
        let logger = Logger::new(SinkConfig::default().with_file_path(&path));

        match logger.try_enable_file_output() {
            Err(SinkError::Open { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Open error, got: {:?}", other),
        }
        assert!(!logger.is_file_output_enabled());

        logger.enable_file_output();
        logger.error("still fine", &[]);
        assert!(!path.exists());
    }

    #[test]
    fn disable_stops_writing() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, path) = logger_in(&dir);

        logger.enable_file_output();
        logger.warn("kept", &[]);
        logger.disable_file_output();
        logger.warn("dropped", &[]);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("kept"));
    }

    #[test]
    fn enable_at_switches_target() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, first) = logger_in(&dir);
        let second = dir.path().join("other.log");

        logger.enable_file_output();
        logger.info("one", &[]);
        logger.enable_file_output_at(&second);
        logger.info("two", &[]);

        assert_eq!(logger.file_path(), second);
        assert_eq!(read_lines(&first).len(), 1);
        let lines = read_lines(&second);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("\"two \""));
    }

    #[test]
    fn convenience_methods_record_the_caller() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, path) = logger_in(&dir);
        logger.set_minimum_priority(Priority::Trace);
        logger.enable_file_output();

        let line = line!() + 1;
        logger.trace("here", &[]);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 1);
        assert!(
            lines[0].ends_with(&format!("on line {line} in {}", file!())),
            "got {}",
            lines[0]
        );
        assert!(lines[0].contains(" [TRACE] "));
    }

    #[test]
    fn each_entry_point_uses_its_label() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, path) = logger_in(&dir);
        logger.set_minimum_priority(Priority::Trace);
        logger.enable_file_output();

        logger.trace("m", &[]);
        logger.debug("m", &[]);
        logger.info("m", &[]);
        logger.warn("m", &[]);
        logger.error("m", &[]);
        logger.fatal("m", &[]);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), Priority::ALL.len());
        for (line, p) in lines.iter().zip(Priority::ALL) {
            assert_eq!(&line[TIMESTAMP_WIDTH + 1..][..p.label().len()], p.label());
        }
    }

    #[test]
    fn concurrent_writers_produce_whole_lines() {
        const THREADS: usize = 32;
        const PER_THREAD: usize = 50;

        let dir = tempfile::tempdir().unwrap();
        let (logger, path) = logger_in(&dir);
        logger.enable_file_output();
        let logger = Arc::new(logger);

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let logger = Arc::clone(&logger);
                thread::spawn(move || {
                    for i in 0..PER_THREAD {
                        logger.log(
                            Priority::Warn,
                            SourceLocation::new(7, "worker.rs"),
                            "worker",
                            &[&t, &i],
                        );
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), THREADS * PER_THREAD);
        for line in &lines {
            let rest = &line[TIMESTAMP_WIDTH..];
            assert!(rest.starts_with(" [WARN] \"worker "), "malformed: {line}");
            assert!(rest.ends_with("\" on line 7 in worker.rs"), "malformed: {line}");
        }
    }

    #[test]
    fn poisoned_lock_does_not_disable_logging() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, path) = logger_in(&dir);
        logger.enable_file_output();
        let logger = Arc::new(logger);

        let poisoner = Arc::clone(&logger);
        let _ = thread::spawn(move || {
            let _guard = poisoner.output.lock().unwrap();
            panic!("poison the output lock");
        })
        .join();

        logger.error("after poison", &[]);
        assert_eq!(read_lines(&path).len(), 1);
    }

    #[test]
    fn trait_object_filters_like_inherent_api() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, path) = logger_in(&dir);
        logger.set_minimum_priority(Priority::Error);
        logger.enable_file_output();

        let sink: &dyn LogSink = &logger;
        assert!(!sink.enabled(Priority::Warn));
        assert!(sink.enabled(Priority::Fatal));

        let loc = SourceLocation::new(9, "dyn.rs");
        sink.emit(&LogRecord::new(Priority::Info, "dropped", &[], loc));
        sink.emit(&LogRecord::new(Priority::Fatal, "kept", &[], loc));

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(" [FATAL] \"kept \" on line 9 in dyn.rs"));
    }
}
