use std::{fmt, panic::Location};

/// Where a log call was made.
///
/// Usually filled in for you, either by the `log_*!` macros (`line!()` and
/// `file!()`) or by the `#[track_caller]` entry points on
/// [`Logger`](crate::log::logger::Logger). Build one by hand when forwarding
/// records from somewhere that carries its own metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: u32,
    pub file: &'static str,
}

impl SourceLocation {
    #[must_use]
    pub const fn new(line: u32, file: &'static str) -> Self {
        Self { line, file }
    }

    /// Location of the caller of the (`#[track_caller]`) function this is invoked from.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(loc: &'static Location<'static>) -> Self {
        Self {
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} in {}", self.line, self.file)
    }
}
