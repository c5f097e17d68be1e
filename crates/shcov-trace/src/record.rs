use std::path::PathBuf;

/// Number of fields in a trace record.
pub const FIELD_COUNT: usize = 4;

/// Separator between the fields of a trace record (ASCII unit separator).
///
/// Control characters never occur in the text the shell echoes between
/// records, which is what lets the record scanner tell payloads apart from
/// inter-record noise.
pub const FIELD_SEPARATOR: char = '\u{1f}';

/// Event marker of a trace record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A source line was executed.
    Hit,

    /// The traced script entered a new working directory.
    PushDir,

    /// The traced script returned to the previous working directory.
    PopDir,
}

impl EventKind {
    /// Returns the marker string written into the trace log.
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::PushDir => "push-dir",
            Self::PopDir => "pop-dir",
        }
    }

    /// Parses a marker field back into an event kind.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "hit" => Some(Self::Hit),
            "push-dir" => Some(Self::PushDir),
            "pop-dir" => Some(Self::PopDir),
            _ => None,
        }
    }
}

/// A validated line-execution event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitEvent {
    /// Absolute path of the executed source file.
    pub path: PathBuf,

    /// Executed line number (1-based in practice; 0 is accepted).
    pub line: u32,
}
