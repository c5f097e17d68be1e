use std::path::{Path, PathBuf};

use crate::record::{EventKind, HitEvent};

/// Outcome of validating one scanned field group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedRecord {
    /// The record is a line-execution event.
    Hit(HitEvent),

    /// The record updated the directory context; there is nothing to emit.
    Context,

    /// The record is a line-execution event of a shell with no backing
    /// source file (`bash -c`, a stdin-fed shell); there is no file to
    /// attribute the line to.
    Sourceless,

    /// The record failed structural validation and must be skipped.
    Malformed(MalformedKind),
}

/// Reason a trace record failed structural validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// The record does not carry the expected number of fields.
    ///
    /// The classic residue of a write torn across a transport without
    /// unbounded atomic appends.
    FieldCount,

    /// The event marker is not one of the known markers.
    UnknownMarker,

    /// The line-number field does not parse as a non-negative integer.
    LineNumber,

    /// A `push-dir` record carries an empty directory context.
    EmptyDirectory,

    /// A `pop-dir` record has no matching `push-dir`.
    ///
    /// Legitimately arises when a push event was dropped or truncated at a
    /// process boundary; tolerated, never fatal.
    StackUnderflow,
}

/// Validates scanned field groups and converts them into hit events.
///
/// The parser owns the directory-context stack of the run: `push-dir` and
/// `pop-dir` records mutate it, and relative source paths of `hit` records
/// are resolved against its current top before the event is emitted.
#[derive(Debug)]
pub struct HitParser {
    dirs: DirectoryContext,
}

impl HitParser {
    /// Creates a parser whose directory context is seeded with the traced
    /// command's initial working directory.
    pub const fn new(initial_dir: PathBuf) -> Self {
        Self {
            dirs: DirectoryContext::new(initial_dir),
        }
    }

    /// Validates a single field group.
    ///
    /// Malformed input is reported as a value so the caller can skip the
    /// record and keep processing the rest of the stream.
    pub fn parse(&mut self, fields: &[String]) -> ParsedRecord {
        let [marker, path, line, context] = fields else {
            return ParsedRecord::Malformed(MalformedKind::FieldCount);
        };

        let Some(kind) = EventKind::from_marker(marker) else {
            return ParsedRecord::Malformed(MalformedKind::UnknownMarker);
        };

        let Ok(line) = line.parse::<u32>() else {
            return ParsedRecord::Malformed(MalformedKind::LineNumber);
        };

        match kind {
            // an empty `${BASH_SOURCE}` expansion is routine, not
            // corruption: it is what sourceless shells produce
            EventKind::Hit if path.is_empty() => ParsedRecord::Sourceless,
            EventKind::Hit => ParsedRecord::Hit(HitEvent {
                path: self.dirs.resolve(Path::new(path)),
                line,
            }),
            EventKind::PushDir if context.is_empty() => {
                ParsedRecord::Malformed(MalformedKind::EmptyDirectory)
            }
            EventKind::PushDir => {
                self.dirs.push(PathBuf::from(context));
                ParsedRecord::Context
            }
            EventKind::PopDir => {
                if self.dirs.pop() {
                    ParsedRecord::Context
                } else {
                    ParsedRecord::Malformed(MalformedKind::StackUnderflow)
                }
            }
        }
    }

    /// Returns the directory currently used to resolve relative paths.
    pub fn current_dir(&self) -> &Path {
        self.dirs.current()
    }
}

/// Stack of working directories tracking the traced script's directory
/// changes.
///
/// The seed directory is not part of the stack proper: it survives any
/// amount of popping, so an underflowing stream degrades resolution
/// instead of corrupting it.
#[derive(Debug)]
struct DirectoryContext {
    base: PathBuf,
    stack: Vec<PathBuf>,
}

impl DirectoryContext {
    const fn new(base: PathBuf) -> Self {
        Self {
            base,
            stack: Vec::new(),
        }
    }

    fn current(&self) -> &Path {
        self.stack.last().unwrap_or(&self.base)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.current().join(path)
        }
    }

    fn push(&mut self, dir: PathBuf) {
        self.stack.push(dir);
    }

    /// Returns `false` on underflow.
    fn pop(&mut self) -> bool {
        self.stack.pop().is_some()
    }
}
