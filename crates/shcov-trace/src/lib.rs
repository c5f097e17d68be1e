//! This crate provides the low-level helpers to emit and parse shell
//! execution traces.
//!
//! It is used by `shcov-runner` to configure the xtrace output of a traced
//! shell (with [EmitterConfig]), and to turn the raw bytes collected from
//! the shared trace log into per-file line coverage (with [RecordStream],
//! [HitParser] and [CoverageMap]).
//!
//! # Record format
//!
//! A trace record is a fixed group of four fields (event marker, source
//! path, line number, working-directory context) separated by an ASCII
//! unit separator and bounded on both sides by a [Delimiter] generated
//! fresh for every run. Anything between two delimiters that does not
//! contain a field separator is inter-record text (the command echoed by
//! the shell, nesting-depth prefixes) and is skipped during parsing.
//!
//! Records written by concurrent subshells may land in the log in any
//! relative order. Parsing makes no assumption about which process wrote
//! which record, and accumulation into a [CoverageMap] is commutative, so
//! the resulting coverage is independent of the interleaving.

mod coverage;
mod delimiter;
mod emitter;
mod error;
mod parser;
mod record;
mod stream;

pub use self::coverage::CoverageMap;
pub use self::delimiter::Delimiter;
pub use self::emitter::EmitterConfig;
pub use self::error::{Error, Result};
pub use self::parser::{HitParser, MalformedKind, ParsedRecord};
pub use self::record::{EventKind, FIELD_COUNT, FIELD_SEPARATOR, HitEvent};
pub use self::stream::RecordStream;
