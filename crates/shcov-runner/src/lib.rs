//! This crate allows to run a shell command and collect per-line coverage
//! from its execution.
//!
//! Two main components are provided:
//! - A [Runner](self::runner::Runner) driving the full lifecycle of a
//!   traced run: spawn the command with tracing wired in, wait for it to
//!   exit, then drain the shared trace log into a
//!   [CoverageMap](shcov_trace::CoverageMap).
//! - A pair of traits to swap out the plumbing: the
//!   [TraceTransport](self::transport::TraceTransport) carrying raw trace
//!   bytes out of the traced process tree, and the
//!   [ProcessSpawner](self::spawner::ProcessSpawner) controlling how the
//!   command is spawned.
//!
//! # Collecting coverage
//!
//! ```no_run
//! use shcov_runner::transport::AppendFileTransport;
//! use shcov_runner::runner::Runner;
//! use shcov_runner::Command;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = AppendFileTransport::create()?;
//!
//! let runner = Runner::builder()
//!     .with_transport(transport)
//!     .mute(true)
//!     .build();
//!
//! let outcome = runner.run(&Command::new("bash").arg("./test-suite.sh"))?;
//!
//! for (path, lines) in outcome.coverage.files() {
//!     println!("{}: {} lines", path.display(), lines.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Why an append-mode file
//!
//! The traced script may fork many concurrent subshells, all writing trace
//! records into the single inherited descriptor. With a pipe, writes are
//! atomic only up to `PIPE_BUF` (512 bytes on some platforms), and an
//! expanded format string can exceed that, corrupting records. Append-mode
//! writes to one file description are serialized by the kernel regardless
//! of size, which is the property the default
//! [AppendFileTransport](self::transport::AppendFileTransport) is built
//! on. Any replacement transport must preserve it.

mod command;
mod error;

/// Module implementing the traced-run lifecycle.
pub mod runner;

/// Module containing the trait controlling how the traced command is
/// spawned.
pub mod spawner;

/// Module containing the trait carrying raw trace bytes out of the traced
/// process tree.
pub mod transport;

pub use self::command::Command;
pub use self::error::{Error, Result, SpawnError, TransportError};
