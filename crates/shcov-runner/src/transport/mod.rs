mod append_file;

use std::io::Read;
use std::os::fd::RawFd;

pub use self::append_file::AppendFileTransport;

/// Trait implementing the transport carrying raw trace bytes from the
/// traced process tree back to the runner.
///
/// # Contract
///
/// Writes from independent, uncoordinated processes sharing the exposed
/// descriptor must land contiguously in the collected byte stream: each
/// individual write appears whole, never interleaved with another one,
/// regardless of its size. The relative order of writes from different
/// processes is unspecified.
///
/// The runner drives the lifecycle in a fixed order: `write_fd` before
/// the command is spawned, `close` once it exited, `reader` to drain the
/// collected bytes, `discard` once fully drained (or on spawn failure).
pub trait TraceTransport {
    /// Reader over the collected bytes.
    type Reader: Read;

    /// Error returned by this trait.
    type Error: std::error::Error;

    /// Returns the descriptor the traced process tree inherits for
    /// writing.
    ///
    /// The descriptor must survive `exec` (no close-on-exec flag).
    fn write_fd(&self) -> Result<RawFd, Self::Error>;

    /// Closes the write side.
    ///
    /// Idempotent: calling it on an already-closed transport is a no-op.
    fn close(&mut self) -> Result<(), Self::Error>;

    /// Opens the collected bytes for reading.
    ///
    /// Only meaningful after [close](Self::close); the returned reader
    /// sees everything the process tree wrote.
    fn reader(&mut self) -> Result<Self::Reader, Self::Error>;

    /// Removes the backing storage, if any.
    ///
    /// Idempotent: discarding an already-discarded transport is a no-op.
    fn discard(&mut self) -> Result<(), Self::Error>;
}
