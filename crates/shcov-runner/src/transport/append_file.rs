use std::fs::{File, OpenOptions};
use std::io;
use std::os::fd::{AsRawFd, RawFd};

use nix::fcntl::{FcntlArg, FdFlag, fcntl};
use tempfile::TempPath;

use super::TraceTransport;

/// Trace transport backed by a temporary file opened in append mode.
///
/// Every descendant process writes through one shared file description
/// positioned at end-of-file by the kernel on each write, so concurrent
/// records of any size land contiguously. This is what makes the log safe
/// without any cooperative locking between the writers.
pub struct AppendFileTransport {
    path: Option<TempPath>,
    writer: Option<File>,
}

impl AppendFileTransport {
    /// Creates a fresh, empty backing file and opens it for appending.
    ///
    /// The write descriptor is made inheritable right away, so it survives
    /// the `exec` into the traced shell.
    pub fn create() -> io::Result<Self> {
        let path = tempfile::Builder::new()
            .prefix("shcov-trace-")
            .tempfile()?
            .into_temp_path();

        let writer = OpenOptions::new().append(true).open(&path)?;

        fcntl(writer.as_raw_fd(), FcntlArg::F_SETFD(FdFlag::empty()))?;

        Ok(Self {
            path: Some(path),
            writer: Some(writer),
        })
    }
}

impl TraceTransport for AppendFileTransport {
    type Reader = File;
    type Error = io::Error;

    fn write_fd(&self) -> io::Result<RawFd> {
        self.writer
            .as_ref()
            .map(AsRawFd::as_raw_fd)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "write side closed"))
    }

    fn close(&mut self) -> io::Result<()> {
        self.writer.take();
        Ok(())
    }

    fn reader(&mut self) -> io::Result<File> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "backing file discarded"))?;

        File::open(path)
    }

    fn discard(&mut self) -> io::Result<()> {
        self.writer.take();

        match self.path.take() {
            Some(path) => path.close(),
            None => Ok(()),
        }
    }
}
