use std::io;
use std::os::fd::RawFd;
use std::path::Path;
use std::process::{Child, Stdio};

use crate::Command;

/// Name of the variable through which the shell learns the trace
/// descriptor.
pub const TRACE_FD_VAR: &str = "BASH_XTRACEFD";

/// Name of the variable pointing at the execution-environment file sourced
/// by every non-interactive shell instance.
///
/// Tracing is enabled through this file rather than by exporting
/// `SHELLOPTS`, which would leak unrelated shell options (`nounset`,
/// `pipefail`, ...) into the traced program.
pub const TRACE_ENV_VAR: &str = "BASH_ENV";

/// Tracing wiring handed to the spawner.
#[derive(Debug)]
pub struct SpawnContext<'a> {
    /// Descriptor the traced process tree writes records to.
    pub trace_fd: RawFd,

    /// Path of the execution-environment file.
    pub env_file: &'a Path,

    /// Whether to suppress the traced command's own stdout/stderr.
    pub mute: bool,
}

impl SpawnContext<'_> {
    /// Returns the environment variables implementing the tracing
    /// contract.
    pub fn trace_vars(&self) -> [(&'static str, String); 2] {
        [
            (TRACE_ENV_VAR, self.env_file.display().to_string()),
            (TRACE_FD_VAR, self.trace_fd.to_string()),
        ]
    }
}

/// Trait implementing the spawning strategy for the traced command.
pub trait ProcessSpawner {
    /// Error returned by this trait.
    type Error: std::error::Error;

    /// Spawns the command with the tracing wiring applied.
    ///
    /// Implementors must make sure the trace descriptor stays open in the
    /// spawned process (and its descendants), and must apply the
    /// environment variables of [SpawnContext::trace_vars].
    fn spawn(&mut self, command: &Command, ctx: &SpawnContext<'_>)
    -> Result<Child, Self::Error>;
}

/// Default spawning strategy, backed by [std::process::Command].
///
/// The trace descriptor is inherited as-is: the transport already cleared
/// its close-on-exec flag, and descriptors above the standard three are
/// passed through `fork`/`exec` untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSpawner;

impl ProcessSpawner for DefaultSpawner {
    type Error = io::Error;

    fn spawn(&mut self, command: &Command, ctx: &SpawnContext<'_>) -> io::Result<Child> {
        let mut cmd = std::process::Command::new(&command.program);

        cmd.args(&command.args);
        cmd.envs(&command.envs);
        cmd.envs(ctx.trace_vars());

        if let Some(dir) = &command.current_dir {
            cmd.current_dir(dir);
        }

        if ctx.mute {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }

        cmd.spawn()
    }
}
