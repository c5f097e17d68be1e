use std::collections::BTreeMap;
use std::path::PathBuf;

/// A traced-command builder, describing the shell command to run under
/// coverage.
///
/// The spawned process always inherits the parent's environment: the
/// traced shell needs `PATH` and friends to behave like an untraced run.
/// Variables set with [`env`](Self::env) are layered on top, and the
/// tracing variables (`BASH_ENV`, `BASH_XTRACEFD`) are injected by the
/// spawner last.
#[derive(Debug, Clone)]
pub struct Command {
    /// Program to spawn.
    pub program: PathBuf,

    /// Program arguments.
    pub args: Vec<String>,

    /// Extra environment variables, layered over the inherited ones.
    pub envs: BTreeMap<String, String>,

    /// Working directory for the traced command.
    ///
    /// Also seeds the directory context used to resolve relative source
    /// paths during the drain.
    pub current_dir: Option<PathBuf>,
}

impl Command {
    /// Constructs a new `Command` for launching the program at path
    /// `program`, with no arguments, no extra environment variables, and
    /// the current process's working directory.
    ///
    /// If `program` is not an absolute path, the `PATH` will be searched
    /// in an OS-defined way.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: BTreeMap::new(),
            current_dir: None,
        }
    }

    /// Adds an argument to pass to the program.
    ///
    /// To pass multiple arguments see [`args`](Self::args).
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Adds multiple arguments to pass to the program.
    ///
    /// To pass a single argument see [`arg`](Self::arg).
    pub fn args<I, S>(self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        args.into_iter().fold(self, |cmd, arg| cmd.arg(arg))
    }

    /// Inserts or updates an extra environment variable mapping.
    pub fn env<K, V>(mut self, key: K, val: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.envs.insert(key.into(), val.into());
        self
    }

    /// Sets the working directory for the traced command.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}
