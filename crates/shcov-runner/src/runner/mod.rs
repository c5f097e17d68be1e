mod builder;

use std::io::{Read, Write as _};
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use shcov_trace::{CoverageMap, Delimiter, EmitterConfig, HitParser, ParsedRecord, RecordStream};
use tempfile::NamedTempFile;

pub use self::builder::{Builder, NeedsTransport, Ready};
use crate::Command;
use crate::error::{Error, SpawnError, TransportError};
use crate::spawner::{ProcessSpawner, SpawnContext};
use crate::transport::TraceTransport;

/// Result of a traced run.
#[derive(Debug)]
pub struct Outcome {
    /// Exit status of the traced command.
    ///
    /// A non-zero status is not an error of the runner: the drain happened
    /// either way, over whatever the process tree wrote before exiting.
    pub status: ExitStatus,

    /// Accumulated per-file line coverage.
    pub coverage: CoverageMap,
}

/// Traced-run driver.
///
/// Owns the full lifecycle of one run: generate the run's delimiter,
/// stage the execution environment, spawn the command with the trace
/// descriptor wired in, block until the whole process tree exited, then
/// drain the collected log into a [CoverageMap] and delete it.
///
/// There is no concurrent draining thread: the append-file transport has
/// no backpressure, so reading can wait until all writers are gone.
pub struct Runner<T, S> {
    transport: T,
    spawner: S,
    mute: bool,
}

impl Runner<(), ()> {
    /// Creates a runner builder.
    pub const fn builder() -> Builder<NeedsTransport> {
        Builder::new()
    }
}

impl<T: TraceTransport, S: ProcessSpawner> Runner<T, S> {
    /// Runs the command to completion and drains its trace log.
    ///
    /// On success, returns the command's exit status together with the
    /// accumulated coverage. If the log turns unreadable mid-drain, the
    /// coverage accumulated so far is returned inside
    /// [Error::Drain](crate::Error::Drain) instead of being discarded.
    #[tracing::instrument(
        name = "Run",
        skip_all,
        fields(program = %command.program.display())
    )]
    pub fn run(mut self, command: &Command) -> crate::Result<Outcome, T::Error, S::Error> {
        let res = self.run_and_drain(command);

        if let Err(e) = self.transport.discard() {
            tracing::warn!(error = %e, "failed to delete the trace log");
        }

        res
    }

    fn run_and_drain(&mut self, command: &Command) -> crate::Result<Outcome, T::Error, S::Error> {
        let emitter = EmitterConfig::new(Delimiter::generate());

        let root = match &command.current_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().map_err(Error::Setup)?,
        };

        // must outlive the child: every shell instance it forks sources
        // this file at startup
        let env_file = stage_environment(&emitter).map_err(Error::Setup)?;

        let ctx = SpawnContext {
            trace_fd: self.transport.write_fd().map_err(TransportError)?,
            env_file: env_file.path(),
            mute: self.mute,
        };

        let mut child = self.spawner.spawn(command, &ctx).map_err(SpawnError)?;

        tracing::info!(pid = child.id(), "traced command spawned");

        let status = child.wait().map_err(Error::Wait)?;

        tracing::info!(code = status.code(), "traced command exited");

        self.transport.close().map_err(TransportError)?;

        let reader = self.transport.reader().map_err(TransportError)?;

        let _span = tracing::info_span!("Drain").entered();

        match drain(reader, &emitter, root, env_file.path()) {
            Ok(coverage) => {
                if coverage.skipped_records() > 0 {
                    tracing::warn!(
                        skipped = coverage.skipped_records(),
                        "skipped malformed trace records"
                    );
                }

                Ok(Outcome { status, coverage })
            }
            Err((source, coverage)) => Err(Error::Drain {
                source,
                status,
                coverage,
            }),
        }
    }
}

/// Writes the execution-environment file enabling tracing in every shell
/// instance of the traced process tree.
fn stage_environment(emitter: &EmitterConfig) -> std::io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("shcov-env-")
        .suffix(".sh")
        .tempfile()?;

    file.write_all(emitter.environment_script().as_bytes())?;
    file.flush()?;

    Ok(file)
}

/// Folds the whole trace log into a coverage map.
///
/// Malformed records are skipped and counted; a read failure aborts the
/// pass but hands back whatever was accumulated up to that point.
fn drain<R: Read>(
    reader: R,
    emitter: &EmitterConfig,
    root: PathBuf,
    env_file: &Path,
) -> Result<CoverageMap, (shcov_trace::Error, CoverageMap)> {
    let mut parser = HitParser::new(root);
    let mut coverage = CoverageMap::default();

    for group in RecordStream::new(reader, emitter.delimiter()) {
        let fields = match group {
            Ok(fields) => fields,
            Err(e) => return Err((e, coverage)),
        };

        match parser.parse(&fields) {
            // hits inside the staged environment file are instrumentation,
            // not coverage of the traced program
            ParsedRecord::Hit(hit) if hit.path == env_file => (),
            ParsedRecord::Hit(hit) => coverage.record_hit(hit),
            ParsedRecord::Context | ParsedRecord::Sourceless => (),
            ParsedRecord::Malformed(kind) => {
                tracing::debug!(?kind, "skipped malformed trace record");
                coverage.record_skipped();
            }
        }
    }

    Ok(coverage)
}
