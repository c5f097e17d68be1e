use std::process::ExitStatus;

use shcov_trace::CoverageMap;

/// Trace transport error.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct TransportError<E>(pub E);

/// Process spawner error.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct SpawnError<E>(pub E);

/// Error type of this crate.
#[derive(thiserror::Error, Debug)]
pub enum Error<E1, E2> {
    /// The trace transport failed.
    #[error(transparent)]
    Transport(#[from] TransportError<E1>),

    /// The traced command could not be spawned.
    #[error(transparent)]
    Spawn(#[from] SpawnError<E2>),

    /// Staging the execution-environment file failed.
    #[error("failed to stage the trace environment")]
    Setup(#[source] std::io::Error),

    /// Waiting for the traced command to exit failed.
    #[error("failed to wait for the traced command")]
    Wait(#[source] std::io::Error),

    /// The shared trace log became unreadable during the drain.
    #[error("failed to drain the shared trace log")]
    Drain {
        /// Underlying read error.
        #[source]
        source: shcov_trace::Error,

        /// Exit status of the traced command, which did run.
        status: ExitStatus,

        /// Coverage accumulated before the failure; never discarded.
        coverage: CoverageMap,
    },
}

/// Result type of this crate.
pub type Result<T, E1, E2> = core::result::Result<T, Error<E1, E2>>;
