use super::Runner;
use crate::spawner::{DefaultSpawner, ProcessSpawner};
use crate::transport::TraceTransport;

/// Builder for [Runner].
///
/// It is usually created by calling [Runner::builder], and allows to
/// specify which transport and spawning strategy to use for a traced run.
pub struct Builder<S> {
    state: S,
}

/// Builder state: the trace transport is not chosen yet.
pub struct NeedsTransport;

/// Builder state: ready to build a [Runner].
pub struct Ready<T, S> {
    transport: T,
    spawner: S,
    mute: bool,
}

impl Builder<NeedsTransport> {
    pub(super) const fn new() -> Self {
        Self {
            state: NeedsTransport,
        }
    }

    /// Specifies the transport collecting raw trace bytes from the traced
    /// process tree.
    pub fn with_transport<T: TraceTransport>(
        self,
        transport: T,
    ) -> Builder<Ready<T, DefaultSpawner>> {
        Builder {
            state: Ready {
                transport,
                spawner: DefaultSpawner,
                mute: false,
            },
        }
    }
}

impl<T: TraceTransport, S: ProcessSpawner> Builder<Ready<T, S>> {
    /// Specifies the spawning strategy for the traced command.
    ///
    /// Defaults to [DefaultSpawner].
    pub fn with_spawner<S2: ProcessSpawner>(self, spawner: S2) -> Builder<Ready<T, S2>> {
        Builder {
            state: Ready {
                transport: self.state.transport,
                spawner,
                mute: self.state.mute,
            },
        }
    }

    /// Specifies whether the traced command's own stdout/stderr are
    /// suppressed.
    pub fn mute(mut self, mute: bool) -> Self {
        self.state.mute = mute;
        self
    }

    /// Builds the runner.
    pub fn build(self) -> Runner<T, S> {
        Runner {
            transport: self.state.transport,
            spawner: self.state.spawner,
            mute: self.state.mute,
        }
    }
}
