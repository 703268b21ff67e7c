//! Signal handling so the tray is torn down when the session ends

use tokio::signal::unix::{signal, Signal, SignalKind};

/// Signal that ended the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    Terminate,
    Interrupt,
}

/// Listens for SIGTERM and SIGINT
pub struct ShutdownSignal {
    sigterm: Signal,
    sigint: Signal,
}

impl ShutdownSignal {
    /// Register the handlers up front so a signal arriving during startup
    /// is not lost.
    pub fn register() -> std::io::Result<Self> {
        Ok(Self {
            sigterm: signal(SignalKind::terminate())?,
            sigint: signal(SignalKind::interrupt())?,
        })
    }

    /// Resolve once either signal arrives
    pub async fn wait(&mut self) -> ShutdownReason {
        tokio::select! {
            _ = self.sigterm.recv() => ShutdownReason::Terminate,
            _ = self.sigint.recv() => ShutdownReason::Interrupt,
        }
    }
}

impl std::fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShutdownReason::Terminate => write!(f, "SIGTERM"),
            ShutdownReason::Interrupt => write!(f, "SIGINT"),
        }
    }
}
