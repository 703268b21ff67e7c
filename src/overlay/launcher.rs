//! Launches overlay windows as child processes
//!
//! The child is this executable started with `--overlay`. Closing an
//! overlay kills and reaps its process.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use tracing::{debug, warn};

use super::{OverlayError, OverlayLauncher, OverlayPayload, OverlayWindow, OVERLAY_FLAG};

/// Starts `<program> --overlay` and feeds it the payload
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    program: PathBuf,
}

impl ProcessLauncher {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Launch overlays with the running executable
    pub fn current_exe() -> Result<Self, OverlayError> {
        Ok(Self::new(std::env::current_exe().map_err(OverlayError::Spawn)?))
    }
}

impl OverlayLauncher for ProcessLauncher {
    type Window = ChildOverlay;

    fn launch(&self, payload: &OverlayPayload) -> Result<ChildOverlay, OverlayError> {
        let json = payload.to_json()?;

        let mut child = Command::new(&self.program)
            .arg(OVERLAY_FLAG)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(OverlayError::Spawn)?;

        // Dropping stdin closes the pipe so the child sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(&json),
            None => Err(std::io::ErrorKind::BrokenPipe.into()),
        };

        let mut overlay = ChildOverlay { child };
        if let Err(e) = written {
            overlay.close();
            return Err(OverlayError::Payload(e));
        }

        debug!(pid = overlay.child.id(), title = payload.title(), "overlay launched");
        Ok(overlay)
    }
}

/// An overlay window living in a child process
#[derive(Debug)]
pub struct ChildOverlay {
    child: Child,
}

impl OverlayWindow for ChildOverlay {
    fn close(&mut self) {
        match self.child.try_wait() {
            Ok(Some(status)) => {
                debug!(pid = self.child.id(), %status, "overlay already closed");
                return;
            }
            Ok(None) => {}
            Err(e) => warn!(?e, "failed to poll overlay process"),
        }

        if let Err(e) = self.child.kill() {
            warn!(?e, pid = self.child.id(), "failed to kill overlay process");
        }
        if let Err(e) = self.child.wait() {
            warn!(?e, pid = self.child.id(), "failed to reap overlay process");
        }
    }
}
