//! Overlay module: the window listing shortcuts
//!
//! The controller keeps at most one overlay open. Each overlay runs in a
//! child process so the tray's event loop never blocks on rendering.

mod launcher;
mod payload;
pub mod view;

pub use launcher::ProcessLauncher;
pub use payload::OverlayPayload;

/// Command-line flag that starts the process in overlay mode
pub const OVERLAY_FLAG: &str = "--overlay";

/// Opens overlay windows
pub trait OverlayLauncher {
    type Window: OverlayWindow;

    fn launch(&self, payload: &OverlayPayload) -> Result<Self::Window, OverlayError>;
}

/// A window opened by an `OverlayLauncher`
pub trait OverlayWindow {
    /// Close the window. Closing one the user already dismissed is a no-op.
    fn close(&mut self);
}

/// Errors opening an overlay
#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    #[error("failed to start overlay process: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("failed to encode overlay payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to send overlay payload: {0}")]
    Payload(#[source] std::io::Error),
}
