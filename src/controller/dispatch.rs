//! Dispatches tray menu actions
//!
//! Handles one event at a time on the runtime thread. The only state is
//! the currently open overlay, which is closed before a new one opens.

use std::ops::ControlFlow;
use std::path::Path;

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::events::TrayEvent;
use crate::overlay::{OverlayLauncher, OverlayPayload, OverlayWindow};
use crate::shortcuts::{ShortcutStore, StoreError};
use crate::window::{ActiveApplication, ResolveError};

/// Opens a directory in the user's file manager
pub type FolderOpener = fn(&Path) -> std::io::Result<()>;

/// Why the overlay shows a message instead of shortcuts
#[derive(Debug, thiserror::Error)]
enum GatherError {
    #[error("Could not determine the active application: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Could not read the shortcut files: {0}")]
    Store(#[from] StoreError),
}

/// Owns the overlay slot and reacts to tray events
pub struct Controller<A, L: OverlayLauncher> {
    resolver: A,
    store: ShortcutStore,
    launcher: L,
    /// Overlay currently on screen, if any
    overlay: Option<L::Window>,
    open_folder: FolderOpener,
}

impl<A: ActiveApplication, L: OverlayLauncher> Controller<A, L> {
    pub fn new(resolver: A, store: ShortcutStore, launcher: L) -> Self {
        Self {
            resolver,
            store,
            launcher,
            overlay: None,
            open_folder: open_in_file_manager,
        }
    }

    /// Replace how the shortcuts folder is opened
    pub fn with_folder_opener(mut self, open_folder: FolderOpener) -> Self {
        self.open_folder = open_folder;
        self
    }

    /// Process tray events until `Quit` or until every sender is gone.
    /// Any open overlay is closed before returning.
    pub async fn run(&mut self, mut event_rx: mpsc::Receiver<TrayEvent>) {
        info!("controller started");

        while let Some(event) = event_rx.recv().await {
            if self.handle_event(event).is_break() {
                break;
            }
        }

        self.close_overlay();
        info!("controller stopped");
    }

    /// Handle one tray event
    pub fn handle_event(&mut self, event: TrayEvent) -> ControlFlow<()> {
        debug!(%event, "handling tray event");
        match event {
            TrayEvent::ShowShortcuts => self.show_shortcuts(),
            TrayEvent::OpenShortcutsFolder => self.open_shortcuts_folder(),
            TrayEvent::Quit => {
                info!("quit requested");
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// Close the current overlay, if any
    pub fn close_overlay(&mut self) {
        if let Some(mut overlay) = self.overlay.take() {
            overlay.close();
        }
    }

    fn show_shortcuts(&mut self) {
        let payload = match self.gather() {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "showing error overlay");
                OverlayPayload::message("Quickeys", e.to_string())
            }
        };

        self.close_overlay();

        match self.launcher.launch(&payload) {
            Ok(window) => self.overlay = Some(window),
            Err(e) => error!(error = %e, "failed to open overlay"),
        }
    }

    fn gather(&self) -> Result<OverlayPayload, GatherError> {
        let application = self.resolver.resolve()?;
        let shortcuts = self.store.find(&application)?;
        let system = self.store.system()?;

        debug!(
            %application,
            shortcuts = shortcuts.len(),
            system = system.len(),
            "shortcuts gathered"
        );

        Ok(OverlayPayload::Shortcuts {
            application,
            shortcuts,
            system,
        })
    }

    fn open_shortcuts_folder(&self) {
        let dir = self.store.dir();
        match (self.open_folder)(dir) {
            Ok(()) => info!(?dir, "opened shortcuts folder"),
            Err(e) => error!(?e, ?dir, "failed to open shortcuts folder"),
        }
    }
}

fn open_in_file_manager(dir: &Path) -> std::io::Result<()> {
    open::that_detached(dir)
}
