//! Status-area indicator using the StatusNotifierItem D-Bus protocol
//!
//! `ksni` serves the item from a task on the same runtime as the
//! controller. Menu clicks are queued to the controller over a channel.

use ksni::menu::StandardItem;
use ksni::{Category, MenuItem, Status, ToolTip, Tray, TrayMethods};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::config::APPLICATION_ID;
use crate::events::TrayEvent;

/// The tray item exported over D-Bus
pub struct QuickeysTray {
    icon_name: String,
    event_tx: mpsc::Sender<TrayEvent>,
}

impl QuickeysTray {
    pub fn new(icon_name: impl Into<String>, event_tx: mpsc::Sender<TrayEvent>) -> Self {
        Self {
            icon_name: icon_name.into(),
            event_tx,
        }
    }

    /// Queue a menu click. Runs inside the D-Bus task, so it must not
    /// wait for the controller.
    fn emit(&self, event: TrayEvent) {
        info!(%event, "tray menu activated");
        match self.event_tx.try_send(event) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!(%event, "controller busy, dropping tray event");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                warn!(%event, "failed to send tray event - controller gone?");
            }
        }
    }
}

impl Tray for QuickeysTray {
    fn id(&self) -> String {
        APPLICATION_ID.to_string()
    }

    fn title(&self) -> String {
        "Quickeys".to_string()
    }

    fn category(&self) -> Category {
        Category::ApplicationStatus
    }

    fn status(&self) -> Status {
        Status::Active
    }

    fn icon_name(&self) -> String {
        self.icon_name.clone()
    }

    fn tool_tip(&self) -> ToolTip {
        ToolTip {
            title: "Quickeys".to_string(),
            description: "Keyboard shortcuts for the focused application".to_string(),
            ..Default::default()
        }
    }

    fn menu(&self) -> Vec<MenuItem<Self>> {
        TrayEvent::MENU
            .iter()
            .map(|&event| {
                StandardItem {
                    label: event.label().to_string(),
                    activate: Box::new(move |tray: &mut Self| tray.emit(event)),
                    ..Default::default()
                }
                .into()
            })
            .collect()
    }
}

/// Owns the running tray service
pub struct TrayIndicator {
    icon_name: String,
    event_tx: mpsc::Sender<TrayEvent>,
    handle: Option<ksni::Handle<QuickeysTray>>,
}

impl TrayIndicator {
    pub fn new(event_tx: mpsc::Sender<TrayEvent>, icon_name: impl Into<String>) -> Self {
        Self {
            icon_name: icon_name.into(),
            event_tx,
            handle: None,
        }
    }

    /// Export the tray item; it stays visible until `stop()`
    pub async fn start(&mut self) -> Result<(), TrayError> {
        if self.handle.is_some() {
            return Err(TrayError::AlreadyRunning);
        }

        let tray = QuickeysTray::new(self.icon_name.clone(), self.event_tx.clone());
        let handle = tray
            .spawn()
            .await
            .map_err(|e| TrayError::Register(e.to_string()))?;
        self.handle = Some(handle);

        info!(icon = %self.icon_name, "tray indicator started");
        Ok(())
    }

    /// Remove the tray item and wait for the service to finish
    pub async fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.shutdown().await;
            info!("tray indicator stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

/// Errors that can occur starting the tray
#[derive(Debug, thiserror::Error)]
pub enum TrayError {
    #[error("tray indicator is already running")]
    AlreadyRunning,

    #[error("failed to register tray item: {0}")]
    Register(String),
}
