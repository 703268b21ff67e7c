//! Events module for tray menu actions
//!
//! The tray service thread turns menu clicks into `TrayEvent` values
//! and hands them to the controller.

use serde::{Deserialize, Serialize};

/// Actions requested from the tray menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrayEvent {
    /// Show the overlay for the focused application
    ShowShortcuts,

    /// Open the per-user shortcuts directory in the file manager
    OpenShortcutsFolder,

    /// Tear down the overlay and the tray, then exit
    Quit,
}

impl TrayEvent {
    /// Menu items in display order
    pub const MENU: [TrayEvent; 3] = [
        TrayEvent::ShowShortcuts,
        TrayEvent::OpenShortcutsFolder,
        TrayEvent::Quit,
    ];

    /// Text shown in the tray menu
    pub fn label(&self) -> &'static str {
        match self {
            TrayEvent::ShowShortcuts => "Show shortcuts",
            TrayEvent::OpenShortcutsFolder => "Open Shortcuts Folder",
            TrayEvent::Quit => "Quit",
        }
    }
}

impl std::fmt::Display for TrayEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrayEvent::ShowShortcuts => write!(f, "SHOW_SHORTCUTS"),
            TrayEvent::OpenShortcutsFolder => write!(f, "OPEN_SHORTCUTS_FOLDER"),
            TrayEvent::Quit => write!(f, "QUIT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order() {
        let labels: Vec<_> = TrayEvent::MENU.iter().map(|e| e.label()).collect();
        assert_eq!(labels, ["Show shortcuts", "Open Shortcuts Folder", "Quit"]);
    }

    #[test]
    fn test_event_serialization() {
        let json = serde_json::to_string(&TrayEvent::OpenShortcutsFolder).unwrap();
        assert_eq!(json, r#"{"type":"open_shortcuts_folder"}"#);
    }

    #[test]
    fn test_event_deserialization() {
        let event: TrayEvent = serde_json::from_str(r#"{"type":"quit"}"#).unwrap();
        assert_eq!(event, TrayEvent::Quit);
    }
}
