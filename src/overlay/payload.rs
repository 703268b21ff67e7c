//! What the overlay process is asked to show
//!
//! The payload is written as one JSON document to the overlay process's
//! stdin, which reads it to EOF.

use serde::{Deserialize, Serialize};

use crate::shortcuts::ShortcutEntry;

/// Contents of one overlay window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OverlayPayload {
    /// Shortcuts for the focused application plus the system ones
    Shortcuts {
        application: String,
        shortcuts: Vec<ShortcutEntry>,
        system: Vec<ShortcutEntry>,
    },

    /// Explanation shown when the shortcuts could not be gathered
    Message { title: String, message: String },
}

impl OverlayPayload {
    pub fn message(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Message {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Window heading
    pub fn title(&self) -> &str {
        match self {
            OverlayPayload::Shortcuts { application, .. } => application,
            OverlayPayload::Message { title, .. } => title,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
