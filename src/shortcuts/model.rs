//! Shortcut data types

use serde::{Deserialize, Serialize};

/// Category looked up alongside every application
pub const SYSTEM_CATEGORY: &str = "System";

/// One key combination and what it does
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutEntry {
    /// Key combination as shown to the user, e.g. `Ctrl+Shift+T`
    pub keys: String,
    pub description: String,
}

impl ShortcutEntry {
    pub fn new(keys: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            keys: keys.into(),
            description: description.into(),
        }
    }
}

/// Named group of shortcuts for one application (or `System`)
///
/// The name is compared case-sensitively with the resolved application
/// name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationCategory {
    pub name: String,
    pub shortcuts: Vec<ShortcutEntry>,
}

/// On-disk shape of a shortcut definition file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct CategoryFile {
    /// Falls back to the file stem when absent
    pub name: Option<String>,
    #[serde(default)]
    pub shortcuts: Vec<ShortcutEntry>,
}
