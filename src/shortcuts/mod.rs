//! Shortcuts module: per-application shortcut definitions
//!
//! Definitions live in TOML files under the user's config directory,
//! seeded from defaults compiled into the binary.

mod defaults;
mod model;
mod reader;
mod store;

use std::path::PathBuf;

pub use defaults::BUNDLED;
pub use model::{ShortcutEntry, SYSTEM_CATEGORY};
pub use store::ShortcutStore;

/// Errors reading or seeding the shortcut store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed shortcut file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
