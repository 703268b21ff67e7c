//! Shortcut files shipped with the binary

/// A default definition file copied into the user's shortcuts directory
#[derive(Debug, Clone, Copy)]
pub struct BundledFile {
    pub file_name: &'static str,
    pub contents: &'static str,
}

macro_rules! bundled {
    ($($name:literal),* $(,)?) => {
        &[$(BundledFile {
            file_name: $name,
            contents: include_str!(concat!("../../data/shortcuts/", $name)),
        }),*]
    };
}

/// Defaults seeded on first run
pub const BUNDLED: &[BundledFile] = bundled![
    "code.toml",
    "firefox.toml",
    "gnome-terminal.toml",
    "jetbrains.toml",
    "pinta.toml",
    "system.toml",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::model::SYSTEM_CATEGORY;
    use crate::shortcuts::ShortcutStore;

    #[test]
    fn test_bundled_files_parse() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("shortcuts");
        ShortcutStore::seed(&dir, BUNDLED).unwrap();

        let store = ShortcutStore::open(&dir);
        for name in [SYSTEM_CATEGORY, "Firefox", "Jetbrains", "Pinta", "Code"] {
            assert!(!store.find(name).unwrap().is_empty(), "{name} has no shortcuts");
        }
    }
}
