//! Per-user shortcut store
//!
//! The store is a directory of definition files. It is seeded once from
//! the bundled defaults and re-read on every lookup, so edits made in the
//! file manager show up on the next overlay.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::defaults::BundledFile;
use super::model::{ShortcutEntry, SYSTEM_CATEGORY};
use super::reader::{definition_files, read_category};
use super::StoreError;

/// Lookup of shortcut entries by category name
#[derive(Debug, Clone)]
pub struct ShortcutStore {
    dir: PathBuf,
}

impl ShortcutStore {
    /// Open the store rooted at `dir`; nothing is read until `find`
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the definition files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Populate `dir` with the bundled files if it does not exist yet.
    ///
    /// Returns `true` when the directory was created. An existing
    /// directory is never touched, even if the bundled files changed.
    pub fn seed(dir: &Path, bundled: &[BundledFile]) -> Result<bool, StoreError> {
        if dir.exists() {
            return Ok(false);
        }

        let staging = staging_path(dir);

        if staging.exists() {
            warn!(?staging, "removing leftover staging directory");
            std::fs::remove_dir_all(&staging).map_err(io_err(&staging))?;
        }
        std::fs::create_dir_all(&staging).map_err(io_err(&staging))?;

        for file in bundled {
            let path = staging.join(file.file_name);
            std::fs::write(&path, file.contents).map_err(io_err(&path))?;
        }

        std::fs::rename(&staging, dir).map_err(io_err(dir))?;
        info!(?dir, files = bundled.len(), "seeded default shortcuts");

        Ok(true)
    }

    /// Entries of every category named exactly `name`, in file order.
    ///
    /// Unknown names give an empty list.
    pub fn find(&self, name: &str) -> Result<Vec<ShortcutEntry>, StoreError> {
        let mut entries = Vec::new();
        for path in definition_files(&self.dir)? {
            let category = read_category(&path)?;
            if category.name == name {
                entries.extend(category.shortcuts);
            }
        }
        Ok(entries)
    }

    /// Entries of the `System` category
    pub fn system(&self) -> Result<Vec<ShortcutEntry>, StoreError> {
        self.find(SYSTEM_CATEGORY)
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError {
    let path = path.to_owned();
    move |source| StoreError::Io { path, source }
}

/// Sibling directory the defaults are written to before the rename
fn staging_path(dir: &Path) -> PathBuf {
    let mut name = dir
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".seeding");
    dir.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILES: &[BundledFile] = &[
        BundledFile {
            file_name: "system.toml",
            contents: "name = \"System\"\n\n[[shortcuts]]\nkeys = \"Super\"\ndescription = \"Overview\"\n",
        },
        BundledFile {
            file_name: "firefox.toml",
            contents: "name = \"Firefox\"\n\n[[shortcuts]]\nkeys = \"Ctrl+T\"\ndescription = \"New tab\"\n",
        },
    ];

    fn seeded() -> (tempfile::TempDir, ShortcutStore) {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("quickeys").join("shortcuts");
        assert!(ShortcutStore::seed(&dir, FILES).unwrap());
        (tmp, ShortcutStore::open(dir))
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_seed_copies_exactly_the_bundled_files() {
        let (_tmp, store) = seeded();
        assert_eq!(file_names(store.dir()), ["firefox.toml", "system.toml"]);
        assert!(!staging_path(store.dir()).exists());
    }

    #[test]
    fn test_seed_is_not_repeated() {
        let (_tmp, store) = seeded();
        let changed = [BundledFile {
            file_name: "extra.toml",
            contents: "name = \"Extra\"\n",
        }];

        assert!(!ShortcutStore::seed(store.dir(), &changed).unwrap());
        assert_eq!(file_names(store.dir()), ["firefox.toml", "system.toml"]);
    }

    #[test]
    fn test_system_lookup() {
        let (_tmp, store) = seeded();
        assert_eq!(
            store.system().unwrap(),
            vec![ShortcutEntry::new("Super", "Overview")]
        );
        assert_eq!(store.find("System").unwrap(), store.system().unwrap());
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let (_tmp, store) = seeded();
        assert_eq!(store.find("Firefox").unwrap().len(), 1);
        assert!(store.find("firefox").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_name_is_empty() {
        let (_tmp, store) = seeded();
        assert!(store.find("Unknown App").unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ShortcutStore::open(tmp.path().join("absent"));
        assert!(store.find("System").unwrap().is_empty());
    }

    #[test]
    fn test_same_name_concatenates_in_file_order() {
        let (_tmp, store) = seeded();
        std::fs::write(
            store.dir().join("firefox-extra.toml"),
            "name = \"Firefox\"\n\n[[shortcuts]]\nkeys = \"Ctrl+W\"\ndescription = \"Close tab\"\n",
        )
        .unwrap();

        let keys: Vec<_> = store
            .find("Firefox")
            .unwrap()
            .into_iter()
            .map(|e| e.keys)
            .collect();
        assert_eq!(keys, ["Ctrl+W", "Ctrl+T"]);
    }

    #[test]
    fn test_edits_apply_on_next_lookup() {
        let (_tmp, store) = seeded();
        std::fs::write(
            store.dir().join("firefox.toml"),
            "name = \"Firefox\"\n\n[[shortcuts]]\nkeys = \"F5\"\ndescription = \"Reload\"\n",
        )
        .unwrap();

        assert_eq!(store.find("Firefox").unwrap()[0].keys, "F5");
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let (_tmp, store) = seeded();
        let broken = store.dir().join("broken.toml");
        std::fs::write(&broken, "name = ").unwrap();

        match store.find("Firefox") {
            Err(StoreError::Parse { path, .. }) => assert_eq!(path, broken),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
