//! Reads shortcut definition files from a directory

use std::path::{Path, PathBuf};

use tracing::debug;

use super::model::{ApplicationCategory, CategoryFile};
use super::StoreError;

/// File extension of shortcut definition files
const EXTENSION: &str = "toml";

/// List definition files in `dir`, sorted by file name.
///
/// A missing directory yields no files.
pub(super) fn definition_files(dir: &Path) -> Result<Vec<PathBuf>, StoreError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(StoreError::Io {
                path: dir.to_owned(),
                source,
            })
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| StoreError::Io {
            path: dir.to_owned(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == EXTENSION) {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

/// Parse one definition file
pub(super) fn read_category(path: &Path) -> Result<ApplicationCategory, StoreError> {
    let text = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_owned(),
        source,
    })?;
    let file = parse_category(&text).map_err(|source| StoreError::Parse {
        path: path.to_owned(),
        source,
    })?;

    let name = match file.name {
        Some(name) => name,
        None => path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    debug!(?path, %name, count = file.shortcuts.len(), "read shortcut file");

    Ok(ApplicationCategory {
        name,
        shortcuts: file.shortcuts,
    })
}

fn parse_category(text: &str) -> Result<CategoryFile, toml::de::Error> {
    toml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        let file = parse_category(
            r#"
            name = "Firefox"

            [[shortcuts]]
            keys = "Ctrl+T"
            description = "Open a new tab"
            "#,
        )
        .unwrap();
        assert_eq!(file.name.as_deref(), Some("Firefox"));
        assert_eq!(file.shortcuts.len(), 1);
        assert_eq!(file.shortcuts[0].keys, "Ctrl+T");
    }

    #[test]
    fn test_name_defaults_to_file_stem() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("Gimp.toml");
        std::fs::write(&path, "[[shortcuts]]\nkeys = \"X\"\ndescription = \"Swap colors\"\n").unwrap();

        let category = read_category(&path).unwrap();
        assert_eq!(category.name, "Gimp");
        assert_eq!(category.shortcuts.len(), 1);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(parse_category("title = \"Firefox\"").is_err());
    }

    #[test]
    fn test_definition_files_filters_and_sorts() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("b.toml"), "").unwrap();
        std::fs::write(tmp.path().join("a.toml"), "").unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "").unwrap();
        std::fs::create_dir(tmp.path().join("nested.toml")).unwrap();

        let files = definition_files(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.toml", "b.toml"]);
    }

    #[test]
    fn test_missing_directory_has_no_files() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(definition_files(&tmp.path().join("absent")).unwrap().is_empty());
    }
}
