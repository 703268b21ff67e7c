//! Configuration loading and management

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Directory name under the user config dir
pub const APPLICATION_NAME: &str = "quickeys";

/// D-Bus id of the tray item
pub const APPLICATION_ID: &str = "net.brunopaz.quickeys";

/// Icon theme name used for the tray item
const DEFAULT_ICON_NAME: &str = "input-keyboard";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Per-user config directory (`$XDG_CONFIG_HOME/quickeys`)
    pub config_dir: PathBuf,

    /// One shortcut definition file per application category
    pub shortcuts_dir: PathBuf,

    /// Optional user name-remapping rules
    pub rules_path: PathBuf,

    /// Icon theme name shown in the status area
    pub icon_name: String,
}

impl Config {
    /// Load configuration from environment and defaults
    pub fn load() -> Result<Self> {
        Self::from_env(
            std::env::var("XDG_CONFIG_HOME").ok(),
            std::env::var("HOME").ok(),
        )
    }

    /// Resolve the config directory the way the XDG base directory spec
    /// does: an absolute `XDG_CONFIG_HOME` wins, otherwise `~/.config`.
    fn from_env(xdg_config_home: Option<String>, home: Option<String>) -> Result<Self> {
        let base = match xdg_config_home.map(PathBuf::from) {
            Some(dir) if dir.is_absolute() => dir,
            _ => match home {
                Some(home) if !home.is_empty() => PathBuf::from(home).join(".config"),
                _ => bail!("neither XDG_CONFIG_HOME nor HOME is set"),
            },
        };

        let config_dir = base.join(APPLICATION_NAME);

        Ok(Self {
            shortcuts_dir: config_dir.join("shortcuts"),
            rules_path: config_dir.join("rules.toml"),
            config_dir,
            icon_name: DEFAULT_ICON_NAME.to_string(),
        })
    }

    /// Ensure the config directory exists
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)
            .with_context(|| format!("failed to create {}", self.config_dir.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xdg_config_home_wins() {
        let config = Config::from_env(Some("/xdg".into()), Some("/home/me".into())).unwrap();
        assert_eq!(config.config_dir, PathBuf::from("/xdg/quickeys"));
        assert_eq!(config.shortcuts_dir, PathBuf::from("/xdg/quickeys/shortcuts"));
        assert_eq!(config.rules_path, PathBuf::from("/xdg/quickeys/rules.toml"));
    }

    #[test]
    fn test_relative_xdg_falls_back_to_home() {
        let config = Config::from_env(Some("relative".into()), Some("/home/me".into())).unwrap();
        assert_eq!(config.config_dir, PathBuf::from("/home/me/.config/quickeys"));
    }

    #[test]
    fn test_missing_env_is_an_error() {
        assert!(Config::from_env(None, None).is_err());
    }

    #[test]
    fn test_ensure_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let config =
            Config::from_env(Some(tmp.path().to_string_lossy().into_owned()), None).unwrap();
        config.ensure_dirs().unwrap();
        assert!(config.config_dir.is_dir());
        assert!(!config.shortcuts_dir.exists());
    }
}
