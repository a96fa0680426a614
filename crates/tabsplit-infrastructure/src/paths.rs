//! Unified path management for tabsplit data files.
//!
//! All tabsplit configuration and participant data live under the platform
//! config directory (e.g. `~/.config/tabsplit/` on Linux).
//!
//! ```text
//! ~/.config/tabsplit/
//! ├── config.toml          # Application configuration
//! └── participants.json    # Persisted participant set
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for tabsplit.
pub struct TabsplitPaths;

impl TabsplitPaths {
    /// Returns the tabsplit configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/tabsplit/`)
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("tabsplit"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Path to the persisted participant set.
    pub fn participants_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("participants.json"))
    }
}
