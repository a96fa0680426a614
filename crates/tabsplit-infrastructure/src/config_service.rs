//! Configuration loading.

use std::path::PathBuf;

use tabsplit_core::config::RootConfig;
use tabsplit_core::Result;

use crate::paths::TabsplitPaths;
use crate::storage::{AtomicFile, FileFormat};

/// Loads `config.toml`, creating it with defaults when missing.
pub struct ConfigService {
    file: AtomicFile<RootConfig>,
}

impl ConfigService {
    /// Creates a service at the default platform path
    /// (`~/.config/tabsplit/config.toml`).
    pub fn new() -> Result<Self> {
        let path = TabsplitPaths::config_file()
            .map_err(|e| tabsplit_core::SplitError::io(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a service at an explicit path (used by tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path, FileFormat::Toml),
        }
    }

    /// Loads the configuration. If no file exists yet, writes the defaults
    /// and returns them.
    pub fn load_or_init(&self) -> Result<RootConfig> {
        match self.file.load()? {
            Some(config) => Ok(config),
            None => {
                let config = RootConfig::default();
                self.file.save(&config)?;
                tracing::info!(path = %self.file.path().display(), "created default config");
                Ok(config)
            }
        }
    }
}
