//! Atomic file operations with ACID guarantees.
//!
//! Provides a thin layer for safe access to persisted files:
//! - **Atomicity**: updates are all-or-nothing via tmp file + atomic rename
//! - **Consistency**: syntax validation on load/save
//! - **Isolation**: file locking prevents concurrent modifications
//! - **Durability**: explicit fsync before rename

use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use tabsplit_core::{Result, SplitError};

/// On-disk serialization format of an [`AtomicFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// serde_json, pretty-printed.
    Json,
    /// toml, pretty-printed.
    Toml,
}

/// A handle to an atomically-written data file.
pub struct AtomicFile<T> {
    path: PathBuf,
    format: FileFormat,
    _phantom: PhantomData<T>,
}

impl<T> AtomicFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new handle. The file need not exist yet.
    pub fn new(path: PathBuf, format: FileFormat) -> Self {
        Self {
            path,
            format,
            _phantom: PhantomData,
        }
    }

    /// The underlying path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the file.
    ///
    /// Returns `None` if the file doesn't exist or is empty.
    pub fn load(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data = match self.format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };
        Ok(Some(data))
    }

    /// Serializes and saves data atomically (tmp file + fsync + rename).
    pub fn save(&self, data: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let serialized = match self.format {
            FileFormat::Json => serde_json::to_string_pretty(data)?,
            FileFormat::Toml => toml::to_string_pretty(data)?,
        };

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(serialized.as_bytes())?;

        // Ensure data is written to disk before the rename
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Performs a transactional update under an exclusive file lock.
    ///
    /// The update closure receives the current data (or `default_value` if
    /// the file doesn't exist yet); on `Ok(())` the result is written back
    /// atomically.
    pub fn update<F>(&self, default_value: T, f: F) -> Result<()>
    where
        F: FnOnce(&mut T) -> Result<()>,
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = self.load()?.unwrap_or(default_value);
        f(&mut data)?;
        self.save(&data)
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| SplitError::io("path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| SplitError::io("path has no file name"))?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }
}

/// A file lock guard that releases the lock when dropped.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    /// Acquires an exclusive lock next to `path`.
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| SplitError::data_access(format!("failed to acquire lock: {}", e)))?;
        }

        // Non-Unix: no lock; acceptable for a single-user desktop app.

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock is automatic when the file handle closes; removing the
        // lock file is best effort.
        let _ = fs::remove_file(&self.lock_path);
    }
}
