//! Atomic file-backed key-value store.
//!
//! Provides a thin layer mirroring origin-scoped key-value storage: one
//! file per string key under a store directory, written atomically.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use taskdeck_core::error::{Result, TaskdeckError};

/// A directory of string keys mapped to string values.
///
/// Writes provide:
/// - **Atomicity**: tmp file + atomic rename, so readers never observe a
///   partial value
/// - **Isolation**: an exclusive file lock per key during writes
/// - **Durability**: explicit fsync before rename
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store over the given directory.
    ///
    /// The directory is created lazily on the first write.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Returns the directory backing this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(String))`: Key exists, value read
    /// - `Ok(None)`: Key has never been written (or was removed)
    /// - `Err`: The file exists but could not be read
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path)?;
        Ok(Some(value))
    }

    /// Writes `value` under `key` atomically.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let path = self.key_path(key);
        let _lock = FileLock::acquire(&path)?;

        // Write to a temporary file in the same directory, then rename.
        let tmp_path = self.dir.join(format!(".{}.tmp", key));
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(value.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    /// Removes `key` from the store. Missing keys are not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

/// A file lock guard that automatically releases the lock when dropped.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    /// Acquires an exclusive lock next to the given key file.
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

        file.lock_exclusive()
            .map_err(|e| TaskdeckError::io(format!("Failed to acquire lock: {}", e)))?;

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock is automatic when the file handle is dropped.
        let _ = fs::remove_file(&self.lock_path);
    }
}
