//! Configuration-directory storage.
//!
//! All gClient artifacts live in a single application-scoped directory
//! under the host configuration directory (`~/.config/gclient` on Linux).
//! [`ConfigStore`] provides the three operations the filter needs -- check
//! existence, read full text, write full text -- over `tokio::fs`.

use std::path::{Path, PathBuf};

use crate::defaults::APP_DIR;

/// Errors that can occur during configuration-directory I/O.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no configuration directory is available on this platform")]
    NoConfigDir,

    #[error("failed to create configuration directory: {0}")]
    CreateDir(std::io::Error),

    #[error("failed to read configuration file: {0}")]
    Read(std::io::Error),

    #[error("failed to write configuration file: {0}")]
    Write(std::io::Error),
}

/// Text-file storage scoped to one application configuration directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    /// Store rooted at the host configuration directory
    /// (`dirs::config_dir()` joined with the application scope).
    ///
    /// Fails only when the platform exposes no configuration directory at
    /// all.
    pub fn from_host_config() -> Result<Self, StoreError> {
        let base = dirs::config_dir().ok_or(StoreError::NoConfigDir)?;
        Ok(Self {
            root: base.join(APP_DIR),
        })
    }

    /// Store rooted at an explicit directory. Used by tests and by the CLI
    /// `--config-dir` override.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory every file name is resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Whether `name` exists in the store. I/O errors (e.g. an unreadable
    /// parent directory) are reported as "does not exist".
    pub async fn exists(&self, name: &str) -> bool {
        tokio::fs::try_exists(self.path_of(name))
            .await
            .unwrap_or(false)
    }

    /// Read the full text of `name`.
    pub async fn read_to_string(&self, name: &str) -> Result<String, StoreError> {
        tokio::fs::read_to_string(self.path_of(name))
            .await
            .map_err(StoreError::Read)
    }

    /// Write `contents` to `name`, replacing any existing file. The store
    /// root is created if it does not exist yet.
    pub async fn write(&self, name: &str, contents: &str) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(StoreError::CreateDir)?;

        tokio::fs::write(self.path_of(name), contents)
            .await
            .map_err(StoreError::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_does_not_exist() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::with_root(dir.path());
        assert!(!store.exists("nope.txt").await);
    }

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::with_root(dir.path());

        store.write("a.txt", "hello\nworld").await.unwrap();
        assert!(store.exists("a.txt").await);
        assert_eq!(store.read_to_string("a.txt").await.unwrap(), "hello\nworld");
    }

    #[tokio::test]
    async fn write_creates_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::with_root(dir.path().join("nested").join("scope"));

        store.write("a.txt", "x").await.unwrap();
        assert_eq!(store.read_to_string("a.txt").await.unwrap(), "x");
    }

    #[tokio::test]
    async fn read_of_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::with_root(dir.path());

        let err = store.read_to_string("missing.txt").await.unwrap_err();
        assert!(matches!(err, StoreError::Read(_)));
    }
}
