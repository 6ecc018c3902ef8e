//! Media file storage.
//!
//! Stored paths are relative, `/`-separated keys such as
//! `dogimage/12/0f3c….jpg`. [`MediaStorage`] abstracts where they live;
//! [`LocalMediaStorage`] keeps them under a directory on disk.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid storage path '{0}'")]
    InvalidPath(String),

    #[error("Stored file not found: {0}")]
    NotFound(String),

    #[error("Storage I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Write `bytes` at `path`, replacing any existing file.
    async fn save(&self, path: &str, bytes: &[u8]) -> Result<(), StorageError>;

    /// Read the file at `path`.
    async fn read(&self, path: &str) -> Result<Vec<u8>, StorageError>;

    async fn exists(&self, path: &str) -> Result<bool, StorageError>;

    /// Delete the file at `path`.
    ///
    /// Returns `Ok(false)` when there was nothing to delete; any other
    /// failure is an error.
    async fn delete_if_exists(&self, path: &str) -> Result<bool, StorageError>;

    /// Public URL of the file at `path`.
    fn url(&self, path: &str) -> String;
}

/// Filesystem-backed storage rooted at a media directory.
#[derive(Debug, Clone)]
pub struct LocalMediaStorage {
    root: PathBuf,
    base_url: String,
}

impl LocalMediaStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a relative key under the root, refusing anything that could
    /// escape it.
    fn resolve(&self, path: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(path);
        let safe = !path.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !safe {
            return Err(StorageError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

fn io_error(path: &str, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.to_string(),
        source,
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn save(&self, path: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let full = self.resolve(path)?;
        if let Some(parent) = full.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(path, e))?;
        }
        tokio::fs::write(&full, bytes)
            .await
            .map_err(|e| io_error(path, e))
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        let full = self.resolve(path)?;
        match tokio::fs::read(&full).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StorageError::NotFound(path.to_string()))
            }
            Err(e) => Err(io_error(path, e)),
        }
    }

    async fn exists(&self, path: &str) -> Result<bool, StorageError> {
        let full = self.resolve(path)?;
        tokio::fs::try_exists(&full)
            .await
            .map_err(|e| io_error(path, e))
    }

    async fn delete_if_exists(&self, path: &str) -> Result<bool, StorageError> {
        let full = self.resolve(path)?;
        match tokio::fs::remove_file(&full).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error(path, e)),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn storage() -> (tempfile::TempDir, LocalMediaStorage) {
        let tmp = tempfile::TempDir::new().unwrap();
        let storage = LocalMediaStorage::new(tmp.path(), "/media/");
        (tmp, storage)
    }

    #[tokio::test]
    async fn save_creates_parent_directories() {
        let (tmp, storage) = storage();
        storage.save("dogimage/1/a.jpg", b"jpeg").await.unwrap();

        assert!(tmp.path().join("dogimage/1/a.jpg").is_file());
        assert_eq!(storage.read("dogimage/1/a.jpg").await.unwrap(), b"jpeg");
        assert!(storage.exists("dogimage/1/a.jpg").await.unwrap());
    }

    #[tokio::test]
    async fn delete_missing_file_is_not_an_error() {
        let (_tmp, storage) = storage();
        assert!(!storage.delete_if_exists("dogimage/1/nope.jpg").await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_file() {
        let (_tmp, storage) = storage();
        storage.save("litterimage/2/b.jpg", b"x").await.unwrap();

        assert!(storage.delete_if_exists("litterimage/2/b.jpg").await.unwrap());
        assert!(!storage.exists("litterimage/2/b.jpg").await.unwrap());
    }

    #[tokio::test]
    async fn delete_of_directory_propagates_error() {
        let (tmp, storage) = storage();
        std::fs::create_dir_all(tmp.path().join("articleimage/3")).unwrap();

        assert_matches!(
            storage.delete_if_exists("articleimage/3").await,
            Err(StorageError::Io { .. })
        );
    }

    #[tokio::test]
    async fn read_missing_file_is_not_found() {
        let (_tmp, storage) = storage();
        assert_matches!(
            storage.read("news_images/x.jpg").await,
            Err(StorageError::NotFound(_))
        );
    }

    #[tokio::test]
    async fn escaping_paths_are_rejected() {
        let (_tmp, storage) = storage();
        assert_matches!(
            storage.save("../outside.jpg", b"x").await,
            Err(StorageError::InvalidPath(_))
        );
        assert_matches!(
            storage.read("/etc/passwd").await,
            Err(StorageError::InvalidPath(_))
        );
        assert_matches!(storage.exists("").await, Err(StorageError::InvalidPath(_)));
    }

    #[test]
    fn url_joins_base() {
        let storage = LocalMediaStorage::new("media", "/media/");
        assert_eq!(storage.url("dogimage/1/a.jpg"), "/media/dogimage/1/a.jpg");
    }
}
