//! Local filesystem storage implementation.
//!
//! Keeps the feed as a single file. Writes go to a sibling temp file that is
//! then renamed over the target, so a failed run never leaves a truncated
//! feed behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::storage::{FeedStorage, WriteMetadata};

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    feed_path: PathBuf,
}

impl LocalStorage {
    /// Create a LocalStorage for the feed file at the given path.
    pub fn new(feed_path: impl Into<PathBuf>) -> Self {
        Self {
            feed_path: feed_path.into(),
        }
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
        Self::ensure_dir(path).await?;

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        file.sync_all().await?;
        drop(file);

        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }

    /// Read bytes, returning None if file doesn't exist.
    async fn read_bytes(path: &Path) -> Result<Option<Vec<u8>>> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

#[async_trait]
impl FeedStorage for LocalStorage {
    async fn read_feed(&self) -> Result<Option<Vec<u8>>> {
        let bytes = Self::read_bytes(&self.feed_path).await?;
        if bytes.is_none() {
            log::info!("No feed found at {}", self.feed_path.display());
        }
        Ok(bytes)
    }

    async fn write_feed(&self, bytes: &[u8]) -> Result<WriteMetadata> {
        Self::write_bytes(&self.feed_path, bytes).await?;
        log::debug!(
            "Wrote {} bytes to {}",
            bytes.len(),
            self.feed_path.display()
        );

        Ok(WriteMetadata {
            bytes_written: bytes.len(),
            location: self.location(),
        })
    }

    fn location(&self) -> String {
        self.feed_path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_and_read() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path().join("feed.xml"));

        let meta = storage.write_feed(b"<rss/>").await.unwrap();
        assert_eq!(meta.bytes_written, 6);

        let data = storage.read_feed().await.unwrap();
        assert_eq!(data, Some(b"<rss/>".to_vec()));
    }

    #[tokio::test]
    async fn test_read_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path().join("nope.xml"));

        let data = storage.read_feed().await.unwrap();
        assert!(data.is_none());
    }

    #[tokio::test]
    async fn test_creates_missing_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("output").join("nested").join("feed.xml");
        let storage = LocalStorage::new(&path);

        storage.write_feed(b"<rss/>").await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_overwrite_leaves_no_temp_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("feed.xml");
        let storage = LocalStorage::new(&path);

        storage.write_feed(b"first").await.unwrap();
        storage.write_feed(b"second").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
        assert!(!path.with_extension("tmp").exists());
    }
}
