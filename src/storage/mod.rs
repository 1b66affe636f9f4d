//! Feed persistence.
//!
//! The feed document is the only persisted state. [`codec`] turns a
//! [`Channel`](crate::models::Channel) into RSS bytes and back; a
//! [`FeedStorage`] backend moves those bytes to and from durable storage.

pub mod codec;
pub mod local;

use async_trait::async_trait;

use crate::error::Result;

// Re-export for convenience
pub use local::LocalStorage;

/// Metadata about a storage write operation.
#[derive(Debug, Clone)]
pub struct WriteMetadata {
    /// Size of the written document
    pub bytes_written: usize,
    /// Where the document was written
    pub location: String,
}

/// Trait for feed storage backends.
#[async_trait]
pub trait FeedStorage: Send + Sync {
    /// Read the previously written feed, `None` if there is none yet.
    async fn read_feed(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the feed with `bytes`. Readers never observe a partial write.
    async fn write_feed(&self, bytes: &[u8]) -> Result<WriteMetadata>;

    /// Human-readable location of the feed.
    fn location(&self) -> String;
}
