//! Data models for the feed crawler.

pub mod candidate;
pub mod config;
pub mod feed;

pub use candidate::{Block, Candidate};
pub use config::{Config, CrawlerConfig, FeedConfig, SourceConfig};
pub use feed::{Channel, ChannelImage, FeedItem, normalize_link};
