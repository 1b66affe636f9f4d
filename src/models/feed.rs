//! Feed data structures.
//!
//! These map one-to-one onto the RSS 2.0 `channel` / `item` elements that
//! make up the persisted feed document.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::FeedConfig;

/// The feed's shared envelope plus its ordered items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub link: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub copyright: String,

    #[serde(default)]
    pub language: String,

    /// Set whenever a run appends at least one item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_build_date: Option<String>,

    /// Thumbnail of the most recently discovered issue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ChannelImage>,

    /// Items in discovery order (oldest first)
    #[serde(rename = "item", default)]
    pub items: Vec<FeedItem>,
}

impl Channel {
    /// Build the first-run channel from configured metadata.
    pub fn fresh(feed: &FeedConfig, page_url: &str, year: i32) -> Self {
        Self {
            title: feed.title.clone(),
            link: page_url.to_string(),
            description: feed.description.clone(),
            copyright: format!("{} {}", feed.copyright_holder, year),
            language: feed.language.clone(),
            last_build_date: None,
            image: None,
            items: Vec::new(),
        }
    }

    /// Normalized links of every recorded item.
    pub fn known_links(&self) -> HashSet<String> {
        self.items.iter().map(|item| normalize_link(&item.link)).collect()
    }

    /// Append an item to the end of the feed.
    pub fn append(&mut self, item: FeedItem) {
        self.items.push(item);
    }

    /// Items newest-first, the order feed readers display them in.
    pub fn newest_first(&self) -> impl Iterator<Item = &FeedItem> {
        self.items.iter().rev()
    }
}

/// Channel-level thumbnail.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelImage {
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub link: String,
}

/// One recorded issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedItem {
    /// Absolute URL of the document, unique within the feed
    #[serde(default)]
    pub link: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// When the item was added to the feed
    #[serde(rename = "pubDate", default)]
    pub pub_date: String,
}

/// Strip every whitespace character from a link.
pub fn normalize_link(link: &str) -> String {
    link.chars().filter(|c| !c.is_whitespace()).collect()
}
