// src/pipeline/info.rs

//! Feed status report.

use crate::error::Result;
use crate::models::Config;
use crate::storage::{FeedStorage, codec};
use crate::utils::Clock;

/// What the persisted feed currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedInfo {
    pub location: String,
    pub exists: bool,
    pub item_count: usize,
    pub last_build_date: Option<String>,
    pub latest_link: Option<String>,
}

/// Inspect the persisted feed without touching the network.
pub async fn run_info(
    config: &Config,
    storage: &dyn FeedStorage,
    clock: &dyn Clock,
) -> Result<FeedInfo> {
    let bytes = storage.read_feed().await?;
    let exists = bytes.is_some();
    let channel = codec::load(bytes.as_deref(), config, clock);

    let info = FeedInfo {
        location: storage.location(),
        exists,
        item_count: channel.items.len(),
        last_build_date: channel.last_build_date.clone(),
        latest_link: channel.newest_first().next().map(|item| item.link.clone()),
    };

    log::info!("Feed file: {}", info.location);
    if !info.exists {
        log::info!("No feed written yet.");
        return Ok(info);
    }
    log::info!("Items: {}", info.item_count);
    log::info!(
        "Last updated: {}",
        info.last_build_date.as_deref().unwrap_or("never")
    );
    if let Some(link) = &info.latest_link {
        log::info!("Latest issue: {link}");
    }

    Ok(info)
}
