// src/pipeline/update.rs

//! Feed update pipeline: fetch, extract, merge, persist.

use scraper::Html;

use crate::error::Result;
use crate::models::Config;
use crate::services::{FeedMerger, LinkExtractor};
use crate::storage::{FeedStorage, codec};
use crate::utils::{Clock, http};

/// Summary of one update run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    /// Items appended in this run
    pub added: usize,
    /// Items in the feed after this run
    pub total: usize,
    /// Whether the run started without a usable previous feed
    pub first_run: bool,
    /// Size of the written feed document
    pub bytes_written: usize,
    /// Where the feed was written
    pub location: String,
}

/// Run one feed update.
///
/// A failed fetch aborts before the feed is read or written, leaving the
/// persisted feed untouched.
pub async fn run_update(
    config: &Config,
    client: &reqwest::Client,
    storage: &dyn FeedStorage,
    clock: &dyn Clock,
) -> Result<UpdateSummary> {
    let page_url = &config.source.page_url;
    log::info!("Fetching {page_url}");
    let html = http::fetch_page(client, page_url).await?;

    let previous = storage.read_feed().await?;

    // The parsed document is not Send; keep it out of any await.
    let (outcome, first_run) = {
        let channel = codec::load(previous.as_deref(), config, clock);
        let first_run = channel.items.is_empty();

        let document = Html::parse_document(&html);
        let extractor = LinkExtractor::new(&config.source)?;
        let mut candidates = extractor.extract(&document).peekable();
        if candidates.peek().is_none() {
            log::warn!("No issue links found on {page_url}");
        }

        let merger = FeedMerger::new(config, clock);
        (merger.merge(channel, candidates), first_run)
    };

    let bytes = codec::serialize(&outcome.channel)?;
    let meta = storage.write_feed(&bytes).await?;

    log::info!("{} new entries saved to {}", outcome.added, meta.location);
    log::debug!("Feed document is {} bytes", meta.bytes_written);

    Ok(UpdateSummary {
        added: outcome.added,
        total: outcome.channel.items.len(),
        first_run,
        bytes_written: meta.bytes_written,
        location: meta.location,
    })
}
