// src/services/merger.rs

//! Feed merger service.
//!
//! Appends the issues that are new since the last run to the persisted
//! channel. Candidates arrive newest-first, so the first link that is already
//! recorded marks where the previous run left off; nothing after it is
//! considered.

use std::fmt::Write;

use crate::models::{Candidate, Channel, ChannelImage, Config, FeedConfig, FeedItem, normalize_link};
use crate::utils::{Clock, sanitize_description};

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Result of merging one scrape into a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub channel: Channel,
    /// Number of items appended
    pub added: usize,
}

/// Service for merging candidates into a channel.
pub struct FeedMerger<'a> {
    feed: &'a FeedConfig,
    page_url: &'a str,
    clock: &'a dyn Clock,
}

impl<'a> FeedMerger<'a> {
    pub fn new(config: &'a Config, clock: &'a dyn Clock) -> Self {
        Self {
            feed: &config.feed,
            page_url: &config.source.page_url,
            clock,
        }
    }

    /// Merge candidates (newest-first) into the channel.
    pub fn merge<I>(&self, mut channel: Channel, candidates: I) -> MergeOutcome
    where
        I: IntoIterator<Item = Candidate>,
    {
        let mut first_run = channel.items.is_empty();
        let mut known = channel.known_links();
        let mut added = 0;

        for candidate in candidates {
            let key = normalize_link(&candidate.link);
            if known.contains(&key) {
                log::debug!("Reached already recorded issue {}, stopping", candidate.link);
                break;
            }
            let link = candidate.link.trim().to_string();

            let stamp = self.timestamp();

            let image = if first_run {
                channel.image.insert(ChannelImage::default())
            } else {
                channel.image.get_or_insert_with(ChannelImage::default)
            };
            if let Some(url) = candidate.image_url {
                image.url = url;
                image.title = self.feed.image_title.clone();
                image.link = self.page_url.to_string();
            }
            channel.last_build_date = Some(stamp.clone());

            log::info!("New issue: {link}");
            channel.append(FeedItem {
                link,
                title: self.feed.item_title.clone(),
                description: candidate
                    .description
                    .map(|d| sanitize_description(&d))
                    .unwrap_or_default(),
                pub_date: stamp,
            });

            known.insert(key);
            first_run = false;
            added += 1;
        }

        MergeOutcome { channel, added }
    }

    /// Current time in the configured format, or the default format if the
    /// configured one does not render.
    fn timestamp(&self) -> String {
        let now = self.clock.now();
        let mut stamp = String::new();
        if write!(stamp, "{}", now.format(&self.feed.date_format)).is_err() {
            log::warn!(
                "Invalid date format {:?}, using {FALLBACK_DATE_FORMAT}",
                self.feed.date_format
            );
            stamp = now.format(FALLBACK_DATE_FORMAT).to_string();
        }
        stamp
    }
}
