//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Where issues are published and how their links look
    #[serde(default)]
    pub source: SourceConfig,

    /// Feed file location and fixed channel metadata
    #[serde(default)]
    pub feed: FeedConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        if self.source.topic_marker.is_empty() {
            return Err(AppError::validation("source.topic_marker is empty"));
        }
        if self.source.document_extension.is_empty() {
            return Err(AppError::validation("source.document_extension is empty"));
        }
        for (name, value) in [
            ("source.page_url", &self.source.page_url),
            ("source.origin", &self.source.origin),
        ] {
            let parsed = Url::parse(value)
                .map_err(|e| AppError::validation(format!("{name} is not a valid URL: {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(AppError::validation(format!(
                    "{name} must use http or https"
                )));
            }
        }
        if self.feed.output_path.as_os_str().is_empty() {
            return Err(AppError::validation("feed.output_path is empty"));
        }
        if self.feed.language.trim().is_empty() {
            return Err(AppError::validation("feed.language is empty"));
        }
        if StrftimeItems::new(&self.feed.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::validation(format!(
                "feed.date_format {:?} is not a valid strftime pattern",
                self.feed.date_format
            )));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Source page settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Page listing the published issues
    #[serde(default = "defaults::page_url")]
    pub page_url: String,

    /// Origin prefixed to site-relative hrefs
    #[serde(default = "defaults::origin")]
    pub origin: String,

    /// Substring a document href must contain (case-sensitive)
    #[serde(default = "defaults::topic_marker")]
    pub topic_marker: String,

    /// Suffix a document href must end with
    #[serde(default = "defaults::document_extension")]
    pub document_extension: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            page_url: defaults::page_url(),
            origin: defaults::origin(),
            topic_marker: defaults::topic_marker(),
            document_extension: defaults::document_extension(),
        }
    }
}

/// Feed file and channel metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Path of the RSS document
    #[serde(default = "defaults::output_path")]
    pub output_path: PathBuf,

    /// Channel title
    #[serde(default = "defaults::title")]
    pub title: String,

    /// Channel description
    #[serde(default = "defaults::description")]
    pub description: String,

    /// Copyright holder; the current year is appended on first creation
    #[serde(default = "defaults::copyright_holder")]
    pub copyright_holder: String,

    /// Channel language tag
    #[serde(default = "defaults::language")]
    pub language: String,

    /// Title given to every new item
    #[serde(default = "defaults::item_title")]
    pub item_title: String,

    /// Title of the channel image
    #[serde(default = "defaults::image_title")]
    pub image_title: String,

    /// `chrono` format string for `pubDate` and `lastBuildDate`
    #[serde(default = "defaults::date_format")]
    pub date_format: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            output_path: defaults::output_path(),
            title: defaults::title(),
            description: defaults::description(),
            copyright_holder: defaults::copyright_holder(),
            language: defaults::language(),
            item_title: defaults::item_title(),
            image_title: defaults::image_title(),
            date_format: defaults::date_format(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    // Crawler defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; GS-Crawler/1.0; +https://goslar.app)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Source defaults
    pub fn page_url() -> String {
        "https://www.goslar.de/leben-in-goslar/senioren/seniorenzeitung".into()
    }
    pub fn origin() -> String {
        "https://goslar.de".into()
    }
    pub fn topic_marker() -> String {
        "seniorenzeitung".into()
    }
    pub fn document_extension() -> String {
        ".pdf".into()
    }

    // Feed defaults
    pub fn output_path() -> PathBuf {
        PathBuf::from("output/001_senioren_feed.xml")
    }
    pub fn title() -> String {
        "Seniorenzeitung der Stadt Goslar".into()
    }
    pub fn description() -> String {
        "RSS Feed der Seniorenzeitung der Stadt Goslar".into()
    }
    pub fn copyright_holder() -> String {
        "Stadt Goslar".into()
    }
    pub fn language() -> String {
        "de-DE".into()
    }
    pub fn item_title() -> String {
        "Eine neue Ausgabe der Seniorenzeitung ist erschienen!".into()
    }
    pub fn image_title() -> String {
        "Neuste Ausgabe".into()
    }
    pub fn date_format() -> String {
        "%Y-%m-%d %H:%M".into()
    }
}
