// src/pipeline/validate.rs

//! Configuration check for the `validate` command.

use crate::error::Result;
use crate::models::Config;

/// Validate configuration and report the effective settings.
pub fn run_validate(config: &Config) -> Result<()> {
    log::info!("Validating configuration...");

    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {e}");
        return Err(e);
    }

    log::info!("Config OK");
    log::info!("    Source page: {}", config.source.page_url);
    log::info!("    Origin: {}", config.source.origin);
    log::info!(
        "    Matching: *{}* ending in {}",
        config.source.topic_marker,
        config.source.document_extension
    );
    log::info!("    Feed file: {}", config.feed.output_path.display());
    log::info!("    Timeout: {}s", config.crawler.timeout_secs);
    Ok(())
}
