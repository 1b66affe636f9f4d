//! Pipeline entry points for crawler operations.
//!
//! - `run_update`: Fetch the source page and append new issues to the feed
//! - `run_validate`: Check the configuration
//! - `run_info`: Report what the persisted feed holds

pub mod info;
pub mod update;
pub mod validate;

pub use info::{FeedInfo, run_info};
pub use update::{UpdateSummary, run_update};
pub use validate::run_validate;
