//! Services for extracting and merging feed entries.

pub mod extractor;
pub mod merger;

pub use extractor::LinkExtractor;
pub use merger::{FeedMerger, MergeOutcome};
