//! Utility functions and helpers.

pub mod clock;
pub mod http;
pub mod text;
pub mod url;

pub use clock::{Clock, FixedClock, SystemClock};
pub use text::sanitize_description;
pub use url::resolve;
