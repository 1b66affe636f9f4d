//! Extraction results for the current scrape.

/// A possibly-new issue found on the source page.
///
/// Never persisted; the merger turns it into a [`FeedItem`](super::FeedItem)
/// once the link is confirmed new.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    /// Absolute document URL
    pub link: String,

    /// Sanitized description text, if the anchor carried one
    pub description: Option<String>,

    /// Absolute thumbnail URL, if the anchor carried one
    pub image_url: Option<String>,
}

impl Candidate {
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// Classification of a child node inside a document anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Thumbnail wrapper; `src` of the nested `<img>`, if any
    Image { src: Option<String> },

    /// Descriptive text, already sanitized
    Description { text: String },

    Other,
}
