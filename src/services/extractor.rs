// src/services/extractor.rs

//! Link extractor service.
//!
//! Finds the issue documents linked from the source page and reads the
//! thumbnail and description blocks nested inside each link.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{Block, Candidate, SourceConfig};
use crate::utils::{resolve, sanitize_description};

/// Service for extracting issue candidates from a parsed page.
pub struct LinkExtractor<'a> {
    source: &'a SourceConfig,
    anchor_sel: Selector,
    image_sel: Selector,
}

impl<'a> LinkExtractor<'a> {
    /// Create a new extractor for the given source.
    pub fn new(source: &'a SourceConfig) -> Result<Self> {
        Ok(Self {
            source,
            anchor_sel: Self::parse_selector("a[href]")?,
            image_sel: Self::parse_selector("img[src]")?,
        })
    }

    /// Candidates in document order.
    ///
    /// The iterator borrows the document and walks it lazily; anchors that
    /// do not point at an issue document are skipped.
    pub fn extract<'d>(&'d self, document: &'d Html) -> impl Iterator<Item = Candidate> + 'd {
        document
            .select(&self.anchor_sel)
            .filter_map(move |anchor| self.candidate(anchor))
    }

    /// Whether an href points at an issue of this periodical.
    pub fn qualifies(&self, href: &str) -> bool {
        href.ends_with(&self.source.document_extension) && href.contains(&self.source.topic_marker)
    }

    fn candidate(&self, anchor: ElementRef<'_>) -> Option<Candidate> {
        let href = anchor.value().attr("href")?.trim();
        if !self.qualifies(href) {
            return None;
        }

        let mut candidate = Candidate::new(resolve(&self.source.origin, href));

        for child in anchor.children().filter_map(ElementRef::wrap) {
            match self.classify(child) {
                Block::Image { src: Some(src) } => {
                    candidate.image_url = Some(resolve(&self.source.origin, &src));
                }
                Block::Image { src: None } => {
                    log::debug!("Image block without <img src> in {}", candidate.link);
                }
                Block::Description { text } => candidate.description = Some(text),
                Block::Other => {}
            }
        }

        Some(candidate)
    }

    /// Classify a child of a document anchor by its `class` attribute.
    pub fn classify(&self, node: ElementRef<'_>) -> Block {
        let class = node.value().attr("class").unwrap_or("");

        if class.contains("image") {
            let src = node
                .select(&self.image_sel)
                .next()
                .and_then(|img| img.value().attr("src"))
                .map(str::to_string);
            Block::Image { src }
        } else if class.contains("description") {
            let raw: String = node.text().collect();
            Block::Description {
                text: sanitize_description(&raw),
            }
        } else {
            Block::Other
        }
    }

    fn parse_selector(s: &str) -> Result<Selector> {
        Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <nav><a href="/impressum">Impressum</a></nav>
          <div class="downloads">
            <a href="/portal/seniorenzeitung/2025-2.pdf">
              <div class="image"><img src="/thumbs/2025-2.jpg" alt=""></div>
              <div class="description">Seniorenzeitung 2/2025 (PDF)</div>
            </a>
            <a href="/portal/seniorenzeitung/2025-1.pdf">
              <div class="description">Frühjahr-Ausgabe</div>
            </a>
            <a href="/portal/amtsblatt/2025-1.pdf">Amtsblatt</a>
            <a href="/portal/seniorenzeitung/archiv.html">Archiv</a>
            <a href="/portal/Seniorenzeitung/2024-4.pdf">Großschreibung</a>
          </div>
        </body></html>
    "#;

    fn extract(html: &str) -> Vec<Candidate> {
        let source = SourceConfig::default();
        let extractor = LinkExtractor::new(&source).unwrap();
        let document = Html::parse_document(html);
        extractor.extract(&document).collect()
    }

    #[test]
    fn test_selects_only_matching_documents() {
        let links: Vec<_> = extract(PAGE).into_iter().map(|c| c.link).collect();

        assert_eq!(
            links,
            vec![
                "https://goslar.de/portal/seniorenzeitung/2025-2.pdf",
                "https://goslar.de/portal/seniorenzeitung/2025-1.pdf",
            ]
        );
    }

    #[test]
    fn test_reads_image_and_description() {
        let candidates = extract(PAGE);

        assert_eq!(
            candidates[0].image_url.as_deref(),
            Some("https://goslar.de/thumbs/2025-2.jpg")
        );
        assert_eq!(
            candidates[0].description.as_deref(),
            Some("Seniorenzeitung 2 2025  PDF ")
        );
    }

    #[test]
    fn test_missing_blocks_leave_fields_empty() {
        let candidates = extract(PAGE);

        assert_eq!(candidates[1].image_url, None);
        assert_eq!(candidates[1].description.as_deref(), Some("Frühjahr-Ausgabe"));

        let bare = extract(r#"<a href="/seniorenzeitung/x.pdf">Download</a>"#);
        assert_eq!(bare.len(), 1);
        assert_eq!(bare[0].description, None);
        assert_eq!(bare[0].image_url, None);
    }

    #[test]
    fn test_image_block_without_img() {
        let candidates = extract(
            r#"<a href="/seniorenzeitung/x.pdf"><span class="image">kein Bild</span></a>"#,
        );
        assert_eq!(candidates[0].image_url, None);
    }

    #[test]
    fn test_empty_and_malformed_documents() {
        assert!(extract("").is_empty());
        assert!(extract("<<<not really html &&").is_empty());
        assert!(extract("<a>no href</a>").is_empty());
    }

    #[test]
    fn test_qualifies() {
        let source = SourceConfig::default();
        let extractor = LinkExtractor::new(&source).unwrap();

        assert!(extractor.qualifies("/files/seniorenzeitung-3.pdf"));
        assert!(!extractor.qualifies("/files/seniorenzeitung-3.pdf?download=1"));
        assert!(!extractor.qualifies("/files/SENIORENZEITUNG-3.pdf"));
        assert!(!extractor.qualifies("/files/stadtzeitung-3.pdf"));
    }

    #[test]
    fn test_classify() {
        let source = SourceConfig::default();
        let extractor = LinkExtractor::new(&source).unwrap();
        let fragment = Html::parse_fragment(
            r#"<div class="teaser-image"><img src="/a.jpg"></div><p class="meta">x</p>"#,
        );
        let children: Vec<_> = fragment
            .root_element()
            .children()
            .filter_map(ElementRef::wrap)
            .collect();

        assert_eq!(
            extractor.classify(children[0]),
            Block::Image {
                src: Some("/a.jpg".to_string())
            }
        );
        assert_eq!(extractor.classify(children[1]), Block::Other);
    }
}
