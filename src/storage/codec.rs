//! RSS 2.0 wire format for the feed.

use std::io::Write;

use chrono::Datelike;
use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::{Channel, ChannelImage, Config, FeedItem};
use crate::utils::Clock;

#[derive(Deserialize)]
struct RssDocument {
    channel: Channel,
}

/// Parse a persisted RSS document.
pub fn parse(bytes: &[u8]) -> Result<Channel> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| AppError::validation(format!("feed is not valid UTF-8: {e}")))?;
    let document: RssDocument = quick_xml::de::from_str(text.trim_start_matches('\u{feff}'))?;
    Ok(document.channel)
}

/// Load the previous channel, or start a fresh one.
///
/// Absent, blank or unreadable input all yield the first-run channel built
/// from `config`; only the unreadable case is worth a warning.
pub fn load(bytes: Option<&[u8]>, config: &Config, clock: &dyn Clock) -> Channel {
    let fresh = || {
        Channel::fresh(
            &config.feed,
            &config.source.page_url,
            clock.now().year(),
        )
    };

    match bytes {
        Some(bytes) if !bytes.iter().all(u8::is_ascii_whitespace) => match parse(bytes) {
            Ok(channel) => {
                log::debug!("Loaded feed with {} items", channel.items.len());
                channel
            }
            Err(e) => {
                log::warn!("Previous feed could not be parsed ({e}); starting a new one");
                fresh()
            }
        },
        _ => fresh(),
    }
}

/// Render the channel as an indented RSS 2.0 document.
pub fn serialize(channel: &Channel) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", "2.0"));
    writer.write_event(Event::Start(rss))?;
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    write_text_element(&mut writer, "title", &channel.title)?;
    write_text_element(&mut writer, "link", &channel.link)?;
    write_text_element(&mut writer, "description", &channel.description)?;
    write_text_element(&mut writer, "copyright", &channel.copyright)?;
    write_text_element(&mut writer, "language", &channel.language)?;
    if let Some(date) = &channel.last_build_date {
        write_text_element(&mut writer, "lastBuildDate", date)?;
    }
    if let Some(image) = &channel.image {
        write_image(&mut writer, image)?;
    }
    for item in &channel.items {
        write_item(&mut writer, item)?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

fn write_image<W: Write>(writer: &mut Writer<W>, image: &ChannelImage) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("image")))?;
    write_text_element(writer, "url", &image.url)?;
    write_text_element(writer, "title", &image.title)?;
    write_text_element(writer, "link", &image.link)?;
    writer.write_event(Event::End(BytesEnd::new("image")))?;
    Ok(())
}

fn write_item<W: Write>(writer: &mut Writer<W>, item: &FeedItem) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("item")))?;
    write_text_element(writer, "link", &item.link)?;
    write_text_element(writer, "title", &item.title)?;
    write_text_element(writer, "description", &item.description)?;
    write_text_element(writer, "pubDate", &item.pub_date)?;
    writer.write_event(Event::End(BytesEnd::new("item")))?;
    Ok(())
}

/// Write `<name>text</name>`.
///
/// The reader trims whitespace at the edges of plain text, so such text is
/// written as CDATA, which it keeps verbatim.
fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    let padded = text.trim() != text;
    if padded && !text.contains("]]>") {
        writer.write_event(Event::CData(BytesCData::new(text)))?;
    } else {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
