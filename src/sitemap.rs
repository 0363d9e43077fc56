//! Sitemap traversal.
//!
//! The site publishes a two-level sitemap hierarchy: a root index whose
//! `<sitemap>` entries point at nested sitemaps, each of which lists article
//! pages as `<url>` entries. Both levels wrap the target address in a
//! `<loc>` element.
//!
//! Fetching and parsing are split so the parsers can be tested from strings:
//! [`parse_sitemap_index`] and [`parse_url_set`] hold all the XML logic.

use crate::error::Result;
use quick_xml::Reader;
use quick_xml::events::Event;
use reqwest::get;
use tracing::{debug, info, instrument};

/// Resolves a root sitemap into nested sitemap URLs and each nested sitemap
/// into a bounded list of article URLs.
#[derive(Debug, Clone)]
pub struct SitemapParser {
    root_url: String,
}

impl SitemapParser {
    /// Create a parser for the given root sitemap URL.
    pub fn new(root_url: impl Into<String>) -> Self {
        SitemapParser {
            root_url: root_url.into(),
        }
    }

    /// Fetch the root sitemap and return every nested sitemap URL in
    /// document order.
    ///
    /// A non-2xx status is an error; the caller decides whether to log or
    /// propagate.
    #[instrument(level = "info", skip_all, fields(url = %self.root_url))]
    pub async fn nested_sitemap_urls(&self) -> Result<Vec<String>> {
        let body = get(&self.root_url).await?.error_for_status()?.text().await?;
        let urls = parse_sitemap_index(&body)?;

        info!(count = urls.len(), "Indexed nested sitemap URLs");
        debug!(urls = ?urls, "Nested sitemaps");
        Ok(urls)
    }

    /// Fetch one nested sitemap and return its article URLs in document
    /// order, truncated to `max_articles` entries when the cap is non-zero.
    ///
    /// A cap of 0 means no cap.
    #[instrument(level = "info", skip_all, fields(url = %sitemap_url, max_articles))]
    pub async fn article_urls(&self, sitemap_url: &str, max_articles: usize) -> Result<Vec<String>> {
        let body = get(sitemap_url).await?.error_for_status()?.text().await?;
        let urls = parse_url_set(&body, max_articles)?;

        info!(count = urls.len(), "Indexed article URLs");
        Ok(urls)
    }
}

/// Extract the `<loc>` text of every `<sitemap>` entry in a sitemap index.
pub(crate) fn parse_sitemap_index(xml: &str) -> Result<Vec<String>> {
    collect_loc_text(xml, b"sitemap", 0)
}

/// Extract the `<loc>` text of every `<url>` entry in a sitemap, keeping
/// only the first `cap` entries when `cap > 0`.
pub(crate) fn parse_url_set(xml: &str, cap: usize) -> Result<Vec<String>> {
    collect_loc_text(xml, b"url", cap)
}

/// Walk the XML event stream collecting `<loc>` text nested inside
/// `container` elements, in document order.
fn collect_loc_text(xml: &str, container: &[u8], cap: usize) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut locations = Vec::new();
    let mut in_container = false;
    let mut in_loc = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == container => in_container = true,
            Event::Start(e) if in_container && e.local_name().as_ref() == b"loc" => in_loc = true,
            Event::Text(t) if in_loc => {
                let text = t.unescape().map_err(quick_xml::Error::from)?;
                locations.push(text.into_owned());
            }
            Event::End(e) if e.local_name().as_ref() == b"loc" => in_loc = false,
            Event::End(e) if e.local_name().as_ref() == container => {
                in_container = false;
                if cap > 0 && locations.len() >= cap {
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(locations)
}
