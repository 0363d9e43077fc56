//! Article page scraping.
//!
//! Al Mayadeen article pages carry their metadata as a JSON blob inside a
//! `<script id="tawsiyat-metadata" type="text/tawsiyat">` element, and the
//! body text as `<p>` elements inside one content section. The section's
//! class signature is long and site-specific, so it is taken as
//! configuration rather than hard-coded (see [`DEFAULT_CONTENT_SELECTOR`]).
//!
//! Two kinds of trouble are kept distinct:
//! - a *missing* metadata script or content section degrades the record to
//!   empty defaults but still produces it;
//! - a *malformed* page (fetch failure, invalid metadata JSON) fails that
//!   one article outright.

use crate::error::{Result, ScrapeError};
use crate::models::ArticleRecord;
use futures::stream::{self, StreamExt};
use once_cell::sync::Lazy;
use reqwest::get;
use scraper::{Html, Selector};
use serde_json::{Map, Value};
use tracing::{error, info, instrument};

/// The site's content-section class signature, as a CSS selector.
pub const DEFAULT_CONTENT_SELECTOR: &str =
    "section.news-section.read-section.light_bg.pd-top-0";

static METADATA_SCRIPT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"script#tawsiyat-metadata[type="text/tawsiyat"]"#).unwrap());
static PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// Fetches article pages and extracts one [`ArticleRecord`] per page.
#[derive(Debug, Clone)]
pub struct ArticleScraper {
    content_selector: Selector,
}

impl ArticleScraper {
    /// Build a scraper with the given content-section selector.
    ///
    /// Fails with [`ScrapeError::Selector`] when the selector is not valid
    /// CSS; this is a configuration error surfaced before any fetch.
    pub fn new(content_selector: &str) -> Result<Self> {
        let content_selector = Selector::parse(content_selector)
            .map_err(|e| ScrapeError::Selector(e.to_string()))?;
        Ok(ArticleScraper { content_selector })
    }

    /// Fetch one article page and extract its record.
    ///
    /// Non-2xx statuses and malformed metadata JSON are errors; a page
    /// without a metadata script or content section still yields a record
    /// with empty defaults.
    #[instrument(level = "info", skip_all, fields(url = %article_url))]
    pub async fn fetch_article_data(&self, article_url: &str) -> Result<ArticleRecord> {
        let body = get(article_url).await?.error_for_status()?.text().await?;
        extract_article(article_url, &body, &self.content_selector)
    }

    /// Fetch a batch of article URLs one at a time, in order, collecting the
    /// records that scraped successfully. Failures are logged and skipped;
    /// they never fail the batch.
    #[instrument(level = "info", skip_all, fields(count = urls.len()))]
    pub async fn fetch_batch(&self, urls: &[String]) -> Vec<ArticleRecord> {
        let records: Vec<ArticleRecord> = stream::iter(urls)
            .then(|url| async move {
                match self.fetch_article_data(url).await {
                    Ok(record) => {
                        info!(%url, "Scraped article");
                        Some(record)
                    }
                    Err(e) => {
                        error!(error = %e, %url, "Failed to scrape article");
                        None
                    }
                }
            })
            .filter_map(std::future::ready)
            .collect()
            .await;

        info!(
            attempted = urls.len(),
            scraped = records.len(),
            "Fetched article batch"
        );
        records
    }
}

/// Extract a record from a fetched page body.
///
/// Holds all the parsing so the extraction contract is testable from a
/// string, without a network.
pub(crate) fn extract_article(
    url: &str,
    html: &str,
    content_selector: &Selector,
) -> Result<ArticleRecord> {
    let document = Html::parse_document(html);

    let metadata = match document.select(&METADATA_SCRIPT_SELECTOR).next() {
        Some(script) => {
            let raw = script.text().collect::<String>();
            serde_json::from_str::<Map<String, Value>>(raw.trim())?
        }
        None => Map::new(),
    };

    let article_text = match document.select(content_selector).next() {
        Some(section) => section
            .select(&PARAGRAPH_SELECTOR)
            .map(|p| p.text().collect::<String>().trim().to_string())
            .collect::<Vec<_>>()
            .join(" "),
        None => String::new(),
    };

    Ok(ArticleRecord::from_parts(url, metadata, article_text))
}
