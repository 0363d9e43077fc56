//! Data model for scraped articles.
//!
//! One [`ArticleRecord`] is produced per successfully fetched article URL.
//! The typed fields cover the keys the site reliably publishes in its
//! metadata script; everything the site sent, known keys included, is kept
//! verbatim in `additional_metadata` so downstream consumers never lose
//! site-specific extras.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata and body text scraped from one article page.
///
/// All fields except `url` default to empty when the page omits them; a
/// record exists at all only if the page was fetched and parsed. Records
/// live in memory for one sitemap batch, get written to disk, and are
/// dropped.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// The canonical source URL, supplied by the caller (never derived from
    /// the page).
    pub url: String,
    /// Site-assigned identifier, from the `postid` metadata key.
    pub post_id: String,
    /// Article title.
    pub title: String,
    /// Comma-split `keywords` value. A page without keywords yields a single
    /// empty-string element, mirroring the split of an empty source field.
    pub keywords: Vec<String>,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// The `published_time` value, passed through unparsed.
    pub publication_date: String,
    /// The `last_updated` value, passed through unparsed.
    pub last_updated: String,
    /// Article author.
    pub author: String,
    /// Paragraph text of the content section, each paragraph trimmed, joined
    /// by single spaces. Paragraph boundaries are not preserved.
    pub article_text: String,
    /// The complete raw metadata blob, a superset of the typed fields above.
    pub additional_metadata: Map<String, Value>,
}

impl ArticleRecord {
    /// Build a record from an article URL, its raw metadata map, and its
    /// flattened body text.
    ///
    /// Known keys are lifted into typed fields with empty-string defaults;
    /// the full map is retained in `additional_metadata`.
    pub fn from_parts(url: &str, metadata: Map<String, Value>, article_text: String) -> Self {
        let field = |key: &str| -> String {
            metadata
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        ArticleRecord {
            url: url.to_string(),
            post_id: field("postid"),
            title: field("title"),
            keywords: field("keywords").split(',').map(str::to_string).collect(),
            thumbnail: field("thumbnail"),
            publication_date: field("published_time"),
            last_updated: field("last_updated"),
            author: field("author"),
            article_text,
            additional_metadata: metadata,
        }
    }
}
