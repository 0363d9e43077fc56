//! JSON batch output.
//!
//! Each processed sitemap batch becomes one file containing a JSON array of
//! records, pretty-printed, UTF-8 with non-ASCII characters left unescaped.
//! An existing file at the same path is overwritten without warning.

use crate::error::Result;
use crate::models::ArticleRecord;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Serialize an ordered batch of records to `path` as pretty-printed JSON.
///
/// The batch may be empty; an empty array is still written so a processed
/// sitemap always leaves a file behind.
#[instrument(level = "info", skip_all, fields(path = %path.display(), count = records.len()))]
pub async fn write_batch(records: &[ArticleRecord], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).await?;

    info!("Wrote batch file");
    Ok(())
}
