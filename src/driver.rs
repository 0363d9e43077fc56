//! Pipeline orchestration.
//!
//! Walks the sitemap hierarchy under a global article quota: fetch the
//! nested sitemap list once, then for each nested sitemap fetch up to the
//! remaining budget of article URLs, scrape them one at a time, and write
//! the batch to its own `articles_data_<N>.json` file.
//!
//! All quota arithmetic lives in [`QuotaLedger`] so the accounting is
//! testable without any I/O. The ledger counts URLs *attempted*, not
//! records produced, so a failed scrape still consumes budget and batch
//! file names stay stable across partial failures.
//!
//! Once fetching starts, no error escapes [`run`]: sitemap failures become
//! empty URL sets, scrape failures are skipped, and write failures lose that
//! batch only. Each is logged where it happens. The single up-front error is
//! an invalid content selector, which is a configuration problem and aborts
//! before any request is made.

use crate::error::Result;
use crate::models::ArticleRecord;
use crate::outputs;
use crate::scrape::ArticleScraper;
use crate::sitemap::SitemapParser;
use std::path::{Path, PathBuf};
use tracing::{error, info, instrument, warn};

/// Everything the pipeline needs for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Root sitemap URL.
    pub sitemap_url: String,
    /// Global article quota, counted in attempted URLs. 0 means unbounded.
    pub max_articles: usize,
    /// Directory batch files are written into.
    pub output_dir: PathBuf,
    /// CSS selector for the article content section.
    pub content_selector: String,
}

/// Totals reported after a run, for the final log line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Nested sitemaps that were processed (batch written, counted, or both).
    pub sitemaps_processed: usize,
    /// Article URLs attempted across all batches.
    pub urls_attempted: usize,
    /// Records that scraped successfully and were handed to the writer.
    pub records_saved: usize,
}

/// Tracks the global article quota across sitemap batches.
///
/// Counting is in *attempted* URLs: a URL consumes budget the moment it is
/// handed to the scraper, whether or not it produces a record.
#[derive(Debug, Clone, Copy)]
pub struct QuotaLedger {
    quota: usize,
    attempted: usize,
}

impl QuotaLedger {
    /// Start a ledger for the given quota (0 = unbounded).
    pub fn new(quota: usize) -> Self {
        QuotaLedger { quota, attempted: 0 }
    }

    /// True once the quota is set and met; an unbounded ledger never
    /// exhausts.
    pub fn exhausted(&self) -> bool {
        self.quota != 0 && self.attempted >= self.quota
    }

    /// Budget left for the next batch, in the cap convention of
    /// [`SitemapParser::article_urls`]: 0 means "no cap".
    pub fn remaining(&self) -> usize {
        if self.quota == 0 {
            0
        } else {
            self.quota.saturating_sub(self.attempted)
        }
    }

    /// Record a batch of attempted URLs.
    pub fn record(&mut self, attempted: usize) {
        self.attempted += attempted;
    }

    /// URLs attempted so far; batch files are named after this value at
    /// batch start.
    pub fn attempted(&self) -> usize {
        self.attempted
    }
}

/// Batch file name for a batch starting at the given attempted-URL total.
fn batch_filename(dir: &Path, attempted_at_start: usize) -> PathBuf {
    dir.join(format!("articles_data_{attempted_at_start}.json"))
}

/// Run the full fetch-scrape-save pipeline.
///
/// Fails only on an invalid content selector, before any request is made.
/// After that, partial failures are logged and the run continues, so the
/// process exits 0 regardless of how much actually scraped.
#[instrument(level = "info", skip_all, fields(sitemap_url = %config.sitemap_url, quota = config.max_articles))]
pub async fn run(config: &RunConfig) -> Result<RunSummary> {
    let parser = SitemapParser::new(config.sitemap_url.clone());
    let scraper = ArticleScraper::new(&config.content_selector)?;

    let nested_sitemaps = match parser.nested_sitemap_urls().await {
        Ok(urls) => urls,
        Err(e) => {
            error!(error = %e, "Failed to retrieve nested sitemap URLs");
            Vec::new()
        }
    };

    let mut summary = RunSummary::default();
    let mut ledger = QuotaLedger::new(config.max_articles);

    for sitemap_url in &nested_sitemaps {
        if ledger.exhausted() {
            info!(
                attempted = ledger.attempted(),
                quota = config.max_articles,
                "Quota reached; remaining sitemaps skipped"
            );
            break;
        }

        let urls = match parser.article_urls(sitemap_url, ledger.remaining()).await {
            Ok(urls) => urls,
            Err(e) => {
                error!(error = %e, %sitemap_url, "Failed to retrieve article URLs");
                Vec::new()
            }
        };

        let records: Vec<ArticleRecord> = scraper.fetch_batch(&urls).await;
        let path = batch_filename(&config.output_dir, ledger.attempted());

        if let Err(e) = outputs::json::write_batch(&records, &path).await {
            warn!(error = %e, path = %path.display(), "Failed to save batch; continuing");
        } else {
            summary.records_saved += records.len();
        }

        summary.sitemaps_processed += 1;
        summary.urls_attempted += urls.len();
        ledger.record(urls.len());
    }

    info!(
        sitemaps = summary.sitemaps_processed,
        attempted = summary.urls_attempted,
        saved = summary.records_saved,
        "Pipeline finished"
    );
    Ok(summary)
}
