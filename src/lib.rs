//! # Al Mayadeen sitemap scraper
//!
//! Retrieves article metadata and body text from
//! [Al Mayadeen](https://www.almayadeen.net) by walking the site's two-level
//! sitemap hierarchy, then persists the results as JSON files.
//!
//! ## Pipeline
//!
//! 1. **Index**: fetch the root sitemap and collect its nested sitemap URLs
//! 2. **Budget**: walk nested sitemaps while a global article quota remains
//! 3. **Scrape**: fetch each article page, extract its embedded JSON
//!    metadata and flattened paragraph text
//! 4. **Save**: write each sitemap batch to `articles_data_<N>.json`
//!
//! Fetching is strictly sequential — one sitemap, then one article at a
//! time — with a single attempt per URL and no caching or state between
//! runs. Failures are logged and skipped; a failed article still counts
//! against the quota so batch file names stay stable.

pub mod cli;
pub mod driver;
pub mod error;
pub mod models;
pub mod outputs;
pub mod scrape;
pub mod sitemap;
pub mod utils;

pub use driver::{RunConfig, RunSummary, run};
pub use error::{Result, ScrapeError};
pub use models::ArticleRecord;
pub use scrape::ArticleScraper;
pub use sitemap::SitemapParser;
