//! Command-line interface definitions.
//!
//! The quota is the only semantic knob; the remaining options default to the
//! site's constants and exist so the sitemap URL, output location, and the
//! brittle content-section selector can be overridden without a rebuild.

use crate::scrape::DEFAULT_CONTENT_SELECTOR;
use clap::Parser;

/// Command-line arguments for the Al Mayadeen sitemap scraper.
///
/// # Examples
///
/// ```sh
/// # Scrape up to 50 articles into the current directory
/// almayadeen_scraper -n 50
///
/// # Unbounded run into a dedicated directory
/// almayadeen_scraper -n 0 -o ./scraped
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Maximum number of article URLs to attempt across all sitemaps (0 = unbounded)
    #[arg(short = 'n', long, default_value_t = 200)]
    pub max_articles: usize,

    /// Root sitemap URL to walk
    #[arg(long, default_value = "https://www.almayadeen.net/sitemaps/all.xml")]
    pub sitemap_url: String,

    /// Directory to write articles_data_<N>.json batch files into
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// CSS selector for the article content section
    #[arg(long, default_value = DEFAULT_CONTENT_SELECTOR)]
    pub content_selector: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["almayadeen_scraper"]);

        assert_eq!(cli.max_articles, 200);
        assert_eq!(cli.sitemap_url, "https://www.almayadeen.net/sitemaps/all.xml");
        assert_eq!(cli.output_dir, ".");
        assert_eq!(cli.content_selector, DEFAULT_CONTENT_SELECTOR);
    }

    #[test]
    fn test_cli_quota_flag() {
        let cli = Cli::parse_from(["almayadeen_scraper", "-n", "50"]);
        assert_eq!(cli.max_articles, 50);

        let cli = Cli::parse_from(["almayadeen_scraper", "--max-articles", "0"]);
        assert_eq!(cli.max_articles, 0);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "almayadeen_scraper",
            "--sitemap-url",
            "https://example.net/all.xml",
            "-o",
            "/tmp/batches",
            "--content-selector",
            "article.body",
        ]);

        assert_eq!(cli.sitemap_url, "https://example.net/all.xml");
        assert_eq!(cli.output_dir, "/tmp/batches");
        assert_eq!(cli.content_selector, "article.body");
    }
}
