use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use almayadeen_scraper::cli::Cli;
use almayadeen_scraper::driver::{self, RunConfig};
use almayadeen_scraper::utils::ensure_writable_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("almayadeen_scraper starting up");

    let args = Cli::parse();
    debug!(?args.max_articles, ?args.sitemap_url, ?args.output_dir, "Parsed CLI arguments");

    // Early check: ensure the output dir is writable before hitting the network
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let config = RunConfig {
        sitemap_url: args.sitemap_url,
        max_articles: args.max_articles,
        output_dir: PathBuf::from(args.output_dir),
        content_selector: args.content_selector,
    };

    let summary = match driver::run(&config).await {
        Ok(summary) => summary,
        Err(e) => {
            error!(error = %e, "Pipeline could not start");
            return Err(e.into());
        }
    };

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        sitemaps = summary.sitemaps_processed,
        attempted = summary.urls_attempted,
        saved = summary.records_saved,
        "Execution complete"
    );

    Ok(())
}
