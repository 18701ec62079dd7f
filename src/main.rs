// src/main.rs
// =============================================================================
// Entry point of the eku-scraper CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging into the output directory
// 3. Install the config, prepare the output directory and theme
// 4. Run the crawl, racing it against Ctrl-C
// 5. Exit with a proper code (0 = done or interrupted, 1 = crawl failed,
//    2 = could not start)
// =============================================================================

use anyhow::{Context, Result};
use clap::Parser;

use eku_scraper::cli::Cli;
use eku_scraper::config;
use eku_scraper::crawl::{self, OutputLayout};
use eku_scraper::fetch::{FetchSettings, TimedFetcher};
use eku_scraper::logging;
use eku_scraper::site::Theme;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Setup failed, logging may not even be up yet
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = crawl finished, or was interrupted
//   Ok(1) = crawl stopped on an error (logged)
//   Err   = setup failed before crawling started
async fn run() -> Result<i32> {
    // Parse command-line arguments (handles --help, --version, etc.)
    let cli = Cli::parse();

    // Logging goes to the terminal and to log files in the output directory,
    // so it must come first
    logging::init(&cli.out_dir, cli.verbosity)?;

    // Copy the config into the output directory and read it back
    let config = config::install(&cli.config, &cli.out_dir)
        .with_context(|| format!("cannot load config {}", cli.config.display()))?;

    // Create raw/, info/, site/ and copy the theme's static files
    let layout = OutputLayout::new(&cli.out_dir);
    let theme = cli.theme.clone().map(Theme::new).unwrap_or_else(Theme::bundled);
    let templates = crawl::prepare(&layout, &theme)
        .with_context(|| format!("cannot apply theme {}", theme.root().display()))?;

    // One fetcher for the whole run: it owns the rate-limit clock
    let settings =
        FetchSettings::from_secs(Some(cli.delay), Some(cli.retry_delay), Some(cli.retries))?;
    let mut fetcher = TimedFetcher::new(settings).context("cannot build HTTP client")?;

    // Dropping the crawl future on Ctrl-C aborts the in-flight fetch
    // wherever it is waiting (rate limit, retry pause or network).
    // `None` means the user interrupted us.
    let outcome = tokio::select! {
        result = crawl::crawl(&config, &layout, &templates, &mut fetcher, cli.limit) => {
            Some(result)
        }
        _ = tokio::signal::ctrl_c() => None,
    };

    // Errors and interrupts are logged here and turned into an exit code,
    // never propagated as a crash
    let code = match outcome {
        Some(Ok(summary)) => {
            tracing::info!(
                "Done: {} of {} page(s) processed, {} downloaded",
                summary.pages,
                summary.entries,
                fetcher.success_count()
            );
            0
        }
        Some(Err(e)) => {
            tracing::error!("Caught exception: {:#}", anyhow::Error::from(e));
            1
        }
        None => {
            tracing::warn!(
                "Caught interrupt, stopping after {} download(s)",
                fetcher.success_count()
            );
            0
        }
    };

    Ok(code)
}
