// src/cli.rs
// =============================================================================
// Command-line interface, parsed with clap's derive API.
//
//   eku-scraper --out-dir cses --config cses.json [--delay 1] [--limit 10]
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "eku-scraper",
    version,
    about = "Crawl and scrape a website into a static site",
    long_about = "eku-scraper fetches an index page, follows every entry it lists, extracts \
                  each page's content with CSS selectors and renders the result with a theme. \
                  Downloads are cached in the output directory, so an interrupted crawl \
                  resumes where it stopped."
)]
pub struct Cli {
    /// Output directory of the project
    #[arg(long)]
    pub out_dir: PathBuf,

    /// Path to the config file (copied to <out-dir>/config.json)
    #[arg(long)]
    pub config: PathBuf,

    /// 1: print errors, 2: print important messages, 3: print everything
    #[arg(long, default_value_t = 2)]
    pub verbosity: u8,

    /// Delay between page downloads, in seconds
    #[arg(long, default_value_t = 1.0)]
    pub delay: f64,

    /// Pause before retrying a failed download, in seconds
    #[arg(long, default_value_t = 5.0)]
    pub retry_delay: f64,

    /// Retries after a failed download
    #[arg(long, default_value_t = 2)]
    pub retries: u32,

    /// Maximum number of pages to fetch
    #[arg(long)]
    pub limit: Option<usize>,

    /// Directory containing the theme to apply to the generated site
    #[arg(long)]
    pub theme: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli =
            Cli::try_parse_from(["eku-scraper", "--out-dir", "out", "--config", "c.json"]).unwrap();
        assert_eq!(cli.out_dir, PathBuf::from("out"));
        assert_eq!(cli.config, PathBuf::from("c.json"));
        assert_eq!(cli.verbosity, 2);
        assert_eq!(cli.delay, 1.0);
        assert_eq!(cli.retry_delay, 5.0);
        assert_eq!(cli.retries, 2);
        assert!(cli.limit.is_none());
        assert!(cli.theme.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "eku-scraper",
            "--out-dir", "out",
            "--config", "c.json",
            "--verbosity", "3",
            "--delay", "0.5",
            "--retry-delay", "2",
            "--retries", "4",
            "--limit", "10",
            "--theme", "mytheme",
        ])
        .unwrap();
        assert_eq!(cli.verbosity, 3);
        assert_eq!(cli.delay, 0.5);
        assert_eq!(cli.retry_delay, 2.0);
        assert_eq!(cli.retries, 4);
        assert_eq!(cli.limit, Some(10));
        assert_eq!(cli.theme, Some(PathBuf::from("mytheme")));
    }

    #[test]
    fn test_out_dir_and_config_required() {
        assert!(Cli::try_parse_from(["eku-scraper", "--config", "c.json"]).is_err());
        assert!(Cli::try_parse_from(["eku-scraper", "--out-dir", "out"]).is_err());
    }
}
