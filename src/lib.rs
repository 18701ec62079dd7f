//! Crawl a paginated website politely, scrape its pages and render them
//! into a static site.
//!
//! The interesting part is [`fetch::TimedFetcher`]: every request is paced,
//! retried a bounded number of times and cached on disk, so a crawl can be
//! interrupted and resumed without hitting the origin again.

pub mod cli;
pub mod config;
pub mod crawl;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod scrape;
pub mod site;

pub use error::{Error, Result};
