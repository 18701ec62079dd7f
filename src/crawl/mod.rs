// src/crawl/mod.rs
// =============================================================================
// The crawl driver.
//
// - layout: paths of everything a crawl writes under the output directory
// - runner: prepares the output directory and walks index -> pages
// =============================================================================

mod layout;
mod runner;

pub use layout::OutputLayout;
pub use runner::{crawl, prepare, CrawlSummary, Templates};
