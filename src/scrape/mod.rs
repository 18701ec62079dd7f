// src/scrape/mod.rs
// =============================================================================
// Pulls structured content out of fetched HTML with CSS selectors.
//
// - index: the index page -> ordered list of {url, title, id} entries
// - page:  a content page -> the single HTML fragment holding its content
// =============================================================================

mod index;
mod page;

pub use index::{scrape_index, url_to_id, IndexEntry};
pub use page::scrape_page;

use scraper::Selector;

use crate::error::{Error, Result};

// Selectors come from the config file, so a bad one is a user error
fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::InvalidSelector(format!("{}: {}", css, e)))
}
