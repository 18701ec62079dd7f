// src/site/mod.rs
// =============================================================================
// Turns scraped content into a static site.
//
// A theme is a directory with two parts:
//   <theme>/static/     files copied verbatim into the site
//   <theme>/templates/  index.html and page.html, rendered with tera
//
// Either template may be missing; the matching output is then skipped.
// =============================================================================

mod template;
mod theme;

pub use template::{index_context, page_context, Template};
pub use theme::{Theme, INDEX_TEMPLATE, PAGE_TEMPLATE};
