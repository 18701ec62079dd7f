// src/crawl/runner.rs
// =============================================================================
// Runs one crawl: index page first, then every page it lists, in order.
//
// For the index:
//   fetch -> scrape entries -> info/_index.json -> site/index.html
// For each entry (up to --limit):
//   fetch -> extract content -> info/<id>.html -> site/<id>.html
//
// All fetching goes through one TimedFetcher, awaited one page at a time,
// so requests are strictly sequential and paced. A second run over the same
// output directory is served from raw/ and makes no requests.
//
// The first error stops the crawl and is returned as-is; the caller decides
// what to do with it.
// =============================================================================

use crate::config::Config;
use crate::error::Result;
use crate::fetch::{FetchObserver, TimedFetcher, Transport};
use crate::scrape::{scrape_index, scrape_page, IndexEntry};
use crate::site::{index_context, page_context, Template, Theme, INDEX_TEMPLATE, PAGE_TEMPLATE};

use super::OutputLayout;

// The theme's templates, either of which may be absent
#[derive(Debug, Default)]
pub struct Templates {
    pub index: Option<Template>,
    pub page: Option<Template>,
}

impl Templates {
    pub fn load(theme: &Theme) -> Result<Self> {
        Ok(Self {
            index: theme.template(INDEX_TEMPLATE)?,
            page: theme.template(PAGE_TEMPLATE)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Entries found on the index page
    pub entries: usize,
    /// Pages fetched and processed
    pub pages: usize,
}

/// Creates the output directories, copies the theme's static files into the
/// site and loads its templates.
pub fn prepare(layout: &OutputLayout, theme: &Theme) -> Result<Templates> {
    layout.create_dirs()?;
    let copied = theme.copy_static(&layout.site_dir())?;
    tracing::debug!("Copied {} static file(s) from {}", copied, theme.root().display());
    Templates::load(theme)
}

pub async fn crawl<T: Transport, O: FetchObserver>(
    config: &Config,
    layout: &OutputLayout,
    templates: &Templates,
    fetcher: &mut TimedFetcher<T, O>,
    limit: Option<usize>,
) -> Result<CrawlSummary> {
    // Fetch the index page (or read it from raw/ on a rerun)
    let index_data = fetcher
        .fetch(&config.index.url, &layout.index_cache())
        .await?;

    // Find every entry it links to
    let index = scrape_index(&index_data, &config.index.entry_css, &config.index.url)?;
    tracing::info!("Found {} entries on the index page", index.len());

    // Keep the scraped list around as JSON
    let json = serde_json::to_string_pretty(&index)?;
    tokio::fs::write(layout.index_info(), json).await?;

    // Render the site's front page, if the theme has a template for it
    if let Some(template) = &templates.index {
        let output = template.render(&index_context(config, &index))?;
        tokio::fs::write(layout.site_index(), output).await?;
    }

    // Then each page, strictly one after another, in index order
    let mut pages = 0;
    for entry in index.iter().take(limit.unwrap_or(usize::MAX)) {
        process_page(config, layout, templates, fetcher, entry).await?;
        pages += 1;
    }

    Ok(CrawlSummary {
        entries: index.len(),
        pages,
    })
}

async fn process_page<T: Transport, O: FetchObserver>(
    config: &Config,
    layout: &OutputLayout,
    templates: &Templates,
    fetcher: &mut TimedFetcher<T, O>,
    entry: &IndexEntry,
) -> Result<()> {
    let data = fetcher.fetch(&entry.url, &layout.page_cache(&entry.id)).await?;

    let content = scrape_page(
        &data,
        &config.page.content_css,
        &config.page.tags_to_remove,
    )?;
    tokio::fs::write(layout.page_info(&entry.id), &content).await?;

    if let Some(template) = &templates.page {
        let output = template.render(&page_context(config, entry, &content))?;
        tokio::fs::write(layout.site_page(&entry.id), output).await?;
    }

    tracing::debug!("Processed page {} ({})", entry.id, entry.title);
    Ok(())
}
