// src/scrape/index.rs
// =============================================================================
// Reads the list of content pages off the index page.
//
// Every element matching `index.entryCSS` is one entry: its text is the
// title, its href (resolved against the index URL) is where the page lives,
// and the last path segment of the href is the id used to name every file
// produced for that page.
// =============================================================================

use scraper::Html;
use serde::{Deserialize, Serialize};
use url::Url;

use super::parse_selector;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub url: String,
    pub title: String,
    pub id: String,
}

/// Returns the entries in document order. Matches without an href, or
/// with one that can't be resolved against `index_url`, are skipped.
pub fn scrape_index(html: &[u8], entry_css: &str, index_url: &str) -> Result<Vec<IndexEntry>> {
    let selector = parse_selector(entry_css)?;
    let base = Url::parse(index_url).map_err(|source| Error::InvalidUrl {
        url: index_url.to_string(),
        source,
    })?;

    let document = Html::parse_document(&String::from_utf8_lossy(html));

    let mut entries = Vec::new();
    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            tracing::debug!("Skipping index entry without href: {}", element.html());
            continue;
        };

        // A link that can't be resolved costs only its own entry
        let url = match base.join(href) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Skipping index entry with unusable href '{}': {}", href, e);
                continue;
            }
        };

        entries.push(IndexEntry {
            url: url.to_string(),
            title: element.text().collect(),
            id: url_to_id(href),
        });
    }

    Ok(entries)
}

// "/problemset/task/1068?lang=en" -> "1068"
pub fn url_to_id(url: &str) -> String {
    let path = url.split('?').next().unwrap_or_default();
    path.rsplit('/').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &str = r#"
        <html><body>
          <ul class="tasks">
            <li class="task"><a href="/problemset/task/1068">Weird <b>Algorithm</b></a></li>
            <li class="task"><a href="task/1083?lang=en">Missing Number</a></li>
            <li class="task"><a>No link</a></li>
            <li class="task"><a href="https://other.org/x/1069">Repetitions</a></li>
          </ul>
          <a href="/elsewhere">Not an entry</a>
        </body></html>"#;

    #[test]
    fn test_scrape_index_entries_in_order() {
        let entries = scrape_index(
            INDEX.as_bytes(),
            "li.task a",
            "https://cses.fi/problemset/",
        )
        .unwrap();

        assert_eq!(
            entries,
            vec![
                IndexEntry {
                    url: "https://cses.fi/problemset/task/1068".to_string(),
                    title: "Weird Algorithm".to_string(),
                    id: "1068".to_string(),
                },
                IndexEntry {
                    url: "https://cses.fi/problemset/task/1083?lang=en".to_string(),
                    title: "Missing Number".to_string(),
                    id: "1083".to_string(),
                },
                IndexEntry {
                    url: "https://other.org/x/1069".to_string(),
                    title: "Repetitions".to_string(),
                    id: "1069".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_unresolvable_href_skips_only_that_entry() {
        let html = concat!(
            r#"<a class="e" href="/task/1">One</a>"#,
            r#"<a class="e" href="http://[broken/2">Two</a>"#,
            r#"<a class="e" href="/task/3">Three</a>"#,
        );
        let entries = scrape_index(html.as_bytes(), "a.e", "https://cses.fi/").unwrap();

        let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(entries[1].url, "https://cses.fi/task/3");
    }

    #[test]
    fn test_no_matches_is_empty() {
        let entries = scrape_index(INDEX.as_bytes(), "div.none a", "https://cses.fi/").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_invalid_selector() {
        let err = scrape_index(INDEX.as_bytes(), "li[", "https://cses.fi/").unwrap_err();
        assert!(matches!(err, Error::InvalidSelector(_)));
    }

    #[test]
    fn test_url_to_id() {
        assert_eq!(url_to_id("/problemset/task/1068"), "1068");
        assert_eq!(url_to_id("task/1083?lang=en"), "1083");
        assert_eq!(url_to_id("plain"), "plain");
        assert_eq!(url_to_id("/dir/"), "");
    }
}
