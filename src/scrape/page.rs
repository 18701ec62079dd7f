// src/scrape/page.rs
// =============================================================================
// Extracts the content fragment of a single page.
//
// `page.contentCSS` must match exactly one element. Descendants whose tag is
// listed in `page.tagsToRemove` are dropped together with everything inside
// them (text following a removed element is kept, it belongs to the parent).
// =============================================================================

use std::collections::HashSet;

use ego_tree::NodeId;
use scraper::{ElementRef, Html};

use super::parse_selector;
use crate::error::{Error, Result};

/// Returns the trimmed outer HTML of the single element matching
/// `content_css`, with `tags_to_remove` stripped out.
pub fn scrape_page(html: &[u8], content_css: &str, tags_to_remove: &[String]) -> Result<String> {
    let selector = parse_selector(content_css)?;

    // Normalize Windows line endings before parsing
    let text = String::from_utf8_lossy(html).replace("\r\n", "\n");
    let mut document = Html::parse_document(&text);

    // Exactly one element must hold the content
    let matches: Vec<_> = document.select(&selector).collect();
    if matches.len() != 1 {
        return Err(Error::ContentShape {
            selector: content_css.to_string(),
            matched: matches.len(),
        });
    }
    let content_id = matches[0].id();

    // html5ever lowercases tag names, so compare lowercase
    let strip: HashSet<String> = tags_to_remove
        .iter()
        .map(|tag| tag.to_ascii_lowercase())
        .collect();

    // Collect first, the tree can't be mutated while `matches` borrows it
    let doomed: Vec<NodeId> = matches[0]
        .descendants()
        .filter(|node| {
            node.value()
                .as_element()
                .map_or(false, |element| strip.contains(element.name()))
        })
        .map(|node| node.id())
        .collect();

    // Detaching a node takes its whole subtree out of the document
    for id in doomed {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }

    let content = document
        .tree
        .get(content_id)
        .and_then(ElementRef::wrap)
        .ok_or_else(|| Error::ContentShape {
            selector: content_css.to_string(),
            matched: 0,
        })?;

    Ok(content.html().trim().to_string())
}
