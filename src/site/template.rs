// src/site/template.rs
// =============================================================================
// A single tera template read from disk.
//
// Templates are rendered one-off (no shared Tera instance) and without
// autoescaping: page content is already HTML.
// =============================================================================

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tera::{Context, Tera};

use crate::config::Config;
use crate::error::Result;
use crate::scrape::IndexEntry;

#[derive(Debug, Clone)]
pub struct Template {
    path: PathBuf,
    source: String,
}

impl Template {
    /// Reads the template at `path`. A missing file is logged and yields
    /// `Ok(None)`; any other read error is returned.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        match std::fs::read_to_string(path) {
            Ok(source) => Ok(Some(Self::from_source(path, source))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::error!("{} was not found.", path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_source(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn render(&self, context: &Context) -> Result<String> {
        Ok(Tera::one_off(&self.source, context, false)?)
    }
}

/// Context for the index template: `title`, `extensions`, `pageList`.
pub fn index_context(config: &Config, entries: &[IndexEntry]) -> Context {
    let mut context = Context::new();
    context.insert("title", &config.metadata.title);
    context.insert("extensions", &config.extensions);
    context.insert("pageList", entries);
    context
}

/// Context for a page template: the entry's `url`, `title`, `id`, plus
/// `content` and `extensions`.
pub fn page_context(config: &Config, entry: &IndexEntry, content: &str) -> Context {
    let mut context = Context::new();
    context.insert("url", &entry.url);
    context.insert("title", &entry.title);
    context.insert("id", &entry.id);
    context.insert("content", content);
    context.insert("extensions", &config.extensions);
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::parse(
            r#"{ "index": { "url": "https://cses.fi/problemset/", "entryCSS": "li a" },
                 "page": { "contentCSS": "div.content" },
                 "metadata": { "title": "CSES" },
                 "extensions": { "math": true } }"#,
        )
        .unwrap()
    }

    fn entry(id: &str, title: &str) -> IndexEntry {
        IndexEntry {
            url: format!("https://cses.fi/problemset/task/{}", id),
            title: title.to_string(),
            id: id.to_string(),
        }
    }

    #[test]
    fn test_render_index() {
        let template = Template::from_source(
            "index.html",
            concat!(
                "<h1>{{ title }}</h1>",
                "{% for p in pageList %}<a href=\"{{ p.id }}.html\">{{ p.title }}</a>{% endfor %}",
                "{% if extensions.math %}M{% endif %}",
            ),
        );
        let entries = vec![entry("1068", "Weird Algorithm"), entry("1083", "Missing Number")];

        let out = template.render(&index_context(&config(), &entries)).unwrap();
        assert_eq!(
            out,
            concat!(
                "<h1>CSES</h1>",
                "<a href=\"1068.html\">Weird Algorithm</a>",
                "<a href=\"1083.html\">Missing Number</a>M",
            )
        );
    }

    #[test]
    fn test_render_page_does_not_escape_content() {
        let template =
            Template::from_source("page.html", "<title>{{ title }}</title>{{ content }}");
        let out = template
            .render(&page_context(&config(), &entry("1068", "A & B"), "<p>x</p>"))
            .unwrap();
        assert_eq!(out, "<title>A & B</title><p>x</p>");
    }

    #[test]
    fn test_broken_template_is_error() {
        let template = Template::from_source("page.html", "{% for %}");
        assert!(template.render(&Context::new()).is_err());
    }

    #[test]
    fn test_load_existing_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "{{ id }}").unwrap();

        let template = Template::load(&path).unwrap().unwrap();
        assert_eq!(template.path(), path);
        assert!(Template::load(&dir.path().join("index.html")).unwrap().is_none());
    }
}
