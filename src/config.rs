// src/config.rs
// =============================================================================
// The crawl configuration file.
//
// A JSON document naming the index page, the CSS selectors used to find
// entries and page content, and the metadata handed to the templates:
//
//   {
//     "index":      { "url": "https://cses.fi/problemset/", "entryCSS": "li.task a" },
//     "page":       { "contentCSS": "div.content", "tagsToRemove": ["script"] },
//     "metadata":   { "title": "CSES Problem Set" },
//     "extensions": { ... anything, passed through to templates ... }
//   }
//
// The file given on the command line is copied into the output directory
// as config.json and that copy is what gets read, so every output
// directory records the configuration it was produced with.
// =============================================================================

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// File name of the configuration copy kept in the output directory
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub index: IndexConfig,
    pub page: PageConfig,
    #[serde(default)]
    pub metadata: Metadata,
    // Opaque to us; templates decide what it means
    #[serde(default)]
    pub extensions: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    pub url: String,
    #[serde(rename = "entryCSS")]
    pub entry_css: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(rename = "contentCSS")]
    pub content_css: String,
    #[serde(rename = "tagsToRemove", default)]
    pub tags_to_remove: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Option<String>,
}

impl Config {
    /// Reads and validates a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::parse(&raw)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        Url::parse(&self.index.url).map_err(|source| Error::InvalidUrl {
            url: self.index.url.clone(),
            source,
        })?;
        if self.index.entry_css.trim().is_empty() {
            return Err(Error::Config("index.entryCSS is empty".to_string()));
        }
        if self.page.content_css.trim().is_empty() {
            return Err(Error::Config("page.contentCSS is empty".to_string()));
        }
        Ok(())
    }
}

/// Copies `source` to `<out_dir>/config.json` and loads the copy.
///
/// Copying is skipped when `source` already is that file.
pub fn install(source: &Path, out_dir: &Path) -> Result<Config> {
    let dest: PathBuf = out_dir.join(CONFIG_FILE);

    let same_file = match (source.canonicalize(), dest.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    };
    if !same_file {
        std::fs::copy(source, &dest).map_err(|e| {
            Error::Config(format!(
                "cannot copy {} to {}: {}",
                source.display(),
                dest.display(),
                e
            ))
        })?;
    }

    Config::load(&dest)
}
