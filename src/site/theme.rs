// src/site/theme.rs
// =============================================================================
// A theme directory on disk.
//
//   <theme>/static/                 copied verbatim into <out>/site
//   <theme>/templates/index.html    front page
//   <theme>/templates/page.html     one per scraped page
//
// Without --theme the crate's own theme/ directory is used.
// =============================================================================

use std::path::{Path, PathBuf};

use super::Template;
use crate::error::Result;

pub const INDEX_TEMPLATE: &str = "index.html";
pub const PAGE_TEMPLATE: &str = "page.html";

#[derive(Debug, Clone)]
pub struct Theme {
    root: PathBuf,
}

impl Theme {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The theme shipped alongside the crate sources
    pub fn bundled() -> Self {
        Self::new(concat!(env!("CARGO_MANIFEST_DIR"), "/theme"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn static_dir(&self) -> PathBuf {
        self.root.join("static")
    }

    pub fn template_path(&self, name: &str) -> PathBuf {
        self.root.join("templates").join(name)
    }

    /// Copies every regular file of the static directory into `dest`
    /// (created if needed). Subdirectories are not descended into.
    /// Returns the number of files copied.
    pub fn copy_static(&self, dest: &Path) -> Result<usize> {
        std::fs::create_dir_all(dest)?;

        let mut copied = 0;
        for entry in std::fs::read_dir(self.static_dir())? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                tracing::debug!("Not copying {}: not a file", entry.path().display());
                continue;
            }
            std::fs::copy(entry.path(), dest.join(entry.file_name()))?;
            copied += 1;
        }
        Ok(copied)
    }

    /// Loads a template by file name; `None` if the theme doesn't have it.
    pub fn template(&self, name: &str) -> Result<Option<Template>> {
        Template::load(&self.template_path(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_static_copies_files_only() {
        let dir = tempfile::tempdir().unwrap();
        let theme = Theme::new(dir.path().join("theme"));
        std::fs::create_dir_all(theme.static_dir().join("fonts")).unwrap();
        std::fs::write(theme.static_dir().join("style.css"), "body {}").unwrap();
        std::fs::write(theme.static_dir().join("app.js"), "").unwrap();

        let site = dir.path().join("out").join("site");
        let copied = theme.copy_static(&site).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(std::fs::read_to_string(site.join("style.css")).unwrap(), "body {}");
        assert!(site.join("app.js").is_file());
        assert!(!site.join("fonts").exists());
    }

    #[test]
    fn test_copy_static_without_static_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let theme = Theme::new(dir.path());
        assert!(theme.copy_static(&dir.path().join("site")).is_err());
    }

    #[test]
    fn test_missing_template_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let theme = Theme::new(dir.path());
        assert!(theme.template(PAGE_TEMPLATE).unwrap().is_none());
    }

    #[test]
    fn test_bundled_theme_is_complete() {
        let theme = Theme::bundled();
        assert!(theme.static_dir().is_dir());
        assert!(theme.template(INDEX_TEMPLATE).unwrap().is_some());
        assert!(theme.template(PAGE_TEMPLATE).unwrap().is_some());
    }
}
