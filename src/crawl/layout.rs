// src/crawl/layout.rs
// =============================================================================
// Where a crawl puts things inside the output directory:
//
//   <out>/raw/_index.html    fetched index page (fetch cache)
//   <out>/raw/<id>.html      fetched content pages (fetch cache)
//   <out>/info/_index.json   scraped index entries
//   <out>/info/<id>.html     extracted page content
//   <out>/site/              static files + rendered pages
// =============================================================================

use std::path::{Path, PathBuf};

// File stem used for the index page wherever a page id would go
const INDEX_STEM: &str = "_index";

#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.root.join("raw")
    }

    pub fn info_dir(&self) -> PathBuf {
        self.root.join("info")
    }

    pub fn site_dir(&self) -> PathBuf {
        self.root.join("site")
    }

    /// Creates raw/, info/ and site/ (and the root itself).
    pub fn create_dirs(&self) -> std::io::Result<()> {
        for dir in [self.raw_dir(), self.info_dir(), self.site_dir()] {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    pub fn index_cache(&self) -> PathBuf {
        self.raw_dir().join(format!("{}.html", INDEX_STEM))
    }

    pub fn page_cache(&self, id: &str) -> PathBuf {
        self.raw_dir().join(format!("{}.html", id))
    }

    pub fn index_info(&self) -> PathBuf {
        self.info_dir().join(format!("{}.json", INDEX_STEM))
    }

    pub fn page_info(&self, id: &str) -> PathBuf {
        self.info_dir().join(format!("{}.html", id))
    }

    pub fn site_index(&self) -> PathBuf {
        self.site_dir().join("index.html")
    }

    pub fn site_page(&self, id: &str) -> PathBuf {
        self.site_dir().join(format!("{}.html", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let layout = OutputLayout::new("/tmp/cses");
        assert_eq!(layout.index_cache(), PathBuf::from("/tmp/cses/raw/_index.html"));
        assert_eq!(layout.page_cache("1068"), PathBuf::from("/tmp/cses/raw/1068.html"));
        assert_eq!(layout.index_info(), PathBuf::from("/tmp/cses/info/_index.json"));
        assert_eq!(layout.page_info("1068"), PathBuf::from("/tmp/cses/info/1068.html"));
        assert_eq!(layout.site_index(), PathBuf::from("/tmp/cses/site/index.html"));
        assert_eq!(layout.site_page("1068"), PathBuf::from("/tmp/cses/site/1068.html"));
    }

    #[test]
    fn test_create_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(dir.path().join("out"));
        layout.create_dirs().unwrap();
        assert!(layout.raw_dir().is_dir());
        assert!(layout.info_dir().is_dir());
        assert!(layout.site_dir().is_dir());
    }
}
