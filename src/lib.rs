//! wren-rs: build-time tooling for the wren personal site
//!
//! This crate indexes the site's content directories into front-matter
//! records with reading-time estimates, turns them into a route table, and
//! carries the small helpers the site shares (date display, persisted
//! preferences).

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod routes;
pub mod state;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentIndexer, ContentType, FrontmatterRecord};

/// A site checkout
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content root, one subdirectory per content type
    pub content_dir: PathBuf,
    /// Persisted preferences
    pub state_path: PathBuf,
}

impl Site {
    /// Open a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let state_path = base_dir.join(&config.state_file);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            state_path,
        })
    }

    /// Indexer over this site's content root
    pub fn indexer(&self) -> ContentIndexer {
        ContentIndexer::new(&self.content_dir).with_words_per_minute(self.config.words_per_minute)
    }

    /// Index one content type
    pub fn index(&self, content_type: ContentType) -> Result<Vec<FrontmatterRecord>> {
        Ok(self.indexer().index(content_type)?)
    }

    /// Build the route table of every configured content type
    pub fn routes(&self) -> Result<routes::RouteTable> {
        routes::RouteTable::build(self)
    }

    /// Open the preference store
    pub fn state_store(&self) -> Result<state::FileStore> {
        Ok(state::FileStore::open(&self.state_path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_site_defaults_without_config() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert_eq!(site.content_dir, tmp.path().join("src/contents"));
        assert_eq!(site.state_path, tmp.path().join(".wren/storage.json"));
    }

    #[test]
    fn test_site_reads_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("_config.yml"),
            "content_dir: content\nwords_per_minute: 100\n",
        )
        .unwrap();
        let posts = tmp.path().join("content/post");
        fs::create_dir_all(&posts).unwrap();
        fs::write(posts.join("a.mdx"), vec!["word"; 150].join(" ")).unwrap();

        let site = Site::new(tmp.path()).unwrap();
        let records = site.index(ContentType::Post).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].reading_time().text, "2 min read");
    }

    #[test]
    fn test_site_index_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        let err = site.index(ContentType::Page).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<error::IndexError>(),
            Some(error::IndexError::DirectoryNotFound { .. })
        ));
    }
}
