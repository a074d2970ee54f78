//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::{ContentType, DEFAULT_WORDS_PER_MINUTE};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,
    pub timezone: String,

    // Content
    /// Content root, relative to the site directory
    pub content_dir: String,
    /// Content types the route table is built from
    pub content_types: Vec<ContentType>,
    pub words_per_minute: u32,
    /// Extension given to files created by `new`
    pub new_post_ext: String,

    // Output
    pub routes_file: String,
    /// Key-value store backing persisted preferences
    pub state_file: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Wren".to_string(),
            url: "http://example.com".to_string(),
            timezone: String::new(),

            content_dir: "src/contents".to_string(),
            content_types: ContentType::ALL.to_vec(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            new_post_ext: "mdx".to_string(),

            routes_file: "dist/routes.json".to_string(),
            state_file: ".wren/storage.json".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }
}
