//! Route table - maps indexed content to page paths
//!
//! Every route also answers on an `.html` alias so the statically generated
//! files resolve without server-side rewrites.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::content::{ContentType, FrontmatterRecord};
use crate::Site;

/// A single generated page route
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub path: String,
    pub alias: String,
    pub content_type: ContentType,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub reading_time: String,
}

impl Route {
    /// Route of an indexed record
    pub fn from_record(record: &FrontmatterRecord) -> Self {
        let path = page_path(record.content_type(), record.slug());
        Self {
            alias: alias_for(&path),
            path,
            content_type: record.content_type(),
            slug: record.slug().to_string(),
            title: record.title().map(str::to_string),
            date: record.date().map(str::to_string),
            reading_time: record.reading_time().text.clone(),
        }
    }
}

/// Page path of a content file
///
/// Posts live under `/posts/`, pages at the site root, and the `index` page
/// is the root itself.
pub fn page_path(content_type: ContentType, slug: &str) -> String {
    match content_type {
        ContentType::Post => format!("/posts/{}", slug),
        ContentType::Page if slug == "index" => "/".to_string(),
        ContentType::Page => format!("/{}", slug),
    }
}

/// The `.html` alias of a route path
///
/// # Examples
/// ```ignore
/// alias_for("/posts/hello") // -> "/posts/hello.html"
/// alias_for("/")            // -> "/index.html"
/// ```
pub fn alias_for(path: &str) -> String {
    if path.ends_with('/') {
        format!("{}index.html", path)
    } else {
        format!("{}.html", path)
    }
}

/// All routes of a site
#[derive(Debug, Clone, Default, Serialize)]
pub struct RouteTable {
    pub routes: Vec<Route>,
}

impl RouteTable {
    /// Build routes from already indexed records, keeping their order
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a FrontmatterRecord>,
    {
        Self {
            routes: records.into_iter().map(Route::from_record).collect(),
        }
    }

    /// Index every configured content type of `site` and build its routes.
    ///
    /// Content types without a directory are skipped; any other indexing
    /// failure aborts the build.
    pub fn build(site: &Site) -> Result<Self> {
        let indexer = site.indexer();
        let mut table = RouteTable::default();

        for &content_type in &site.config.content_types {
            if !indexer.directory(content_type).is_dir() {
                tracing::debug!("No {} directory, skipping", content_type);
                continue;
            }
            let records = indexer.index(content_type)?;
            table.routes.extend(records.iter().map(Route::from_record));
        }

        tracing::info!("Built {} route(s)", table.routes.len());
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Serialize the table as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the table to `path`, creating parent directories
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }
        fs::write(path, self.to_json()?).with_context(|| format!("Failed to write {:?}", path))?;
        tracing::info!("Wrote {} route(s) to {:?}", self.routes.len(), path);
        Ok(())
    }
}
