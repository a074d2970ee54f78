//! Content types and indexed records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::{Frontmatter, ReadingTime};
use crate::error::IndexError;

/// A category of content, stored in its own subdirectory of the content root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Post,
    Page,
}

impl ContentType {
    /// All known content types
    pub const ALL: [ContentType; 2] = [ContentType::Post, ContentType::Page];

    /// Name of the subdirectory holding this type's files
    pub fn dir_name(&self) -> &'static str {
        match self {
            ContentType::Post => "post",
            ContentType::Page => "page",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for ContentType {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "post" | "posts" => Ok(ContentType::Post),
            "page" | "pages" => Ok(ContentType::Page),
            _ => Err(IndexError::UnknownContentType(s.to_string())),
        }
    }
}

/// Metadata of one content file plus the fields derived from it.
///
/// Records are snapshots of a single indexing call and are never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontmatterRecord {
    #[serde(flatten)]
    meta: Frontmatter,
    slug: String,
    reading_time: ReadingTime,
}

impl FrontmatterRecord {
    pub fn new(meta: Frontmatter, slug: String, reading_time: ReadingTime) -> Self {
        Self {
            meta,
            slug,
            reading_time,
        }
    }

    pub fn meta(&self) -> &Frontmatter {
        &self.meta
    }

    pub fn content_type(&self) -> ContentType {
        self.meta.content_type()
    }

    /// File name without its extension
    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn reading_time(&self) -> &ReadingTime {
        &self.reading_time
    }

    pub fn title(&self) -> Option<&str> {
        self.meta.title()
    }

    pub fn date(&self) -> Option<&str> {
        self.meta.date()
    }
}

/// Derive a slug from a file path by stripping its extension
pub fn slug_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
