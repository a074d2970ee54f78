//! Per-category metadata shapes
//!
//! The declared header fields are kept exactly as parsed; the typed
//! accessors read them leniently and return `None` when a value has an
//! unexpected type.

use serde::Serialize;
use serde_json::Value;

use super::frontmatter::Metadata;
use super::ContentType;

fn str_field<'a>(fields: &'a Metadata, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}

/// Scalar values as text; strings and numbers only
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A single value or a list of values, as a list of strings
fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
        Some(value) => scalar_text(value).into_iter().collect(),
        None => Vec::new(),
    }
}

/// Header fields of a blog post
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PostMeta {
    fields: Metadata,
}

impl PostMeta {
    pub fn new(fields: Metadata) -> Self {
        Self { fields }
    }

    pub fn title(&self) -> Option<&str> {
        str_field(&self.fields, "title")
    }

    pub fn date(&self) -> Option<&str> {
        str_field(&self.fields, "date")
    }

    pub fn updated(&self) -> Option<&str> {
        str_field(&self.fields, "updated")
    }

    pub fn description(&self) -> Option<&str> {
        str_field(&self.fields, "description")
    }

    /// `tags: rust` and `tags: [rust, 2024]` both read as a list
    pub fn tags(&self) -> Vec<String> {
        string_list(self.fields.get("tags"))
    }

    pub fn lang(&self) -> Option<&str> {
        str_field(&self.fields, "lang")
    }

    pub fn draft(&self) -> Option<bool> {
        self.fields.get("draft").and_then(Value::as_bool)
    }

    pub fn fields(&self) -> &Metadata {
        &self.fields
    }
}

/// Header fields of a standalone page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PageMeta {
    fields: Metadata,
}

impl PageMeta {
    pub fn new(fields: Metadata) -> Self {
        Self { fields }
    }

    pub fn title(&self) -> Option<&str> {
        str_field(&self.fields, "title")
    }

    pub fn date(&self) -> Option<&str> {
        str_field(&self.fields, "date")
    }

    pub fn description(&self) -> Option<&str> {
        str_field(&self.fields, "description")
    }

    pub fn lang(&self) -> Option<&str> {
        str_field(&self.fields, "lang")
    }

    pub fn layout(&self) -> Option<&str> {
        str_field(&self.fields, "layout")
    }

    pub fn fields(&self) -> &Metadata {
        &self.fields
    }
}

/// Metadata of one content file, shaped by its content type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Frontmatter {
    Post(PostMeta),
    Page(PageMeta),
}

impl Frontmatter {
    /// Wrap parsed header fields in the shape of `content_type`
    pub fn new(content_type: ContentType, fields: Metadata) -> Self {
        match content_type {
            ContentType::Post => Frontmatter::Post(PostMeta::new(fields)),
            ContentType::Page => Frontmatter::Page(PageMeta::new(fields)),
        }
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            Frontmatter::Post(_) => ContentType::Post,
            Frontmatter::Page(_) => ContentType::Page,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Frontmatter::Post(meta) => meta.title(),
            Frontmatter::Page(meta) => meta.title(),
        }
    }

    /// Publication date as written in the header
    pub fn date(&self) -> Option<&str> {
        match self {
            Frontmatter::Post(meta) => meta.date(),
            Frontmatter::Page(meta) => meta.date(),
        }
    }

    pub fn tags(&self) -> Vec<String> {
        match self {
            Frontmatter::Post(meta) => meta.tags(),
            Frontmatter::Page(_) => Vec::new(),
        }
    }

    /// The declared fields, without the type tag
    pub fn fields(&self) -> &Metadata {
        match self {
            Frontmatter::Post(meta) => meta.fields(),
            Frontmatter::Page(meta) => meta.fields(),
        }
    }
}
