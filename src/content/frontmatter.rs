//! Front-matter parsing
//!
//! A content file may start with a header block fenced by `---` (YAML by
//! default, or the language named right after the fence: `---yaml`,
//! `---json`, `---toml`) or by `+++` (TOML). Everything after the closing
//! fence is the body.

use serde_json::Value;
use thiserror::Error;

/// Declared header fields, in declaration order
pub type Metadata = serde_json::Map<String, Value>;

/// Front-matter parsing errors
#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("unterminated {format} header: missing closing `{fence}`")]
    Unterminated {
        format: HeaderFormat,
        fence: &'static str,
    },

    #[error("unsupported header language `{0}`")]
    UnsupportedLanguage(String),

    #[error("invalid YAML header: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON header: {0}")]
    Json(serde_json::Error),

    #[error("invalid TOML header: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Language of a header block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFormat {
    Yaml,
    Json,
    Toml,
}

impl std::fmt::Display for HeaderFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            HeaderFormat::Yaml => "YAML",
            HeaderFormat::Json => "JSON",
            HeaderFormat::Toml => "TOML",
        })
    }
}

/// Split a document into its header fields and body.
///
/// A document without a header block yields empty metadata and the whole
/// content as body. An opening fence without a matching closing fence, or a
/// header that does not parse as a mapping, is an error.
pub fn parse(content: &str) -> Result<(Metadata, &str), FrontmatterError> {
    let content = content.trim_start_matches('\u{feff}');
    let start = content.trim_start_matches(['\n', '\r']);

    let (first_line, rest) = match start.find('\n') {
        Some(pos) => (&start[..pos], &start[pos + 1..]),
        None => (start, ""),
    };

    let Some((format, fence)) = detect_fence(first_line.trim_end())? else {
        return Ok((Metadata::new(), content));
    };

    let (header, body) = split_at_fence(rest, fence)
        .ok_or(FrontmatterError::Unterminated { format, fence })?;
    let body = body.trim_start_matches(['\n', '\r']);

    if header.trim().is_empty() {
        return Ok((Metadata::new(), body));
    }

    let metadata = match format {
        HeaderFormat::Yaml => parse_yaml(header)?,
        HeaderFormat::Json => serde_json::from_str(header).map_err(FrontmatterError::Json)?,
        HeaderFormat::Toml => parse_toml(header)?,
    };

    Ok((metadata, body))
}

/// Recognise the opening fence line and the header language it announces
fn detect_fence(line: &str) -> Result<Option<(HeaderFormat, &'static str)>, FrontmatterError> {
    if line == "+++" {
        return Ok(Some((HeaderFormat::Toml, "+++")));
    }

    let Some(lang) = line.strip_prefix("---") else {
        return Ok(None);
    };

    // `----` and longer rules are markdown, not a fence
    if lang.starts_with('-') {
        return Ok(None);
    }

    let format = match lang.trim().to_ascii_lowercase().as_str() {
        "" | "yaml" | "yml" => HeaderFormat::Yaml,
        "json" => HeaderFormat::Json,
        "toml" => HeaderFormat::Toml,
        other => return Err(FrontmatterError::UnsupportedLanguage(other.to_string())),
    };

    Ok(Some((format, "---")))
}

/// Find the closing fence line; returns (header, body)
fn split_at_fence<'a>(rest: &'a str, fence: &str) -> Option<(&'a str, &'a str)> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == fence {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

fn parse_yaml(header: &str) -> Result<Metadata, FrontmatterError> {
    let value: serde_yaml::Value = serde_yaml::from_str(header)?;
    if value.is_null() {
        // Only comments
        return Ok(Metadata::new());
    }
    Ok(serde_yaml::from_value(value)?)
}

fn parse_toml(header: &str) -> Result<Metadata, FrontmatterError> {
    let table: toml::Table = header.parse()?;
    Ok(table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect())
}

/// TOML datetimes become their RFC 3339 text, like quoted YAML dates
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
date: 2024-01-15 10:30:00
tags:
  - rust
  - wren
---

This is the content.
"#;

        let (meta, body) = parse(content).unwrap();
        assert_eq!(meta["title"], json!("Hello World"));
        assert_eq!(meta["date"], json!("2024-01-15 10:30:00"));
        assert_eq!(meta["tags"], json!(["rust", "wren"]));
        assert_eq!(body, "This is the content.\n");
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let content = "---\nzeta: 1\nalpha: 2\nmid: 3\n---\nbody";
        let (meta, _) = parse(content).unwrap();
        let keys: Vec<_> = meta.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "Just some text.\n\nMore text.";
        let (meta, body) = parse(content).unwrap();
        assert!(meta.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_empty_header() {
        let (meta, body) = parse("---\n---\nBody").unwrap();
        assert!(meta.is_empty());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_comment_only_header() {
        let (meta, body) = parse("---\n# nothing yet\n---\nBody").unwrap();
        assert!(meta.is_empty());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_json_frontmatter() {
        let content = "---json\n{\"title\": \"Test Post\", \"tags\": [\"a\", \"b\"]}\n---\nThis is content.";
        let (meta, body) = parse(content).unwrap();
        assert_eq!(meta["title"], json!("Test Post"));
        assert_eq!(meta["tags"], json!(["a", "b"]));
        assert_eq!(body, "This is content.");
    }

    #[test]
    fn test_toml_frontmatter() {
        let content = "+++\ntitle = \"Toml Post\"\ndate = 2024-03-01\ndraft = true\n+++\nBody here.";
        let (meta, body) = parse(content).unwrap();
        assert_eq!(meta["title"], json!("Toml Post"));
        assert_eq!(meta["date"], json!("2024-03-01"));
        assert_eq!(meta["draft"], json!(true));
        assert_eq!(body, "Body here.");
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "---\r\ntitle: Windows\r\n---\r\nBody\r\n";
        let (meta, body) = parse(content).unwrap();
        assert_eq!(meta["title"], json!("Windows"));
        assert_eq!(body, "Body\r\n");
    }

    #[test]
    fn test_bom_and_leading_blank_lines() {
        let content = "\u{feff}\n\n---\ntitle: Bom\n---\nBody";
        let (meta, _) = parse(content).unwrap();
        assert_eq!(meta["title"], json!("Bom"));
    }

    #[test]
    fn test_horizontal_rule_is_not_a_fence() {
        let content = "-----\nSome text\n-----\n";
        let (meta, body) = parse(content).unwrap();
        assert!(meta.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unterminated_header_is_error() {
        let err = parse("---\ntitle: Broken\n\nNo closing fence").unwrap_err();
        assert!(matches!(err, FrontmatterError::Unterminated { .. }));
    }

    #[test]
    fn test_malformed_yaml_is_error() {
        let err = parse("---\ntitle: [unclosed\n---\nBody").unwrap_err();
        assert!(matches!(err, FrontmatterError::Yaml(_)));
    }

    #[test]
    fn test_scalar_header_is_error() {
        assert!(parse("---\njust a sentence\n---\nBody").is_err());
    }

    #[test]
    fn test_unsupported_language() {
        let err = parse("---coffee\ntitle = 'x'\n---\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::UnsupportedLanguage(lang) if lang == "coffee"));
    }
}
