//! Print indexed content as JSON

use anyhow::Result;

use crate::content::ContentType;
use crate::Site;

/// Index a content type and render the records as JSON
pub fn render(site: &Site, content_type: ContentType, pretty: bool) -> Result<String> {
    let records = site.index(content_type)?;
    let json = if pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    Ok(json)
}

/// Index a content type and print the records
pub fn run(site: &Site, content_type: ContentType, pretty: bool) -> Result<()> {
    println!("{}", render(site, content_type, pretty)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_records() {
        let tmp = TempDir::new().unwrap();
        let posts = tmp.path().join("src/contents/post");
        fs::create_dir_all(&posts).unwrap();
        fs::write(
            posts.join("hello-world.mdx"),
            "---\ntitle: Hello\ndate: 2024-01-15\n---\nSome words.",
        )
        .unwrap();

        let site = Site::new(tmp.path()).unwrap();
        let json = render(&site, ContentType::Post, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["type"], "post");
        assert_eq!(value[0]["title"], "Hello");
        assert_eq!(value[0]["date"], "2024-01-15");
        assert_eq!(value[0]["slug"], "hello-world");
        assert_eq!(value[0]["readingTime"]["words"], 6);
    }
}
