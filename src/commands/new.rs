//! Create a new post or page

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::ContentType;
use crate::Site;

/// Create a new content file from a title, returning its path
pub fn create(site: &Site, title: &str, content_type: ContentType) -> Result<PathBuf> {
    let now = chrono::Local::now();

    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    let target_dir = site.content_dir.join(content_type.dir_name());
    fs::create_dir_all(&target_dir)?;

    let ext = site.config.new_post_ext.trim_start_matches('.');
    let file_path = target_dir.join(format!("{}.{}", slug, ext));

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = match content_type {
        ContentType::Post => format!(
            "---\ntitle: {}\ndate: {}\ntags: []\n---\n",
            yaml_string(title),
            now.format("%Y-%m-%d %H:%M:%S")
        ),
        ContentType::Page => format!("---\ntitle: {}\n---\n", yaml_string(title)),
    };

    fs::write(&file_path, content)?;
    tracing::info!("Created {} {:?}", content_type, file_path);

    Ok(file_path)
}

/// Run the new command
pub fn run(site: &Site, title: &str, content_type: ContentType) -> Result<()> {
    let path = create(site, title, content_type)?;
    println!("Created: {:?}", path);
    Ok(())
}

/// Quote a title so YAML reads it back verbatim
fn yaml_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("{:?}", s))
}
