//! List site content

use anyhow::Result;

use crate::content::{ContentType, FrontmatterRecord};
use crate::helpers::Helpers;
use crate::Site;

/// Format one listing line
fn line(helpers: &Helpers, record: &FrontmatterRecord) -> String {
    let date = record.date().map(|d| helpers.date(d)).unwrap_or_default();
    let title = record.title().unwrap_or(record.slug());
    format!(
        "  {:<14} {} [{}] ({})",
        date,
        title,
        record.slug(),
        record.reading_time().text
    )
}

/// List site content by type
pub fn run(site: &Site, content_type: ContentType) -> Result<()> {
    let records = site.index(content_type)?;
    let helpers = Helpers::new(&site.config);

    println!("{} ({}):", heading(content_type), records.len());
    for record in &records {
        println!("{}", line(&helpers, record));
    }

    Ok(())
}

fn heading(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Post => "Posts",
        ContentType::Page => "Pages",
    }
}
