//! Content module - front-matter parsing, reading time and content indexing

pub mod frontmatter;
pub mod indexer;
mod meta;
mod reading_time;
mod record;

pub use frontmatter::{FrontmatterError, Metadata};
pub use indexer::ContentIndexer;
pub use meta::{Frontmatter, PageMeta, PostMeta};
pub use reading_time::{count_words, ReadingTime, DEFAULT_WORDS_PER_MINUTE};
pub use record::{slug_from_path, ContentType, FrontmatterRecord};
