//! Content indexer - collects front-matter records from a content directory

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::record::slug_from_path;
use super::reading_time::DEFAULT_WORDS_PER_MINUTE;
use super::{frontmatter, ContentType, Frontmatter, FrontmatterRecord, ReadingTime};
use crate::error::IndexError;

/// Indexes the files under `<root>/<content type>/`
#[derive(Debug, Clone)]
pub struct ContentIndexer {
    root: PathBuf,
    words_per_minute: u32,
}

impl ContentIndexer {
    /// Create an indexer for the given content root
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }

    /// Set the reading speed used for reading-time estimates
    pub fn with_words_per_minute(mut self, words_per_minute: u32) -> Self {
        self.words_per_minute = words_per_minute;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the files of `content_type`
    pub fn directory(&self, content_type: ContentType) -> PathBuf {
        self.root.join(content_type.dir_name())
    }

    /// Index every file of a content type.
    ///
    /// Files are listed non-recursively in file-name order. A file that
    /// cannot be read or whose header is malformed fails the whole call, so
    /// the result is either complete or an error.
    pub fn index(&self, content_type: ContentType) -> Result<Vec<FrontmatterRecord>, IndexError> {
        let dir = self.directory(content_type);
        if !dir.is_dir() {
            return Err(IndexError::DirectoryNotFound { path: dir });
        }

        let mut records = Vec::new();

        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| IndexError::FileRead {
                path: e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.clone()),
                source: e.into(),
            })?;

            let path = entry.path();
            if !entry.file_type().is_file() {
                tracing::debug!("Skipping non-file entry {:?}", path);
                continue;
            }

            records.push(self.index_file(content_type, path)?);
        }

        tracing::info!(
            "Indexed {} {} file(s) from {:?}",
            records.len(),
            content_type,
            dir
        );

        Ok(records)
    }

    /// Build the record of a single file
    fn index_file(
        &self,
        content_type: ContentType,
        path: &Path,
    ) -> Result<FrontmatterRecord, IndexError> {
        let source = fs::read_to_string(path).map_err(|e| IndexError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let (fields, _body) = frontmatter::parse(&source).map_err(|e| IndexError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let meta = Frontmatter::new(content_type, fields);
        // Estimated over the whole file, header included
        let reading_time = ReadingTime::with_speed(&source, self.words_per_minute);
        let slug = slug_from_path(path);

        tracing::debug!(
            "Indexed {:?} as {} ({} words)",
            path,
            slug,
            reading_time.words
        );

        Ok(FrontmatterRecord::new(meta, slug, reading_time))
    }
}
