//! Content loader - reads content files and collects posts from the content directory

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::post::{is_post_file, sort_posts, PostMeta};
use crate::error::{Error, Result};

/// Raw text of one content file
#[derive(Debug, Clone)]
pub struct ContentFile {
    /// File name without directories, e.g. `hello.md`
    pub filename: String,
    pub text: String,
}

impl ContentFile {
    /// Read a content file. Invalid UTF-8 is replaced rather than rejected.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| Error::ReadContent {
            path: path.to_path_buf(),
            source,
        })?;

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            filename,
            text: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

/// List the post entries directly inside `content_dir`, ordered by file name.
///
/// Subdirectories, non-markdown files and the index file are left out.
/// Links are listed without being resolved, so an entry may still fail to
/// read; callers decide whether that skips the post or aborts.
pub fn list_posts(content_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut posts = Vec::new();

    for entry in WalkDir::new(content_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth() == 0 => {
                return Err(Error::ListContent {
                    path: content_dir.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                tracing::warn!("Skipping content entry: {}", e);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let is_post = entry.file_name().to_str().is_some_and(is_post_file);
        if is_post {
            posts.push(entry.into_path());
        }
    }

    Ok(posts)
}

/// Collect listing metadata for every post, newest first.
///
/// Posts that cannot be read are skipped with a warning.
pub fn collect_posts(content_dir: &Path) -> Result<Vec<PostMeta>> {
    let mut posts = Vec::new();

    for path in list_posts(content_dir)? {
        let file = match ContentFile::read(&path) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Skipping unreadable post: {:#}", anyhow::Error::from(e));
                continue;
            }
        };
        posts.push(PostMeta::from_source(&file.filename, &file.text));
    }

    sort_posts(&mut posts);

    Ok(posts)
}
