//! Errors raised by the content pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Content pipeline errors
///
/// Every variant carries the path it failed on so the build driver can
/// report a single-line diagnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read content {}", .path.display())]
    ReadContent {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list content directory {}", .path.display())]
    ListContent {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output file {}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse template {}", .path.display())]
    TemplateParse {
        path: PathBuf,
        #[source]
        source: tera::Error,
    },

    #[error("failed to execute template {}", .path.display())]
    TemplateRender {
        path: PathBuf,
        #[source]
        source: tera::Error,
    },
}

impl Error {
    /// Whether this error must abort the whole build instead of skipping one post.
    ///
    /// Only an unreadable content file qualifies: a page that was asked for
    /// explicitly cannot be silently dropped.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::ReadContent { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_only_read_errors_are_fatal() {
        let read = Error::ReadContent {
            path: PathBuf::from("content/post.md"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let write = Error::WriteOutput {
            path: PathBuf::from("public/blogs/post.html"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(read.is_fatal());
        assert!(!write.is_fatal());
    }

    #[test]
    fn test_message_names_path() {
        let err = Error::ReadContent {
            path: PathBuf::from("content/post.md"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "cannot read content content/post.md");
    }
}
