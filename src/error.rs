use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Boxed error returned across the metadata boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by the indexing pipeline.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Filesystem failure other than a missing store file
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A persisted store could not be (de)serialized
    #[error("JSON error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The tag parser failed on a file
    #[error("Failed to parse metadata of {}: {source}", path.display())]
    MetadataParse {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// No application data directory could be resolved
    #[error("Unable to resolve an application data directory")]
    NoAppDirectory,
}

/// Coarse error discriminant callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    IoFailure,
    ParseFailure,
    Config,
}

impl LibraryError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        LibraryError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn json(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        LibraryError::Json {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LibraryError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                ErrorKind::NotFound
            }
            LibraryError::Io { .. } => ErrorKind::IoFailure,
            LibraryError::Json { .. } | LibraryError::MetadataParse { .. } => {
                ErrorKind::ParseFailure
            }
            LibraryError::Config(_) | LibraryError::NoAppDirectory => ErrorKind::Config,
        }
    }
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_discriminates_missing_files() {
        let missing = LibraryError::io("/x", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(missing.kind(), ErrorKind::NotFound);

        let denied = LibraryError::io("/x", io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(denied.kind(), ErrorKind::IoFailure);

        let parse = LibraryError::MetadataParse {
            path: PathBuf::from("/x/a.mp3"),
            source: "bad header".into(),
        };
        assert_eq!(parse.kind(), ErrorKind::ParseFailure);
        assert!(parse.to_string().contains("/x/a.mp3"));
    }
}
