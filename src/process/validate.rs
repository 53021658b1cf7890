//! Structural check for album folders: a cover image plus at least one song.

use super::DirectoryLister;
use crate::error::{LibraryError, Result};
use crate::foundation::store::COVER_FILE_NAME;
use crate::foundation::utils::has_extension;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fmt, io};
use tokio::fs;
use tracing::{debug, error};

/// Song extensions the validator accepts, case-sensitive.
pub const SONG_EXTENSIONS: [&str; 3] = [".mp3", ".wav", ".flac"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    MissingCover,
    NoSongFiles,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidReason::MissingCover => write!(f, "missing cover image"),
            InvalidReason::NoSongFiles => write!(f, "no song files found"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Validation {
    Valid,
    Invalid(InvalidReason),
}

/// Check `folder` from a single, non-recursive listing.
///
/// The cover rule is evaluated first, so a folder lacking both a cover and
/// songs reports [`InvalidReason::MissingCover`]. Listing failures are
/// returned as errors, never as an invalid result. Only regular files
/// (symlinks followed) count, so a sub-folder named `cover.jpg` is not a cover.
pub async fn validate_folder<L: DirectoryLister>(lister: &L, folder: &Path) -> Result<Validation> {
    let entries = lister.list(folder).await.map_err(|e| {
        error!(path = %folder.display(), error = %e, "Failed to read album folder");
        LibraryError::io(folder, e)
    })?;
    let entries = regular_files(entries).await?;

    let has_cover = entries
        .iter()
        .any(|p| p.file_name().is_some_and(|name| name == COVER_FILE_NAME));

    let validation = if !has_cover {
        Validation::Invalid(InvalidReason::MissingCover)
    } else if !entries.iter().any(|p| has_extension(p, &SONG_EXTENSIONS)) {
        Validation::Invalid(InvalidReason::NoSongFiles)
    } else {
        Validation::Valid
    };

    debug!(path = %folder.display(), ?validation, "Album folder validated");
    Ok(validation)
}

async fn regular_files(entries: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::with_capacity(entries.len());
    for entry in entries {
        match fs::metadata(&entry).await {
            Ok(metadata) if metadata.is_file() => files.push(entry),
            Ok(_) => {}
            // Dangling symlink, or removed since the listing.
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                error!(path = %entry.display(), error = %e, "Failed to inspect album entry");
                return Err(LibraryError::io(&entry, e));
            }
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::process::FsLister;
    use std::fs::{self as std_fs, File};
    use tempfile::TempDir;

    fn album_dir(files: &[&str]) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for file in files {
            File::create(temp_dir.path().join(file)).unwrap();
        }
        temp_dir
    }

    async fn check(files: &[&str]) -> Validation {
        let dir = album_dir(files);
        validate_folder(&FsLister, dir.path()).await.unwrap()
    }

    #[tokio::test]
    async fn test_cover_and_song_is_valid() {
        assert_eq!(check(&["cover.jpg", "track1.mp3"]).await, Validation::Valid);
        assert_eq!(check(&["cover.jpg", "a.wav"]).await, Validation::Valid);
        assert_eq!(check(&["cover.jpg", "a.flac", "notes.txt"]).await, Validation::Valid);
    }

    #[tokio::test]
    async fn test_missing_cover_is_reported_first() {
        let validation = check(&[]).await;
        assert_eq!(validation, Validation::Invalid(InvalidReason::MissingCover));

        let validation = check(&["track1.mp3", "Cover.jpg"]).await;
        assert_eq!(validation, Validation::Invalid(InvalidReason::MissingCover));
    }

    #[tokio::test]
    async fn test_no_song_files() {
        let validation = check(&["cover.jpg", "readme.txt"]).await;
        assert_eq!(validation, Validation::Invalid(InvalidReason::NoSongFiles));

        let validation = check(&["cover.jpg", "LOUD.MP3"]).await;
        assert_eq!(validation, Validation::Invalid(InvalidReason::NoSongFiles));
    }

    #[test]
    fn test_reason_text() {
        assert_eq!(InvalidReason::MissingCover.to_string(), "missing cover image");
        assert_eq!(InvalidReason::NoSongFiles.to_string(), "no song files found");
    }

    #[tokio::test]
    async fn test_unreadable_folder_is_an_error() {
        let dir = album_dir(&[]);
        let err = validate_folder(&FsLister, &dir.path().join("missing"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_directories_do_not_count_as_cover_or_songs() {
        let dir = album_dir(&["track1.mp3"]);
        std_fs::create_dir(dir.path().join("cover.jpg")).unwrap();
        let validation = validate_folder(&FsLister, dir.path()).await.unwrap();
        assert_eq!(validation, Validation::Invalid(InvalidReason::MissingCover));

        let dir = album_dir(&["cover.jpg"]);
        std_fs::create_dir(dir.path().join("bonus.mp3")).unwrap();
        let validation = validate_folder(&FsLister, dir.path()).await.unwrap();
        assert_eq!(validation, Validation::Invalid(InvalidReason::NoSongFiles));
    }
}
