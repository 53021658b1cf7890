use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Source of single-level directory listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryLister: Send + Sync {
    /// Full paths of the entries directly inside `dir`, in listing order.
    async fn list(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Lists the real filesystem, keeping the order the OS reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

#[async_trait]
impl DirectoryLister for FsLister {
    async fn list(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = fs::read_dir(dir).await?;
        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            paths.push(entry.path());
        }
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_lists_direct_children_only() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("a.mp3")).unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        File::create(temp_dir.path().join("sub").join("deep.mp3")).unwrap();

        let mut names: Vec<String> = FsLister
            .list(temp_dir.path())
            .await
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();

        assert_eq!(names, ["a.mp3", "sub"]);
    }

    #[tokio::test]
    async fn test_missing_directory_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = FsLister
            .list(&temp_dir.path().join("missing"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
