use super::json_file::{read_json, write_json};
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Ordered list of registered library root paths, persisted as a JSON array.
///
/// Duplicates are allowed and insertion order is kept.
#[derive(Debug, Clone)]
pub struct PathRegistry {
    file: PathBuf,
}

impl PathRegistry {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Registered paths; empty when nothing was ever persisted.
    pub async fn read(&self) -> Result<Vec<String>> {
        Ok(read_json(&self.file).await?.unwrap_or_default())
    }

    pub async fn write(&self, paths: &[String]) -> Result<()> {
        write_json(&self.file, paths).await?;
        debug!(file = %self.file.display(), count = paths.len(), "Library paths saved");
        Ok(())
    }

    /// Append `path`, even if it is already registered.
    pub async fn add(&self, path: &str) -> Result<()> {
        let mut paths = self.read().await?;
        paths.push(path.to_string());
        self.write(&paths).await?;
        info!(path, "Library path registered");
        Ok(())
    }

    /// Drop the first entry equal to `path`. Returns whether one was removed.
    pub async fn remove(&self, path: &str) -> Result<bool> {
        let mut paths = self.read().await?;
        let Some(index) = paths.iter().position(|p| p == path) else {
            debug!(path, "Library path not registered, nothing to remove");
            return Ok(false);
        };

        paths.remove(index);
        self.write(&paths).await?;
        info!(path, "Library path unregistered");
        Ok(true)
    }
}
