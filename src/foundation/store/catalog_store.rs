use super::json_file::{read_json, write_json};
use super::models::LibraryMap;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The persisted catalog file.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    file: PathBuf,
}

impl CatalogStore {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// The stored catalog, or `None` when none has been written yet.
    ///
    /// Use [`CatalogBuilder::read_catalog`](crate::process::CatalogBuilder::read_catalog)
    /// to build one on demand.
    pub async fn load(&self) -> Result<Option<LibraryMap>> {
        let map: Option<LibraryMap> = read_json(&self.file).await?;
        if let Some(map) = &map {
            debug!(file = %self.file.display(), albums = map.len(), "Catalog loaded");
        }
        Ok(map)
    }

    pub async fn write(&self, map: &LibraryMap) -> Result<()> {
        write_json(&self.file, map).await?;
        debug!(file = %self.file.display(), albums = map.len(), "Catalog saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::store::{Album, Track};
    use tempfile::tempdir;

    fn sample_map() -> LibraryMap {
        let track = Track {
            title: "Come Together".into(),
            artwork: "aGk=".into(),
            genre: "Rock".into(),
            duration: 259.5,
            year: 1969,
            artist: "The Beatles".into(),
        };
        let album = Album {
            album_name: "Abbey Road".into(),
            album_cover: "/music/Abbey Road/cover.jpg".into(),
            tracks: vec![track],
        };
        LibraryMap::from([("Abbey Road".to_string(), album)])
    }

    #[tokio::test]
    async fn test_load_without_file_is_none() {
        let temp_dir = tempdir().unwrap();
        let store = CatalogStore::new(temp_dir.path().join("library.json"));
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_then_load_round_trips() {
        let temp_dir = tempdir().unwrap();
        let store = CatalogStore::new(temp_dir.path().join("library.json"));

        store.write(&sample_map()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(sample_map()));
    }

    #[tokio::test]
    async fn test_write_replaces_previous_catalog() {
        let temp_dir = tempdir().unwrap();
        let store = CatalogStore::new(temp_dir.path().join("library.json"));
        store.write(&sample_map()).await.unwrap();

        store.write(&LibraryMap::new()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(LibraryMap::new()));
    }

    #[tokio::test]
    async fn test_persisted_format_uses_camel_case_keys() {
        let temp_dir = tempdir().unwrap();
        let store = CatalogStore::new(temp_dir.path().join("library.json"));
        store.write(&sample_map()).await.unwrap();

        let raw = std::fs::read_to_string(store.file()).unwrap();
        assert!(raw.starts_with("{\n  \"Abbey Road\": {\n    \"albumName\": \"Abbey Road\""));
        assert!(raw.contains("\"albumCover\": \"/music/Abbey Road/cover.jpg\""));
        for key in ["title", "artwork", "genre", "duration", "year", "artist"] {
            assert!(raw.contains(&format!("\"{key}\":")), "missing {key}");
        }
    }
}
