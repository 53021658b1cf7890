//! Catalog assembly: turns every registered library path into an album
//! record and persists the resulting catalog.

use super::DirectoryLister;
use crate::configuration::LibrarySettings;
use crate::error::{LibraryError, Result};
use crate::foundation::store::{Album, CatalogStore, LibraryMap, PathRegistry, COVER_FILE_NAME};
use crate::foundation::utils::{album_name_from_path, has_extension};
use crate::metadata::{MetadataExtractor, TagParser};
use std::path::Path;
use tracing::{error, info, warn};

/// Builds the full catalog from the path registry.
pub struct CatalogBuilder<P, L> {
    registry: PathRegistry,
    store: CatalogStore,
    extractor: MetadataExtractor<P>,
    lister: L,
    settings: LibrarySettings,
}

impl<P: TagParser, L: DirectoryLister> CatalogBuilder<P, L> {
    pub fn new(
        registry: PathRegistry,
        store: CatalogStore,
        extractor: MetadataExtractor<P>,
        lister: L,
        settings: LibrarySettings,
    ) -> Self {
        Self {
            registry,
            store,
            extractor,
            lister,
            settings,
        }
    }

    pub fn registry(&self) -> &PathRegistry {
        &self.registry
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn lister(&self) -> &L {
        &self.lister
    }

    /// The stored catalog as-is, without checking it against the registry.
    /// When none is stored yet, one is built and persisted first.
    pub async fn read_catalog(&self) -> Result<LibraryMap> {
        if let Some(map) = self.store.load().await? {
            return Ok(map);
        }

        info!(file = %self.store.file().display(), "No catalog on disk, building one");
        self.build().await
    }

    /// Rebuild the catalog from scratch and overwrite the stored one.
    ///
    /// Paths are processed in registry order and the entries of each folder
    /// in listing order, one at a time. An album whose name was already
    /// produced by an earlier path replaces it.
    ///
    /// # Errors
    ///
    /// Any listing or metadata failure aborts the whole build. Nothing is
    /// written in that case, so the previously stored catalog stays intact.
    pub async fn build(&self) -> Result<LibraryMap> {
        let paths = self.registry.read().await?;
        let mut library = LibraryMap::new();

        if paths.is_empty() {
            info!("No library paths registered, storing an empty catalog");
            self.store.write(&library).await?;
            return Ok(library);
        }

        for path in &paths {
            let album = self.build_album(path).await?;
            let name = album.album_name.clone();
            let track_count = album.tracks.len();

            if let Some(previous) = library.insert(name.clone(), album) {
                warn!(
                    album = %name,
                    path = %path,
                    replaced_cover = %previous.album_cover,
                    "Album name produced by more than one library path, keeping the last"
                );
            }
            info!(album = %name, tracks = track_count, "Album indexed");
        }

        self.store.write(&library).await?;
        info!(albums = library.len(), "Catalog built");
        Ok(library)
    }

    async fn build_album(&self, path: &str) -> Result<Album> {
        let dir = Path::new(path);
        let entries = self.lister.list(dir).await.map_err(|e| {
            error!(path = %dir.display(), error = %e, "Failed to list library path");
            LibraryError::io(dir, e)
        })?;

        let mut tracks = Vec::with_capacity(entries.len());
        for entry in entries.iter().filter(|e| self.is_track_candidate(e)) {
            tracks.push(self.extractor.extract(entry).await?);
        }

        Ok(Album {
            album_name: album_name_from_path(path),
            album_cover: dir.join(COVER_FILE_NAME).to_string_lossy().into_owned(),
            tracks,
        })
    }

    fn is_track_candidate(&self, entry: &Path) -> bool {
        !self.settings.filter_audio_extensions
            || has_extension(entry, self.settings.audio_extensions.as_slice())
    }
}
