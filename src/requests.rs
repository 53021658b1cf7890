//! Named operations exposed to whatever transport delivers user requests.

use crate::configuration::{AppFolder, LibrarySettings};
use crate::error::Result;
use crate::foundation::store::{CatalogStore, LibraryMap, PathRegistry};
use crate::metadata::{LoftyParser, MetadataExtractor, TagParser};
use crate::process::{validate_folder, CatalogBuilder, DirectoryLister, FsLister, Validation};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Request {
    AddPath(String),
    RemovePath(String),
    ListPaths,
    BuildCatalog,
    ReadCatalog,
    ValidateFolder(PathBuf),
    /// Ask the folder picker for a path and register it.
    SelectAndAddPath,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Response {
    Paths(Vec<String>),
    Catalog(LibraryMap),
    Validation(Validation),
    /// Whether the operation changed the registry.
    Added(bool),
    Removed(bool),
}

/// Interactive folder selection. `None` means the user cancelled.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FolderPicker: Send + Sync {
    async fn pick(&self) -> Option<PathBuf>;
}

/// Picker for surfaces without any selection UI; always cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPicker;

#[async_trait]
impl FolderPicker for NoPicker {
    async fn pick(&self) -> Option<PathBuf> {
        None
    }
}

/// The indexing pipeline behind a single request entry point.
pub struct Library<P = LoftyParser, L = FsLister> {
    builder: CatalogBuilder<P, L>,
    picker: Box<dyn FolderPicker>,
}

impl Library {
    /// Library over the files of `folder`, reading real tags from disk.
    pub fn open(folder: &AppFolder, settings: LibrarySettings) -> Self {
        Self::new(CatalogBuilder::new(
            PathRegistry::new(&folder.library_paths_file),
            CatalogStore::new(&folder.catalog_file),
            MetadataExtractor::new(LoftyParser),
            FsLister,
            settings,
        ))
    }
}

impl<P: TagParser, L: DirectoryLister> Library<P, L> {
    pub fn new(builder: CatalogBuilder<P, L>) -> Self {
        Self {
            builder,
            picker: Box::new(NoPicker),
        }
    }

    pub fn with_picker(mut self, picker: Box<dyn FolderPicker>) -> Self {
        self.picker = picker;
        self
    }

    /// Run one request to completion.
    pub async fn handle(&mut self, request: Request) -> Result<Response> {
        info!(?request, "Handling request");

        match request {
            Request::AddPath(path) => {
                self.add_path(&path).await?;
                Ok(Response::Added(true))
            }
            Request::RemovePath(path) => Ok(Response::Removed(self.remove_path(&path).await?)),
            Request::ListPaths => Ok(Response::Paths(self.paths().await?)),
            Request::BuildCatalog => Ok(Response::Catalog(self.build_catalog().await?)),
            Request::ReadCatalog => Ok(Response::Catalog(self.read_catalog().await?)),
            Request::ValidateFolder(folder) => {
                Ok(Response::Validation(self.validate(&folder).await?))
            }
            Request::SelectAndAddPath => Ok(Response::Added(self.select_and_add().await?)),
        }
    }

    pub async fn add_path(&self, path: &str) -> Result<()> {
        self.builder.registry().add(path).await
    }

    pub async fn remove_path(&self, path: &str) -> Result<bool> {
        self.builder.registry().remove(path).await
    }

    pub async fn paths(&self) -> Result<Vec<String>> {
        self.builder.registry().read().await
    }

    pub async fn build_catalog(&self) -> Result<LibraryMap> {
        self.builder.build().await
    }

    /// The stored catalog; built on first use.
    pub async fn read_catalog(&self) -> Result<LibraryMap> {
        self.builder.read_catalog().await
    }

    pub async fn validate(&self, folder: &Path) -> Result<Validation> {
        validate_folder(self.builder.lister(), folder).await
    }

    /// Register the folder chosen in the picker. Returns `false` on cancel.
    pub async fn select_and_add(&self) -> Result<bool> {
        let Some(folder) = self.picker.pick().await else {
            info!("Folder selection cancelled");
            return Ok(false);
        };

        self.add_path(&folder.to_string_lossy()).await?;
        Ok(true)
    }
}
