mod lister;
#[allow(clippy::module_inception)]
mod process;
mod validate;

pub use lister::{DirectoryLister, FsLister};
pub use process::CatalogBuilder;
pub use validate::{validate_folder, InvalidReason, Validation, SONG_EXTENSIONS};

#[cfg(test)]
pub use lister::MockDirectoryLister;
