pub mod configuration;
pub mod error;
pub mod foundation;
pub mod metadata;
pub mod process;
pub mod requests;
pub mod startup;

pub use configuration::*;
pub use error::{ErrorKind, LibraryError, Result};
pub use foundation::store::*;
pub use process::{validate_folder, CatalogBuilder, InvalidReason, Validation};
pub use requests::{FolderPicker, Library, Request, Response};
