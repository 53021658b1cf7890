mod catalog_store;
mod json_file;
mod models;
mod registry;

pub use catalog_store::CatalogStore;
pub use models::*;
pub use registry::PathRegistry;
