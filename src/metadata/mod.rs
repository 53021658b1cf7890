//! The metadata boundary: a tag parser producing raw tag records, and the
//! extractor turning those into catalog tracks.

mod extractor;
mod lofty_parser;

pub use extractor::{normalize, MetadataExtractor};
pub use lofty_parser::LoftyParser;

use crate::error::BoxError;
use async_trait::async_trait;
use std::path::Path;

/// Tag data as reported by a parser, before normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub genres: Vec<String>,
    /// Raw bytes of each embedded picture, in tag order.
    pub pictures: Vec<Vec<u8>>,
    /// Seconds.
    pub duration: Option<f64>,
    pub year: Option<u32>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagParser: Send + Sync {
    /// Parse the tags of the audio file at `path`.
    async fn parse(&self, path: &Path) -> Result<RawTags, BoxError>;
}
