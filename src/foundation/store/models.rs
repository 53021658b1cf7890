use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placeholder for textual tag fields missing from a file.
pub const UNKNOWN: &str = "unknown";

/// Name of the cover image every album folder is expected to hold.
pub const COVER_FILE_NAME: &str = "cover.jpg";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Track {
    pub title: String,
    /// Base64 text of the first embedded picture, empty when there is none.
    pub artwork: String,
    pub genre: String,
    /// Seconds.
    pub duration: f64,
    /// 0 when unknown.
    pub year: u32,
    pub artist: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub album_name: String,
    pub album_cover: String,
    pub tracks: Vec<Track>,
}

/// Album name to album record.
pub type LibraryMap = HashMap<String, Album>;
