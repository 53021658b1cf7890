use super::{RawTags, TagParser};
use crate::error::{LibraryError, Result};
use crate::foundation::store::{Track, UNKNOWN};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;
use tracing::{debug, error};

/// Wraps a [`TagParser`] and shapes its output into [`Track`]s.
#[derive(Debug, Clone)]
pub struct MetadataExtractor<P> {
    parser: P,
}

impl<P: TagParser> MetadataExtractor<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Parse `path` once and normalize the result. A parse failure is
    /// returned as [`LibraryError::MetadataParse`].
    pub async fn extract(&self, path: &Path) -> Result<Track> {
        let raw = self.parser.parse(path).await.map_err(|source| {
            error!(path = %path.display(), error = %source, "Failed to parse track metadata");
            LibraryError::MetadataParse {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let track = normalize(raw);
        debug!(path = %path.display(), title = %track.title, "Track extracted");
        Ok(track)
    }
}

/// Fill missing fields with their defaults: `"unknown"` for title and
/// artist, empty text for genre and artwork, `0` for duration and year.
pub fn normalize(raw: RawTags) -> Track {
    let RawTags {
        title,
        artist,
        genres,
        pictures,
        duration,
        year,
    } = raw;

    Track {
        title: non_empty(title).unwrap_or_else(|| UNKNOWN.to_string()),
        artist: non_empty(artist).unwrap_or_else(|| UNKNOWN.to_string()),
        genre: genres.into_iter().next().unwrap_or_default(),
        artwork: pictures
            .first()
            .map(|data| STANDARD.encode(data))
            .unwrap_or_default(),
        duration: duration.filter(|d| d.is_finite() && *d >= 0.0).unwrap_or(0.0),
        year: year.unwrap_or(0),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::metadata::MockTagParser;

    #[test]
    fn test_normalize_fills_defaults() {
        let track = normalize(RawTags::default());
        assert_eq!(
            track,
            Track {
                title: "unknown".into(),
                artwork: String::new(),
                genre: String::new(),
                duration: 0.0,
                year: 0,
                artist: "unknown".into(),
            }
        );
    }

    #[test]
    fn test_normalize_takes_first_genre_and_picture() {
        let track = normalize(RawTags {
            title: Some("So What".into()),
            artist: Some("Miles Davis".into()),
            genres: vec!["Jazz".into(), "Modal".into()],
            pictures: vec![b"hi".to_vec(), b"ignored".to_vec()],
            duration: Some(562.0),
            year: Some(1959),
        });

        assert_eq!(track.title, "So What");
        assert_eq!(track.artist, "Miles Davis");
        assert_eq!(track.genre, "Jazz");
        assert_eq!(track.artwork, "aGk=");
        assert_eq!(track.duration, 562.0);
        assert_eq!(track.year, 1959);
    }

    #[test]
    fn test_normalize_treats_blank_text_as_missing() {
        let track = normalize(RawTags {
            title: Some("   ".into()),
            artist: Some(String::new()),
            duration: Some(f64::NAN),
            ..RawTags::default()
        });
        assert_eq!(track.title, "unknown");
        assert_eq!(track.artist, "unknown");
        assert_eq!(track.duration, 0.0);
    }

    #[tokio::test]
    async fn test_extract_calls_parser_once() {
        let mut parser = MockTagParser::new();
        parser
            .expect_parse()
            .withf(|path| path == Path::new("/music/a.mp3"))
            .times(1)
            .returning(|_| {
                Ok(RawTags {
                    title: Some("A".into()),
                    ..RawTags::default()
                })
            });

        let extractor = MetadataExtractor::new(parser);
        let track = extractor.extract(Path::new("/music/a.mp3")).await.unwrap();
        assert_eq!(track.title, "A");
    }

    #[tokio::test]
    async fn test_extract_surfaces_parse_failure() {
        let mut parser = MockTagParser::new();
        parser
            .expect_parse()
            .returning(|_| Err("unsupported format".into()));

        let extractor = MetadataExtractor::new(parser);
        let err = extractor
            .extract(Path::new("/music/notes.txt"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ParseFailure);
        assert!(matches!(err, LibraryError::MetadataParse { ref path, .. } if path == Path::new("/music/notes.txt")));
    }
}
