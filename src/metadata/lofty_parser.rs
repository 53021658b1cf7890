use super::{RawTags, TagParser};
use crate::error::BoxError;
use async_trait::async_trait;
use lofty::prelude::*;
use lofty::tag::{ItemKey, Tag, TagItem};
use std::path::Path;

/// [`TagParser`] backed by `lofty`, run on the blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyParser;

#[async_trait]
impl TagParser for LoftyParser {
    async fn parse(&self, path: &Path) -> Result<RawTags, BoxError> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || read_tags(&path)).await?
    }
}

fn read_tags(path: &Path) -> Result<RawTags, BoxError> {
    let tagged = lofty::read_from_path(path)?;
    let duration = Some(tagged.properties().duration().as_secs_f64());

    let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
        return Ok(RawTags {
            duration,
            ..RawTags::default()
        });
    };

    let genres = text_items(tag, |item| matches!(item.key(), ItemKey::Genre))
        .map(str::to_string)
        .collect();
    let year = text_items(tag, |item| {
        matches!(item.key(), ItemKey::Year | ItemKey::RecordingDate)
    })
    .find_map(parse_year);

    let raw = RawTags {
        title: tag.title().map(|v| v.into_owned()),
        artist: tag.artist().map(|v| v.into_owned()),
        genres,
        pictures: tag.pictures().iter().map(|p| p.data().to_vec()).collect(),
        duration,
        year,
    };
    Ok(raw)
}

fn text_items<'a>(
    tag: &'a Tag,
    wanted: impl Fn(&TagItem) -> bool + 'a,
) -> impl Iterator<Item = &'a str> + 'a {
    tag.items()
        .filter(move |item| wanted(*item))
        .filter_map(|item| item.value().text())
}

/// Leading digits of a year or date string (`"1969"`, `"1969-09-26"`).
fn parse_year(text: &str) -> Option<u32> {
    let digits: String = text
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
