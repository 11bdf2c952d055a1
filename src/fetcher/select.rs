//! Picks the one video a snapshot describes

use crate::snapshot::LIVE;
use crate::upstream::SearchItem;

#[derive(Debug, PartialEq)]
pub enum Selection<'a> {
    /// A broadcast is in progress
    Live(&'a SearchItem),
    /// Most recently published video, no broadcast in progress
    Recent(&'a SearchItem),
    /// Nothing usable
    Nothing,
}

/// The first live item wins outright. Otherwise the item with the latest
/// publish time wins; items without one are skipped and the earlier item in
/// list order keeps a tie.
///
/// Publish times are fixed-width ISO-8601 strings, so comparing them as
/// strings orders them chronologically.
pub fn select(items: &[SearchItem]) -> Selection<'_> {
    if let Some(live) = items.iter().find(|item| item.broadcast_content() == LIVE) {
        return Selection::Live(live);
    }

    items
        .iter()
        .filter_map(|item| item.published_at().map(|published| (published, item)))
        .reduce(|best, candidate| if best.0 < candidate.0 { candidate } else { best })
        .map_or(Selection::Nothing, |(_, item)| Selection::Recent(item))
}
