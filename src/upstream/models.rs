//! Decode targets for the Data API responses
//!
//! Only the fields the fetcher reads are mirrored; everything else in the
//! upstream payload is ignored.

use serde::Deserialize;

/// Search endpoint response
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SearchResponse {
    /// Absent and `null` both decode to `None`
    #[serde(default)]
    pub items: Option<Vec<SearchItem>>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SearchItem {
    pub id: VideoRef,
    pub snippet: Snippet,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoRef {
    pub video_id: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    /// "live", "upcoming" or "none"
    pub live_broadcast_content: String,
    #[serde(default)]
    pub published_at: Option<String>,
}

impl SearchItem {
    pub fn video_id(&self) -> &str {
        &self.id.video_id
    }

    pub fn broadcast_content(&self) -> &str {
        &self.snippet.live_broadcast_content
    }

    /// Publish time, `None` when missing or empty
    pub fn published_at(&self) -> Option<&str> {
        self.snippet
            .published_at
            .as_deref()
            .filter(|published| !published.is_empty())
    }
}

/// Videos (details) endpoint response
#[derive(Deserialize, Debug, Clone, Default)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoDetails>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    #[serde(default)]
    pub live_streaming_details: Option<LiveStreamingDetails>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LiveStreamingDetails {
    #[serde(default)]
    pub actual_end_time: Option<String>,
}

impl VideoListResponse {
    /// End time of the first item, if it has a non-empty one
    pub fn actual_end_time(self) -> Option<String> {
        self.items
            .into_iter()
            .next()
            .and_then(|item| item.live_streaming_details)
            .and_then(|details| details.actual_end_time)
            .filter(|end| !end.is_empty())
    }
}
