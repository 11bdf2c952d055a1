use async_trait::async_trait;

pub mod errors;
pub mod models;
pub mod youtube;

pub use errors::FetchError;
pub use models::{SearchItem, SearchResponse};

/// Where the fetcher gets its video data from.
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Latest videos of a channel, newest first as ordered by the upstream.
    async fn search(&self, channel_id: &str) -> Result<SearchResponse, FetchError>;

    /// Actual end time of a (past) livestream, best effort.
    ///
    /// Any failure, or a video that never streamed, yields `None`.
    async fn end_time(&self, video_id: &str) -> Option<String>;
}
