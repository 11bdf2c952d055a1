//! One refresh cycle: search, select, look up the end time, build a snapshot

use async_trait::async_trait;
use time::OffsetDateTime;
use crate::scheduler::Refresh;
use crate::snapshot::{Snapshot, LIVE};
use crate::upstream::VideoSource;

pub mod select;

pub use select::{select, Selection};

pub struct Fetcher<S> {
    source: S,
    channel_id: String,
}

impl<S: VideoSource> Fetcher<S> {
    pub fn new(source: S, channel_id: String) -> Self {
        Self { source, channel_id }
    }

    /// Run one cycle. Every failure resolves to the sentinel snapshot.
    pub async fn fetch(&self) -> Snapshot {
        let response = match self.source.search(&self.channel_id).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("search for channel {} failed: {}", self.channel_id, e);
                return Snapshot::none(OffsetDateTime::now_utc());
            }
        };

        let items = match response.items {
            Some(items) if !items.is_empty() => items,
            _ => {
                tracing::warn!("search for channel {} returned no items", self.channel_id);
                return Snapshot::none(OffsetDateTime::now_utc());
            }
        };

        match select(&items) {
            Selection::Live(item) => {
                tracing::info!("channel {} is live: {}", self.channel_id, item.video_id());
                Snapshot {
                    status: item.broadcast_content().to_string(),
                    video_id: item.video_id().to_string(),
                    updated: LIVE.to_string(),
                    fetched_at: OffsetDateTime::now_utc(),
                }
            }
            Selection::Recent(item) => {
                // only called with items that carry a publish time
                let published_at = item.published_at().unwrap_or_default();
                let updated = match self.source.end_time(item.video_id()).await {
                    Some(end_time) => end_time,
                    None => {
                        tracing::debug!("no end time for {}, using publish time", item.video_id());
                        published_at.to_string()
                    }
                };
                tracing::info!(
                    "channel {} most recent video: {} ({})",
                    self.channel_id,
                    item.video_id(),
                    updated
                );
                Snapshot {
                    status: item.broadcast_content().to_string(),
                    video_id: item.video_id().to_string(),
                    updated,
                    fetched_at: OffsetDateTime::now_utc(),
                }
            }
            Selection::Nothing => {
                tracing::warn!("no item for channel {} carries a publish time", self.channel_id);
                Snapshot::none(OffsetDateTime::now_utc())
            }
        }
    }
}

#[async_trait]
impl<S: VideoSource> Refresh for Fetcher<S> {
    async fn refresh(&self) -> Snapshot {
        self.fetch().await
    }
}
